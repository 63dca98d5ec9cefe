use std::collections::HashMap;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use eventdesk_validator::{
    EventKind, FieldEvent, FormCatalog, FormSession, FormSpec, SubmitEvent,
};
use tracing_subscriber::{EnvFilter, fmt};

mod terminal;

use terminal::TerminalSink;

#[derive(Parser)]
#[command(name = "eventdesk", version, about = "Check EventDesk form input from the terminal")]
struct Cli {
    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in forms and their fields
    Forms(FormsArgs),
    /// Submit a form; exits with status 1 when submission is cancelled
    Check(CheckArgs),
    /// Send one input or blur event to a field
    Field(FieldArgs),
}

#[derive(Args)]
struct FormsArgs {
    /// Print the full catalog as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CheckArgs {
    /// Form name, e.g. `contact`
    form: String,
    /// Field value as `id=value`; repeat for each field. Missing fields are empty.
    #[arg(long = "value", value_name = "ID=VALUE", value_parser = parse_field_value)]
    values: Vec<(String, String)>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FieldArgs {
    form: String,
    field: String,
    value: String,
    #[arg(long, value_enum, default_value_t = EventArg::Blur)]
    event: EventArg,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum EventArg {
    Input,
    Blur,
}

impl From<EventArg> for EventKind {
    fn from(arg: EventArg) -> Self {
        match arg {
            EventArg::Input => Self::Input,
            EventArg::Blur => Self::Blur,
        }
    }
}

fn parse_field_value(raw: &str) -> Result<(String, String), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got `{raw}`"))?;
    if id.is_empty() {
        return Err("field id must not be empty".into());
    }
    Ok((id.to_owned(), value.to_owned()))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn find_form<'c>(catalog: &'c FormCatalog, name: &str) -> Result<&'c FormSpec> {
    catalog.get(name).ok_or_else(|| {
        let known: Vec<&str> = catalog.names().collect();
        anyhow!("unknown form `{name}` (known: {})", known.join(", "))
    })
}

fn cmd_forms(catalog: &FormCatalog, args: &FormsArgs) -> Result<ExitCode> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(ExitCode::SUCCESS);
    }
    for form in catalog.iter() {
        println!("{}", form.name());
        for field in form.fields() {
            let rules: Vec<&str> = field.rules().iter().map(|rule| rule.name()).collect();
            println!(
                "  {:<12} on {:<6} [{}]",
                field.id(),
                field.trigger().as_str(),
                rules.join(", ")
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(catalog: &FormCatalog, args: &CheckArgs) -> Result<ExitCode> {
    let form = find_form(catalog, &args.form)?;
    let values: HashMap<String, String> = args.values.iter().cloned().collect();
    for id in values.keys() {
        if form.field(id).is_none() {
            tracing::warn!(form = form.name(), field = %id, "value for undeclared field ignored");
        }
    }

    let mut session = FormSession::new(form);
    let mut sink = TerminalSink::new();
    let mut submit = SubmitEvent::new();
    let report = session.submit(&values, &mut sink, &mut submit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", sink.render());
        if submit.default_prevented() {
            let invalid = report.invalid().count();
            println!("submission cancelled: {invalid} of {} fields invalid", report.len());
        } else {
            println!("submission allowed");
        }
    }

    Ok(if submit.default_prevented() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn cmd_field(catalog: &FormCatalog, args: &FieldArgs) -> Result<ExitCode> {
    let form = find_form(catalog, &args.form)?;
    let values = HashMap::from([(args.field.clone(), args.value.clone())]);
    let event = FieldEvent {
        field: args.field.clone(),
        kind: args.event.into(),
    };

    let mut session = FormSession::new(form);
    let mut sink = TerminalSink::new();
    let result = session
        .handle(&event, &values, &mut sink)
        .context("cannot send event")?;

    match (&result, args.json) {
        (Some(result), true) => println!("{}", serde_json::to_string_pretty(result)?),
        (Some(_), false) => print!("{}", sink.render()),
        (None, true) => println!("null"),
        (None, false) => {
            let trigger = form
                .field(&args.field)
                .map_or("submit", |field| field.trigger().as_str());
            println!("ignored: `{}` validates on {trigger}", args.field);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = FormCatalog::try_builtin().context("invalid built-in form catalog")?;
    match &cli.command {
        Commands::Forms(args) => cmd_forms(&catalog, args),
        Commands::Check(args) => cmd_check(&catalog, args),
        Commands::Field(args) => cmd_field(&catalog, args),
    }
}
