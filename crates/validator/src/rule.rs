//! Named rules: a predicate, the message shown when it fails, and a
//! descriptor saying what kind of check it is.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::combinators::WithMessage;
use crate::foundation::{Validate, ValidationError};

/// What a rule checks, independent of its predicate object.
///
/// Marks presence rules for the ordering check in
/// [`FieldSpecBuilder::build`](crate::FieldSpecBuilder::build), and describes
/// forms to clients that wire their own listeners.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleDescriptor {
    Required,
    MinLength { min: usize },
    MaxLength { max: usize },
    Email,
    ExactDigits { digits: usize },
    Pattern { pattern: String },
    Custom,
}

impl RuleDescriptor {
    /// Presence rules reject blank input.
    pub fn is_presence(&self) -> bool {
        matches!(self, Self::Required)
    }
}

type DynCheck = Arc<dyn Validate<Input = str> + Send + Sync>;

/// A named, pure predicate over a field's value plus its failure message.
///
/// Cloning is cheap: the predicate is shared.
///
/// # Examples
///
/// ```rust
/// use eventdesk_validator::{Rule, RuleDescriptor};
/// use eventdesk_validator::validators::MinLength;
///
/// let rule = Rule::new(
///     "min_length",
///     RuleDescriptor::MinLength { min: 3 },
///     MinLength::new(3),
///     "Subject must be at least 3 characters",
/// );
///
/// assert!(rule.holds("RSVP"));
/// assert!(!rule.holds("Hi"));
/// assert_eq!(rule.check("Hi").unwrap_err().message, "Subject must be at least 3 characters");
/// ```
#[derive(Clone)]
pub struct Rule {
    name: Cow<'static, str>,
    descriptor: RuleDescriptor,
    check: WithMessage<DynCheck>,
}

impl Rule {
    /// Creates a rule from any `str` validator.
    ///
    /// The message is checked for emptiness when the rule is attached to a
    /// field, see [`FieldSpecBuilder::build`](crate::FieldSpecBuilder::build).
    pub fn new<V>(
        name: impl Into<Cow<'static, str>>,
        descriptor: RuleDescriptor,
        validator: V,
        message: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        let check: DynCheck = Arc::new(validator);
        Self {
            name: name.into(),
            descriptor,
            check: WithMessage::new(check, message),
        }
    }

    /// Rule name, e.g. `"required"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    /// Message reported when the predicate returns false.
    pub fn message(&self) -> &str {
        self.check.message()
    }

    /// The predicate.
    pub fn holds(&self, value: &str) -> bool {
        self.check.is_valid(value)
    }

    /// The predicate with a structured failure carrying this rule's message.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        self.check.validate(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor)
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct RuleView<'a> {
    name: &'a str,
    message: &'a str,
    #[serde(flatten)]
    descriptor: &'a RuleDescriptor,
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RuleView {
            name: self.name(),
            message: self.message(),
            descriptor: &self.descriptor,
        }
        .serialize(serializer)
    }
}
