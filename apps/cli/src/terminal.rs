//! Terminal rendering of validation messages.

use std::fmt::Write as _;

use eventdesk_validator::ErrorSink;

/// Records what a page would show next to each field, in call order.
///
/// A later call for the same field replaces the earlier one, the way an
/// inline message slot behaves.
#[derive(Debug, Default)]
pub struct TerminalSink {
    slots: Vec<(String, Option<String>)>,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, field_id: &str) -> &mut Option<String> {
        let index = match self.slots.iter().position(|(id, _)| id == field_id) {
            Some(index) => index,
            None => {
                self.slots.push((field_id.to_owned(), None));
                self.slots.len() - 1
            }
        };
        &mut self.slots[index].1
    }

    /// One line per field: `✗ id: message` or `✓ id`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (field_id, message) in &self.slots {
            let _ = match message {
                Some(message) => writeln!(out, "✗ {field_id}: {message}"),
                None => writeln!(out, "✓ {field_id}"),
            };
        }
        out
    }
}

impl ErrorSink for TerminalSink {
    fn show_error_msg(&mut self, field_id: &str, message: &str) {
        *self.slot(field_id) = Some(message.to_owned());
    }

    fn hide_error_msg(&mut self, field_id: &str) {
        *self.slot(field_id) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_slot() {
        let mut sink = TerminalSink::new();
        sink.show_error_msg("email", "Email is required");
        sink.hide_error_msg("name");
        sink.show_error_msg("email", "Please enter a valid email address");
        sink.show_error_msg("email", "Please enter a valid email address");

        assert_eq!(
            sink.render(),
            "✗ email: Please enter a valid email address\n✓ name\n"
        );
    }
}
