//! Presence and length validators.
//!
//! Length is measured in Unicode scalar values (`chars`), so `"héllo"` has
//! length 5 even though it is 6 bytes.

use crate::foundation::ValidationError;

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

crate::validator! {
    /// Value contains at least one character other than whitespace or a
    /// byte-order mark (U+FEFF).
    ///
    /// This is the predicate behind the `required` rule: `""` and `"   "`
    /// both fail.
    pub NotBlank for str;
    rule(input) {
        !input
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
            .is_empty()
    }
    error(input) { ValidationError::required() }
    fn not_blank();
}

crate::validator! {
    /// Value has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { char_len(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, char_len(input)) }
    fn min_length(min: usize);
}

crate::validator! {
    /// Value has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { char_len(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, char_len(input)) }
    fn max_length(max: usize);
}
