//! The [`validator!`] macro: one declaration produces the struct, its
//! [`Validate`](crate::foundation::Validate) impl and a factory function.
//!
//! ```rust,ignore
//! validator! {
//!     /// Value is all ASCII digits.
//!     pub AsciiDigits for str;
//!     rule(input) { input.bytes().all(|b| b.is_ascii_digit()) }
//!     error(input) { ValidationError::invalid_format("digits") }
//!     fn ascii_digits();
//! }
//! ```
//!
//! Forms accepted:
//!
//! - unit struct: `pub Name for Input; rule(input) {..} error(input) {..} fn factory();`
//! - struct with fields and a generated `new` taking every field in order
//! - struct with fields and a hand-written `new(..) { .. }` body
//! - struct with fields and a fallible `new(..) -> ErrorType { .. }` body;
//!   the factory then returns `Result<Name, ErrorType>`
//!
//! `#[derive(Debug, Clone)]` is always applied; unit structs also get
//! `Copy, PartialEq, Eq, Hash`. Extra derives go in the leading attributes.

#[macro_export]
macro_rules! validator {
    // Unit struct.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // Fields, fallible hand-written `new`.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $crate::validator!(@impl $name for $input; rule($self_, $inp) $rule error($self2, $einp) $err);

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // Fields, hand-written `new`.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name for $input; rule($self_, $inp) $rule error($self2, $einp) $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // Fields, generated `new`.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        impl $name {
            #[must_use]
            pub const fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name for $input; rule($self_, $inp) $rule error($self2, $einp) $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    (@struct $(#[$meta:meta])* $vis:vis $name:ident { $($field:ident: $fty:ty),+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }
    };

    (@impl $name:ident for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
