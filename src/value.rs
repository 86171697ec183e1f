/*!
Token-to-value decoding for the closed set of primitive argument types.

The [`Value`] trait is the "type" part of a registered argument: it knows how
to decode a single raw token into a typed value, whether the type behaves as
a flag (takes no argument token), what to assume when the argument never
appears, and how to render itself for help output. No token resolution
happens here; the parser hands each implementation the already-isolated
value text.
*/

use core::fmt::Display;

use thiserror::Error;

/// A raw token failed to decode into the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValueError {
    message: String,
}

impl ValueError {
    pub(crate) fn new(message: impl Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/**
A type that can be stored in a registered argument.

Decoding is strict: the whole token must be consumed, so `"12x"` is not an
integer and `"ab"` is not a `char`. Flags are the one type that never
receives a token; they decode from the empty string only, and assume `false`
when absent.
*/
pub trait Value: Clone + Default + 'static {
    /// Hint shown in help output between angle brackets. Empty for flags,
    /// which take no value.
    const HINT: &'static str;

    /// Flags never consume a following token; they decode from the empty
    /// string.
    const IS_FLAG: bool = false;

    /// Decode a single raw token into a value of this type.
    fn parse_token(token: &str) -> Result<Self, ValueError>;

    /**
    The value assumed when the argument never appears on the command line.

    Most types have no such value and rely on an explicit default; `bool`
    flags are implicitly `false` when absent.
    */
    #[inline]
    fn absent() -> Option<Self> {
        None
    }

    /// Render a value the way it should appear as a default in help output.
    fn render(&self) -> String;
}

macro_rules! numeric {
    ($($type:ident => $hint:literal,)*) => {$(
        impl Value for $type {
            const HINT: &'static str = $hint;

            #[inline]
            fn parse_token(token: &str) -> Result<Self, ValueError> {
                token.parse().map_err(ValueError::new)
            }

            #[inline]
            fn render(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

numeric! {
    i8 => "int",
    i16 => "int",
    i32 => "int",
    i64 => "int",
    isize => "int",

    u8 => "uint",
    u16 => "uint",
    u32 => "uint",
    u64 => "uint",
    usize => "uint",

    f32 => "float",
    f64 => "float",
}

impl Value for String {
    const HINT: &'static str = "string";

    #[inline]
    fn parse_token(token: &str) -> Result<Self, ValueError> {
        Ok(token.to_owned())
    }

    #[inline]
    fn render(&self) -> String {
        self.clone()
    }
}

impl Value for char {
    const HINT: &'static str = "char";

    #[inline]
    fn parse_token(token: &str) -> Result<Self, ValueError> {
        let mut characters = token.chars();

        match (characters.next(), characters.next()) {
            (Some(character), None) => Ok(character),
            _ => Err(ValueError::new("expected exactly one character")),
        }
    }

    #[inline]
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Value for bool {
    const HINT: &'static str = "";
    const IS_FLAG: bool = true;

    #[inline]
    fn parse_token(token: &str) -> Result<Self, ValueError> {
        match token.is_empty() {
            true => Ok(true),
            false => Err(ValueError::new("a flag doesn't take a value")),
        }
    }

    #[inline]
    fn absent() -> Option<Self> {
        Some(false)
    }

    #[inline]
    fn render(&self) -> String {
        match *self {
            true => "true",
            false => "false",
        }
        .to_owned()
    }
}
