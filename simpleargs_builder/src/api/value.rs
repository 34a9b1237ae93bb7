use std::num::IntErrorKind;
use std::str::FromStr;

use crate::parser::ParseError;

/// A parsed option value.
///
/// Values of every declared type are carried through the parser in this one form.
/// Use [`ArgsContainer::get`](crate::ArgsContainer::get) to retrieve them as their declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A valueless option which was present on the command line.
    Flag,
    #[allow(missing_docs)]
    Bool(bool),
    #[allow(missing_docs)]
    I8(i8),
    #[allow(missing_docs)]
    I16(i16),
    #[allow(missing_docs)]
    I32(i32),
    #[allow(missing_docs)]
    I64(i64),
    #[allow(missing_docs)]
    I128(i128),
    #[allow(missing_docs)]
    Isize(isize),
    #[allow(missing_docs)]
    U8(u8),
    #[allow(missing_docs)]
    U16(u16),
    #[allow(missing_docs)]
    U32(u32),
    #[allow(missing_docs)]
    U64(u64),
    #[allow(missing_docs)]
    U128(u128),
    #[allow(missing_docs)]
    Usize(usize),
    #[allow(missing_docs)]
    F32(f32),
    #[allow(missing_docs)]
    F64(f64),
    #[allow(missing_docs)]
    Text(String),
    /// A user type, carried as its formatted text and tagged with its type name.
    Custom {
        /// The [`std::any::type_name`] of the user type.
        type_name: &'static str,
        /// The user type's [`ArgType::format_text`].
        text: String,
    },
}

impl Value {
    /// Erase a user type into [`Value::Custom`].
    pub fn custom<T: ArgType>(value: &T) -> Self {
        Value::Custom {
            type_name: std::any::type_name::<T>(),
            text: value.format_text(),
        }
    }

    /// Recover a user type from [`Value::Custom`], or `None` if the value holds a different type.
    pub fn as_custom<T: ArgType>(&self) -> Option<T> {
        match self {
            Value::Custom { type_name, text } if *type_name == std::any::type_name::<T>() => {
                T::parse_text(text).ok()
            }
            _ => None,
        }
    }
}

/// Behaviour for a type which may be the value of an option.
///
/// Implemented for `bool`, the primitive integers, `f32`, `f64` and `String`.
/// A custom type implements this by mapping itself onto [`Value::Custom`] (see [`Value::custom`] and [`Value::as_custom`]).
/// The type name tag keeps a custom option from being read back as a `String`, or as another custom type.
///
/// ### Example
/// ```
/// # use simpleargs_builder as simpleargs;
/// use simpleargs::{prelude::*, ParseError, Value};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// impl ArgType for Level {
///     fn parse_text(text: &str) -> Result<Self, ParseError> {
///         match text {
///             "low" => Ok(Level::Low),
///             "high" => Ok(Level::High),
///             _ => Err(ParseError::new(format!("unknown level '{text}'."))),
///         }
///     }
///
///     fn format_text(&self) -> String {
///         match self {
///             Level::Low => "low".to_string(),
///             Level::High => "high".to_string(),
///         }
///     }
///
///     fn into_value(self) -> Value {
///         Value::custom(&self)
///     }
///
///     fn from_value(value: &Value) -> Option<Self> {
///         value.as_custom()
///     }
/// }
///
/// assert_eq!(Level::parse_text("high").unwrap(), Level::High);
/// assert_eq!(Level::from_value(&Level::High.into_value()), Some(Level::High));
/// assert_eq!(Level::from_value(&Value::Text("high".to_string())), None);
/// assert_eq!(String::from_value(&Level::High.into_value()), None);
/// ```
pub trait ArgType: Sized + Clone + Send + Sync + 'static {
    /// Convert the raw command line text into this type.
    fn parse_text(text: &str) -> Result<Self, ParseError>;

    /// Format this value for display in the help page.
    fn format_text(&self) -> String;

    /// Erase the type.
    fn into_value(self) -> Value;

    /// Recover the type, or `None` if the value holds a different type.
    fn from_value(value: &Value) -> Option<Self>;
}

fn conversion_error<T>(text: &str, cause: impl std::fmt::Display) -> ParseError {
    ParseError::new(format!(
        "cannot convert '{text}' to {type_name}: {cause}.",
        type_name = std::any::type_name::<T>(),
    ))
}

// Parse through the widest integer forms, then range check into T.
fn parse_integral<T>(text: &str) -> Result<T, ParseError>
where
    T: TryFrom<i128> + TryFrom<u128>,
{
    match i128::from_str(text) {
        Ok(wide) => T::try_from(wide).map_err(|_| ParseError::out_of_range()),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => match u128::from_str(text) {
                Ok(wide) => T::try_from(wide).map_err(|_| ParseError::out_of_range()),
                Err(_) => Err(ParseError::out_of_range()),
            },
            IntErrorKind::NegOverflow => Err(ParseError::out_of_range()),
            _ => Err(conversion_error::<T>(text, error)),
        },
    }
}

// Whether the mantissa of a float literal is all zeros (ex: `0`, `-0.00`, `0e10`).
fn is_zero_text(text: &str) -> bool {
    text.split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.chars().all(|c| !c.is_ascii_digit() || c == '0'))
}

macro_rules! integral_arg_type {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl ArgType for $t {
                fn parse_text(text: &str) -> Result<Self, ParseError> {
                    parse_integral::<$t>(text)
                }

                fn format_text(&self) -> String {
                    self.to_string()
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(*inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

macro_rules! floating_arg_type {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl ArgType for $t {
                fn parse_text(text: &str) -> Result<Self, ParseError> {
                    let value = <$t>::from_str(text).map_err(|error| conversion_error::<$t>(text, error))?;

                    // Overflowing text rounds to infinity, underflowing text to zero.
                    if value.is_infinite() || (value == 0.0 && !is_zero_text(text)) {
                        return Err(ParseError::out_of_range());
                    }

                    Ok(value)
                }

                fn format_text(&self) -> String {
                    self.to_string()
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(*inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

integral_arg_type!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
);

floating_arg_type!(f32 => F32, f64 => F64);

impl ArgType for bool {
    fn parse_text(text: &str) -> Result<Self, ParseError> {
        bool::from_str(text).map_err(|error| conversion_error::<bool>(text, error))
    }

    fn format_text(&self) -> String {
        self.to_string()
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            // A flag is only ever recorded when present.
            Value::Flag => Some(true),
            Value::Bool(inner) => Some(*inner),
            _ => None,
        }
    }
}

impl ArgType for String {
    fn parse_text(text: &str) -> Result<Self, ParseError> {
        Ok(text.to_string())
    }

    fn format_text(&self) -> String {
        self.clone()
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(inner) => Some(inner.clone()),
            _ => None,
        }
    }
}

/// The value slot of an option: its type `T` and an optional default.
///
/// ### Example
/// ```
/// # use simpleargs_builder as simpleargs;
/// use simpleargs::ArgValue;
///
/// let port = ArgValue::<u16>::new().with_default(8080);
/// assert!(port.has_default());
/// assert_eq!(port.default_text().unwrap(), "8080");
///
/// let name = ArgValue::<String>::new();
/// assert!(!name.has_default());
/// ```
#[derive(Debug, Clone)]
pub struct ArgValue<T> {
    default: Option<T>,
}

impl<T> Default for ArgValue<T> {
    fn default() -> Self {
        Self { default: None }
    }
}

impl<T: ArgType> ArgValue<T> {
    /// Create a value slot without a default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default, used when the option is absent from the command line.
    /// If repeated, only the final default applies.
    pub fn with_default(mut self, value: T) -> Self {
        self.set_default(value);
        self
    }

    /// Set the default in place.
    pub fn set_default(&mut self, value: T) {
        self.default.replace(value);
    }

    /// Whether a default has been set.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The default as it is shown in the help page.
    pub fn default_text(&self) -> Result<String, ParseError> {
        self.default
            .as_ref()
            .map(T::format_text)
            .ok_or_else(ParseError::not_set)
    }
}

/// Behaviour of a value slot with its type `T` erased.
///
/// We use this at the middle/top of the registry so that options of different types may all live in one collection.
pub(crate) trait AnonymousValue: Send + Sync {
    /// Convert the raw command line text into the slot's type.
    fn parse(&self, text: &str) -> Result<Value, ParseError>;

    /// The default, erased.
    fn default_value(&self) -> Result<Value, ParseError>;

    /// The default as it is shown in the help page.
    fn default_text(&self) -> Result<String, ParseError>;

    fn has_default(&self) -> bool;
}

impl<T: ArgType> AnonymousValue for ArgValue<T> {
    fn parse(&self, text: &str) -> Result<Value, ParseError> {
        T::parse_text(text).map(T::into_value)
    }

    fn default_value(&self) -> Result<Value, ParseError> {
        self.default
            .clone()
            .map(T::into_value)
            .ok_or_else(ParseError::not_set)
    }

    fn default_text(&self) -> Result<String, ParseError> {
        ArgValue::default_text(self)
    }

    fn has_default(&self) -> bool {
        ArgValue::has_default(self)
    }
}
