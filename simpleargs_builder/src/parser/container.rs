use std::collections::BTreeMap;

use crate::api::{ArgType, Value};
use crate::constant::*;
use crate::matcher::KeyForm;
use crate::parser::ParseError;

/// The result of one parse: the resolved option values, queryable by full or short name.
///
/// Always contains `--help` (alias `-h`), holding the rendered help page.
///
/// ### Example
/// ```
/// # use simpleargs_builder as simpleargs;
/// use simpleargs::{parse_args, ArgValue, ArgsInitializer};
///
/// let initializer = ArgsInitializer::new()
///     .value("arg, a", "Arg info", ArgValue::<i32>::new().with_default(34))
///     .unwrap();
/// let args = parse_args(&["program", "-a", "-5"], &initializer).unwrap();
///
/// assert_eq!(args.count(), 2);
/// assert_eq!(args.get::<i32>("-a").unwrap(), -5);
/// assert_eq!(args.get::<i32>("--arg").unwrap(), -5);
/// assert!(args.exists("-h"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArgsContainer {
    values: BTreeMap<String, Value>,
    short_to_full: BTreeMap<String, String>,
    help_requested: bool,
}

impl ArgsContainer {
    pub(crate) fn new(
        values: BTreeMap<String, Value>,
        short_to_full: BTreeMap<String, String>,
        help_requested: bool,
    ) -> Self {
        Self {
            values,
            short_to_full,
            help_requested,
        }
    }

    /// Whether the option has a value (or, for a flag, was present).
    ///
    /// Never fails: malformed or unknown keys are simply absent.
    pub fn exists(&self, key: &str) -> bool {
        match KeyForm::classify(key) {
            KeyForm::Invalid => false,
            KeyForm::Short => self
                .short_to_full
                .get(key)
                .is_some_and(|full| self.values.contains_key(full)),
            KeyForm::Full => self.values.contains_key(key),
        }
    }

    /// Get the value of an option as its declared type `T`.
    ///
    /// Fails if the key does not resolve, the option has no value, or `T` is not the declared type.
    pub fn get<T: ArgType>(&self, key: &str) -> Result<T, ParseError> {
        let full = match KeyForm::classify(key) {
            KeyForm::Invalid => return Err(key_not_set(key)),
            KeyForm::Short => self
                .short_to_full
                .get(key)
                .map(String::as_str)
                .ok_or_else(|| key_not_set(key))?,
            KeyForm::Full => key,
        };

        let value = self.values.get(full).ok_or_else(ParseError::not_set)?;

        T::from_value(value).ok_or_else(|| {
            ParseError::new(format!(
                "Value with key {key} is not of type {}.",
                std::any::type_name::<T>()
            ))
        })
    }

    /// The number of resolved options, including the always present `--help`.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Whether `--help` or `-h` was given on the command line.
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// The rendered help page.
    pub fn help(&self) -> &str {
        match self.values.get(HELP_NAME) {
            Some(Value::Text(help)) => help,
            _ => "",
        }
    }
}

fn key_not_set(key: &str) -> ParseError {
    ParseError::new(format!("Value with key {key} not set."))
}
