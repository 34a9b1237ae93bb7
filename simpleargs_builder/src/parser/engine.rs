use std::collections::BTreeMap;
use std::env;
use std::ffi::OsString;

use crate::api::{ArgsInitializer, Value};
use crate::constant::*;
use crate::parser::printer::render_help;
use crate::parser::{ArgsContainer, ParseError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Parse an argument vector against the declared options.
///
/// `args[0]` is the program name (used in the help page); the remaining tokens are consumed left to right:
/// * A flag token (`--name` or `-n`) records the flag as present.
/// * A value token consumes the immediately following token as its value, whatever that token looks like.
/// * `--help`/`-h` record that help was requested (see [`ArgsContainer::help_requested`]).
///
/// Afterwards, any declared option which was not given resolves to its default (if it has one).
/// A missing required option fails the parse.
///
/// When an option is repeated, the first occurrence wins.
///
/// ### Example
/// ```
/// # use simpleargs_builder as simpleargs;
/// use simpleargs::{parse_args, ArgOptions, ArgValue, ArgsInitializer};
///
/// let initializer = ArgsInitializer::new()
///     .value_with("arg, a", "Help info", ArgValue::<i32>::new(), ArgOptions::new().required())
///     .unwrap();
///
/// let error = parse_args(&["program"], &initializer).unwrap_err();
/// assert_eq!(error.to_string(), "Please set required param --arg.");
///
/// let error = parse_args(&["program", "--arg"], &initializer).unwrap_err();
/// assert_eq!(error.to_string(), "Please set param value: --arg.");
/// ```
pub fn parse_args<S: AsRef<str>>(
    args: &[S],
    initializer: &ArgsInitializer,
) -> Result<ArgsContainer, ParseError> {
    let (program, tokens) = args
        .split_first()
        .ok_or_else(|| ParseError::new("Incorrect value of argc param."))?;
    let mut values: BTreeMap<String, Value> = BTreeMap::default();
    let mut short_to_full: BTreeMap<String, String> = BTreeMap::default();
    let mut help_requested = false;

    values.insert(
        HELP_NAME.to_string(),
        Value::Text(render_help(S::as_ref(program), initializer)),
    );
    short_to_full.insert(HELP_SHORT.to_string(), HELP_NAME.to_string());

    // 1. Consume the tokens, pairing each value option with the token after it.
    let mut token_iter = tokens.iter().map(S::as_ref);

    while let Some(token) = token_iter.next() {
        if token == HELP_NAME || token == HELP_SHORT {
            help_requested = true;
            continue;
        }

        let info = initializer.lookup(token)?;
        let full = info.full_name();

        if !info.short_name().is_empty() {
            short_to_full
                .entry(info.short_name().to_string())
                .or_insert_with(|| full.to_string());
        }

        let value = if info.has_value() {
            let raw = token_iter
                .next()
                .ok_or_else(|| ParseError::new(format!("Please set param value: {token}.")))?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched {token} to {full} with value '{raw}'.");
            }

            info.value()?.parse(raw)?
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched {token} to flag {full}.");
            }

            Value::Flag
        };

        values.entry(full.to_string()).or_insert(value);
    }

    // 2. Check the required options, and fill in the defaults for the rest.
    for info in initializer.infos() {
        let full = info.full_name();

        if values.contains_key(full) {
            continue;
        }

        if info.options().is_required() {
            return Err(ParseError::new(format!(
                "Please set required param {full}."
            )));
        }

        if !info.has_default() {
            continue;
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Defaulting {full}.");
        }

        if !info.short_name().is_empty() {
            short_to_full.insert(info.short_name().to_string(), full.to_string());
        }

        values.insert(full.to_string(), info.value()?.default_value()?);
    }

    Ok(ArgsContainer::new(values, short_to_full, help_requested))
}

/// Parse the process arguments ([`env::args_os`]) against the declared options.
/// See [`parse_args`].
///
/// Fails if any argument is not valid unicode.
pub fn parse_env_args(initializer: &ArgsInitializer) -> Result<ArgsContainer, ParseError> {
    parse_args(&unicode_args(env::args_os())?, initializer)
}

pub(crate) fn unicode_args(
    args: impl IntoIterator<Item = OsString>,
) -> Result<Vec<String>, ParseError> {
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|_| ParseError::new("Incorrect value of argv param."))
        })
        .collect()
}
