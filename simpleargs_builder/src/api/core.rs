use std::collections::BTreeMap;
use terminal_size::{terminal_size, Width};

use crate::api::info::ArgInfo;
use crate::api::value::{AnonymousValue, ArgType, ArgValue};
use crate::constant::*;
use crate::matcher::{split_option_name, KeyForm, OptionNames};
use crate::model::ArgOptions;
use crate::parser::{parse_args, printer, ArgsContainer, InitializationError, ParseError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the terminal width, to ensure the help page doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

/// The declaration registry: the set of options a program accepts.
///
/// Options are declared by chaining [`ArgsInitializer::flag`] and [`ArgsInitializer::value`] (or their `_with` variants).
/// Each declaration is validated immediately.
///
/// ### Example
/// ```
/// # use simpleargs_builder as simpleargs;
/// use simpleargs::{ArgOptions, ArgValue, ArgsInitializer, ParseError};
///
/// # fn main() -> Result<(), ParseError> {
/// let initializer = ArgsInitializer::new()
///     .flag("verbose, v", "Talk more.")?
///     .value("port, p", "Port to listen on.", ArgValue::<u16>::new().with_default(8080))?
///     .value_with("name", "Server name.", ArgValue::<String>::new(), ArgOptions::new().required())?;
///
/// let args = initializer.parse(&["program", "-v", "--name", "alpha"])?;
///
/// assert!(args.exists("--verbose"));
/// assert_eq!(args.get::<u16>("-p")?, 8080);
/// assert_eq!(args.get::<String>("--name")?, "alpha");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ArgsInitializer {
    infos: BTreeMap<String, ArgInfo>,
    short_to_full: BTreeMap<String, String>,
    description: String,
    desc_width: usize,
    info_width: usize,
}

impl Default for ArgsInitializer {
    fn default() -> Self {
        Self {
            infos: BTreeMap::default(),
            short_to_full: BTreeMap::default(),
            description: String::default(),
            desc_width: DEFAULT_DESC_WIDTH,
            info_width: DEFAULT_INFO_WIDTH,
        }
    }
}

impl ArgsInitializer {
    /// Create an empty registry with no description and the default help layout (`40`/`40` columns).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with a description and an explicit help layout.
    ///
    /// `desc_width` is the column at which help text starts; `info_width` is the width the help text wraps at.
    /// Both must be positive.
    ///
    /// ### Example
    /// ```
    /// # use simpleargs_builder as simpleargs;
    /// use simpleargs::ArgsInitializer;
    ///
    /// assert!(ArgsInitializer::with_layout("My program.", 15, 20).is_ok());
    /// assert!(ArgsInitializer::with_layout("", 0, 20).is_err());
    /// ```
    pub fn with_layout(
        description: impl Into<String>,
        desc_width: usize,
        info_width: usize,
    ) -> Result<Self, InitializationError> {
        if desc_width == 0 {
            return Err(InitializationError(
                "Max string size for argument description must be > 0.".to_string(),
            ));
        }

        if info_width == 0 {
            return Err(InitializationError(
                "Max string size for argument info must be > 0.".to_string(),
            ));
        }

        Ok(Self {
            description: description.into(),
            desc_width,
            info_width,
            ..Self::default()
        })
    }

    /// Document the description shown under the usage line of the help page.
    /// If repeated, only the final description will apply.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Fit the help text width to the attached terminal.
    ///
    /// When no terminal is attached, or it is too narrow to hold a reasonable help column, the layout is unchanged.
    pub fn fit_terminal(self) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        self.fit_width(terminal_width)
    }

    fn fit_width(mut self, terminal_width: Option<usize>) -> Self {
        if let Some(tw) = terminal_width {
            let target_total_width = (tw as f64 * TARGET_TOTAL_FACTOR) as usize;

            if target_total_width >= self.desc_width + MINIMUM_INFO_WIDTH {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Terminal {tw} fits the help column.  Selecting info width: {}.",
                        target_total_width - self.desc_width
                    );
                }

                self.info_width = target_total_width - self.desc_width;
            } else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Terminal {tw} is too narrow.  Keeping info width: {}.", self.info_width);
                }
            }
        }

        self
    }

    /// Declare a valueless option (a flag), present or absent on the command line.
    ///
    /// `name` is `"name"` or `"name, short"`, without any `-` prefixes.
    pub fn flag(self, name: &str, help: impl Into<String>) -> Result<Self, ParseError> {
        self.add(name, help.into(), None, ArgOptions::default())
    }

    /// Declare a valueless option with modifiers.
    pub fn flag_with(
        self,
        name: &str,
        help: impl Into<String>,
        options: ArgOptions,
    ) -> Result<Self, ParseError> {
        self.add(name, help.into(), None, options)
    }

    /// Declare an option which takes a value of type `T` from the token following it.
    ///
    /// `name` is `"name"` or `"name, short"`, without any `-` prefixes.
    pub fn value<T: ArgType>(
        self,
        name: &str,
        help: impl Into<String>,
        value: ArgValue<T>,
    ) -> Result<Self, ParseError> {
        self.add(name, help.into(), Some(Box::new(value)), ArgOptions::default())
    }

    /// Declare an option which takes a value, with modifiers.
    pub fn value_with<T: ArgType>(
        self,
        name: &str,
        help: impl Into<String>,
        value: ArgValue<T>,
        options: ArgOptions,
    ) -> Result<Self, ParseError> {
        self.add(name, help.into(), Some(Box::new(value)), options)
    }

    fn add(
        mut self,
        name: &str,
        help: String,
        value: Option<Box<dyn AnonymousValue>>,
        options: ArgOptions,
    ) -> Result<Self, ParseError> {
        let OptionNames { full, short } = split_option_name(name)?;

        if full == HELP_NAME || short == HELP_SHORT {
            return Err(ParseError::new(format!(
                "{HELP_NAME}, {HELP_SHORT} reserved args."
            )));
        }

        if self.infos.contains_key(&full) {
            return Err(ParseError::new(format!(
                "Duplicate full option name {full}."
            )));
        }

        if !short.is_empty() {
            if self.short_to_full.contains_key(&short) {
                return Err(ParseError::new(format!(
                    "Duplicate short option name {short}."
                )));
            }

            self.short_to_full.insert(short.clone(), full.clone());
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Declared option {full} (short: '{short}', value: {}, required: {}).",
                value.is_some(),
                options.is_required()
            );
        }

        self.infos.insert(
            full.clone(),
            ArgInfo::new(full, help, short, options, value),
        );
        Ok(self)
    }

    /// Resolve a command line token (`-s` or `--full`) to its declared option.
    ///
    /// ### Example
    /// ```
    /// # use simpleargs_builder as simpleargs;
    /// use simpleargs::ArgsInitializer;
    ///
    /// let initializer = ArgsInitializer::new().flag("arg, a", "Arg info").unwrap();
    ///
    /// assert_eq!(initializer.lookup("-a").unwrap().full_name(), "--arg");
    /// assert_eq!(initializer.lookup("--arg").unwrap().short_name(), "-a");
    /// assert!(initializer.lookup("--ar").is_err());
    /// ```
    pub fn lookup(&self, token: &str) -> Result<&ArgInfo, ParseError> {
        if token.is_empty() {
            return Err(ParseError::new("Unknown empty param."));
        }

        let full = match KeyForm::classify(token) {
            KeyForm::Full => token,
            KeyForm::Short | KeyForm::Invalid => self
                .short_to_full
                .get(token)
                .map(String::as_str)
                .ok_or_else(|| unknown_param(token))?,
        };

        self.infos.get(full).ok_or_else(|| unknown_param(full))
    }

    /// The declared options, in full name order.
    pub fn infos(&self) -> impl Iterator<Item = &ArgInfo> {
        self.infos.values()
    }

    /// The description shown under the usage line of the help page.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The column at which help text starts.
    pub fn desc_width(&self) -> usize {
        self.desc_width
    }

    /// The width the help text wraps at.
    pub fn info_width(&self) -> usize {
        self.info_width
    }

    /// Render the help page for this registry.
    pub fn help(&self, program: &str) -> String {
        printer::render_help(program, self)
    }

    /// Parse the argument vector (`args[0]` is the program name) against this registry.
    /// See [`parse_args`].
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<ArgsContainer, ParseError> {
        parse_args(args, self)
    }
}

fn unknown_param(token: &str) -> ParseError {
    ParseError::new(format!("Unknown param: {token}."))
}
