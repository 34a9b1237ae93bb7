use crate::api::value::AnonymousValue;
use crate::model::ArgOptions;
use crate::parser::ParseError;

/// A declared option: its names, help text, modifiers and (optional) value slot.
///
/// Created by [`ArgsInitializer`](crate::ArgsInitializer) at declaration time and immutable thereafter.
pub struct ArgInfo {
    full_name: String,
    help: String,
    short_name: String,
    options: ArgOptions,
    value: Option<Box<dyn AnonymousValue>>,
}

impl std::fmt::Debug for ArgInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgInfo")
            .field("full_name", &self.full_name)
            .field("short_name", &self.short_name)
            .field("options", &self.options)
            .field("has_value", &self.has_value())
            .finish()
    }
}

impl ArgInfo {
    pub(crate) fn new(
        full_name: String,
        help: String,
        short_name: String,
        options: ArgOptions,
        value: Option<Box<dyn AnonymousValue>>,
    ) -> Self {
        Self {
            full_name,
            help,
            short_name,
            options,
            value,
        }
    }

    /// The full name, including the `--` prefix.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The short name, including the `-` prefix, or `""` when none was declared.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// The help text shown in the help page.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// The declaration-time modifiers.
    pub fn options(&self) -> &ArgOptions {
        &self.options
    }

    /// Whether the option consumes a value token.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the option has a value slot with a default.
    pub fn has_default(&self) -> bool {
        self.value.as_ref().is_some_and(|value| value.has_default())
    }

    pub(crate) fn value(&self) -> Result<&dyn AnonymousValue, ParseError> {
        self.value
            .as_deref()
            .ok_or_else(|| ParseError::new("Can't get empty param value."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ArgValue;

    #[test]
    fn flag_info() {
        let info = ArgInfo::new(
            "--verbose".to_string(),
            "Talk more.".to_string(),
            "-v".to_string(),
            ArgOptions::default(),
            None,
        );
        assert_eq!(info.full_name(), "--verbose");
        assert_eq!(info.short_name(), "-v");
        assert_eq!(info.help(), "Talk more.");
        assert!(!info.options().is_required());
        assert!(!info.has_value());
        assert!(!info.has_default());
        assert_matches!(info.value().map(|_| ()), Err(ParseError(m)) if m == "Can't get empty param value.");
    }

    #[test]
    fn value_info() {
        let info = ArgInfo::new(
            "--port".to_string(),
            "".to_string(),
            "".to_string(),
            ArgOptions::default().required(),
            Some(Box::new(ArgValue::<u16>::new().with_default(80))),
        );
        assert!(info.options().is_required());
        assert!(info.has_value());
        assert!(info.has_default());
        assert_eq!(info.value().unwrap().default_text().unwrap(), "80");
    }
}
