/// Declaration-time modifiers for an option.
///
/// ### Example
/// ```
/// # use simpleargs_builder as simpleargs;
/// use simpleargs::ArgOptions;
///
/// assert!(!ArgOptions::default().is_required());
/// assert!(ArgOptions::default().required().is_required());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArgOptions {
    required: bool,
}

impl ArgOptions {
    /// Create the default (optional) modifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the option as required: parsing fails if it is missing from the command line.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether the option must be present on the command line.
    pub fn is_required(&self) -> bool {
        self.required
    }
}
