pub(crate) const HELP_NAME: &str = "--help";
pub(crate) const HELP_SHORT: &str = "-h";

pub(crate) const DEFAULT_DESC_WIDTH: usize = 40;
pub(crate) const DEFAULT_INFO_WIDTH: usize = 40;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_INFO_WIDTH: usize = 17;
