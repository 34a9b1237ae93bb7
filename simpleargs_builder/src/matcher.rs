use crate::parser::ParseError;

/// How a lookup key is resolved against the declared names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyForm {
    /// Too short to name any option.
    Invalid,
    /// Resolved through the short-to-full alias map.
    Short,
    /// Looked up directly by full name.
    Full,
}

impl KeyForm {
    /// Classify a key: length <= 1 is invalid; length 2, or a second character other than `-`, is short.
    pub(crate) fn classify(key: &str) -> Self {
        let bytes = key.as_bytes();

        if bytes.len() <= 1 {
            KeyForm::Invalid
        } else if bytes.len() == 2 || bytes[1] != b'-' {
            KeyForm::Short
        } else {
            KeyForm::Full
        }
    }
}

/// The `(full, short)` names produced from a declaration spec.
/// The short name is empty when the spec does not declare one.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct OptionNames {
    pub full: String,
    pub short: String,
}

/// Split a declaration spec of the form `"name"` or `"name, short"` into prefixed names.
pub(crate) fn split_option_name(spec: &str) -> Result<OptionNames, ParseError> {
    if spec.is_empty() {
        return Err(ParseError::new("Empty option name."));
    }

    if spec.starts_with('-') {
        return Err(ParseError::new(format!(
            "Incorrect full option name (please remove '-') {spec}."
        )));
    }

    let stripped: String = spec.chars().filter(|c| *c != ' ').collect();

    if stripped.is_empty() {
        return Err(ParseError::new("Empty option name."));
    }

    match stripped.split_once(',') {
        Some((full, short)) => {
            if full.is_empty() {
                return Err(ParseError::new("Empty full option name."));
            }

            if short.is_empty() {
                return Err(ParseError::new("Empty short option name."));
            }

            if short.contains('-') {
                return Err(ParseError::new(format!(
                    "Incorrect short option name (please remove '-') {short}."
                )));
            }

            if short.contains(',') {
                return Err(ParseError::new(format!(
                    "Too many commas in option name {spec}."
                )));
            }

            Ok(OptionNames {
                full: format!("--{full}"),
                short: format!("-{short}"),
            })
        }
        None => Ok(OptionNames {
            full: format!("--{stripped}"),
            short: String::default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", KeyForm::Invalid)]
    #[case("-", KeyForm::Invalid)]
    #[case("a", KeyForm::Invalid)]
    #[case("-a", KeyForm::Short)]
    #[case("--", KeyForm::Short)]
    #[case("-a1", KeyForm::Short)]
    #[case("abc", KeyForm::Short)]
    #[case("--a", KeyForm::Full)]
    #[case("--arg", KeyForm::Full)]
    #[case("x-y", KeyForm::Full)]
    fn classify(#[case] key: &str, #[case] expected: KeyForm) {
        assert_eq!(KeyForm::classify(key), expected);
    }

    #[rstest]
    #[case("arg", "--arg", "")]
    #[case("arg,a", "--arg", "-a")]
    #[case("arg, a", "--arg", "-a")]
    #[case(" arg ,  a1 ", "--arg", "-a1")]
    #[case("my arg", "--myarg", "")]
    #[case("long-name, l", "--long-name", "-l")]
    fn split(#[case] spec: &str, #[case] full: &str, #[case] short: &str) {
        assert_eq!(
            split_option_name(spec).unwrap(),
            OptionNames {
                full: full.to_string(),
                short: short.to_string(),
            }
        );
    }

    #[rstest]
    #[case("", "Empty option name.")]
    #[case("   ", "Empty option name.")]
    #[case(",", "Empty full option name.")]
    #[case(", a", "Empty full option name.")]
    #[case("arg,", "Empty short option name.")]
    #[case("arg, ", "Empty short option name.")]
    #[case(
        "--arg1, a1",
        "Incorrect full option name (please remove '-') --arg1, a1."
    )]
    #[case("-arg1, a1", "Incorrect full option name (please remove '-') -arg1, a1.")]
    #[case("arg1,-a1", "Incorrect short option name (please remove '-') -a1.")]
    #[case("arg1,a-1", "Incorrect short option name (please remove '-') a-1.")]
    #[case("arg1,a,b", "Too many commas in option name arg1,a,b.")]
    fn split_invalid(#[case] spec: &str, #[case] message: &str) {
        let error = split_option_name(spec).unwrap_err();
        assert_eq!(error.to_string(), message);
    }
}
