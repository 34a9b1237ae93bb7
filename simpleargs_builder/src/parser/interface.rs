use crate::api::ArgsInitializer;
use crate::constant::*;
use crate::parser::engine::unicode_args;
use crate::parser::{parse_args, ArgsContainer, ParseError};

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        // The help page carries its own trailing newline.
        print!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }
}

/// Parse and present the outcome: `Ok` to continue the program, `Err(exit_code)` to stop it.
///
/// A help token wins over any parse error, so `program -h` works even when required options are missing.
pub(crate) fn run<S: AsRef<str>>(
    args: &[S],
    initializer: &ArgsInitializer,
    user_interface: &(impl UserInterface + ?Sized),
) -> Result<ArgsContainer, i32> {
    match parse_args(args, initializer) {
        Ok(container) if container.help_requested() => {
            user_interface.print(container.help().to_string());
            Err(0)
        }
        Ok(container) => Ok(container),
        Err(error) => match args.split_first() {
            Some((program, tokens))
                if tokens
                    .iter()
                    .map(S::as_ref)
                    .any(|token| token == HELP_NAME || token == HELP_SHORT) =>
            {
                user_interface.print(initializer.help(S::as_ref(program)));
                Err(0)
            }
            _ => {
                user_interface.print_error(error);
                Err(1)
            }
        },
    }
}

/// Parse the process arguments, handling help and errors on the console.
///
/// If `--help`/`-h` is given, prints the help page and exits with code `0`.
/// If parsing fails, prints the error and exits with code `1` (via [`std::process::exit`]).
pub fn parse_env_or_exit(initializer: &ArgsInitializer) -> ArgsContainer {
    let user_interface = ConsoleInterface::default();
    let result = unicode_args(std::env::args_os()).map_err(|error| {
        user_interface.print_error(error);
        1
    });

    match result.and_then(|args| run(&args, initializer, &user_interface)) {
        Ok(container) => container,
        Err(exit_code) => std::process::exit(exit_code),
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::interface::UserInterface;
    use crate::parser::ParseError;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        message: RefCell<Option<Vec<String>>>,
        error: RefCell<Option<String>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            self.message
                .borrow_mut()
                .get_or_insert_with(Vec::default)
                .push(message);
        }

        fn print_error(&self, error: ParseError) {
            // Assumes print_error() is only ever called once.
            self.error.borrow_mut().replace(error.to_string());
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<String>) {
            let InMemoryInterface { message, error } = self;
            (message.take().map(|messages| messages.concat()), error.take())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::util::InMemoryInterface;
    use super::*;
    use crate::api::ArgValue;
    use crate::model::ArgOptions;
    use rstest::rstest;

    fn initializer() -> ArgsInitializer {
        ArgsInitializer::with_layout("Demo.", 10, 20)
            .unwrap()
            .value_with(
                "name, n",
                "Who to greet.",
                ArgValue::<String>::new(),
                ArgOptions::new().required(),
            )
            .unwrap()
    }

    const HELP: &str = "Usage: program [options]\nDemo.\nAvailable options:\n  --name,-n arg\n          Who to greet.\n";

    #[test]
    fn run_ok() {
        let interface = InMemoryInterface::default();
        let container = run(&["program", "-n", "x"], &initializer(), &interface).unwrap();
        assert_eq!(container.get::<String>("--name").unwrap(), "x");
        assert_eq!(interface.consume(), (None, None));
    }

    #[rstest]
    #[case(vec!["program", "-h"])]
    #[case(vec!["program", "--help"])]
    #[case(vec!["program", "-n", "x", "--help"])]
    #[case(vec!["program", "--unknown", "-h"])]
    fn run_help(#[case] tokens: Vec<&str>) {
        let interface = InMemoryInterface::default();
        assert_eq!(run(&tokens, &initializer(), &interface), Err(0));
        assert_eq!(interface.consume(), (Some(HELP.to_string()), None));
    }

    #[rstest]
    #[case(vec!["program"], "Please set required param --name.")]
    #[case(vec!["program", "--unknown"], "Unknown param: --unknown.")]
    #[case(vec!["program", "-n"], "Please set param value: -n.")]
    fn run_error(#[case] tokens: Vec<&str>, #[case] message: &str) {
        let interface = InMemoryInterface::default();
        assert_eq!(run(&tokens, &initializer(), &interface), Err(1));
        assert_eq!(interface.consume(), (None, Some(message.to_string())));
    }

    #[test]
    fn run_empty() {
        let interface = InMemoryInterface::default();
        let tokens: &[&str] = &[];
        assert_eq!(run(tokens, &initializer(), &interface), Err(1));
        assert_eq!(
            interface.consume(),
            (None, Some("Incorrect value of argc param.".to_string()))
        );
    }
}
