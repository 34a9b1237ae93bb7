use std::fmt::Write;

use crate::api::{ArgInfo, ArgsInitializer};

const MAIN_INDENT: usize = 2;

/// Render the help page.
///
/// The left column (names, ` arg`, default) is padded to `desc_width`, or put on its own line when it does not fit.
/// The help text is wrapped at spaces to `info_width`, continuation lines padded to `desc_width`.
pub(crate) fn render_help(program: &str, initializer: &ArgsInitializer) -> String {
    let mut out = String::default();
    out.push_str(&format!("Usage: {program} [options]\n"));

    if !initializer.description().is_empty() {
        out.push_str(initializer.description());
        out.push('\n');
    }

    out.push_str("Available options:\n");

    for info in initializer.infos() {
        render_option(&mut out, info, initializer.desc_width(), initializer.info_width());
    }

    out
}

fn left_column(info: &ArgInfo) -> String {
    let mut column = format!("{:MAIN_INDENT$}{}", "", info.full_name());

    if !info.short_name().is_empty() {
        column.push(',');
        column.push_str(info.short_name());
    }

    if let Ok(value) = info.value() {
        column.push_str(" arg");

        if let Ok(default) = value.default_text() {
            // Infallible: writing to a String.
            let _ = write!(column, "(={default})");
        }
    }

    column
}

fn render_option(out: &mut String, info: &ArgInfo, desc_width: usize, info_width: usize) {
    let left = left_column(info);
    let padding = format!("{:desc_width$}", "");
    let help = info.help();

    if left.len() + 1 > desc_width {
        out.push_str(&left);
        out.push('\n');

        if help.is_empty() {
            return;
        }

        out.push_str(&padding);
    } else {
        out.push_str(&format!("{left:desc_width$}"));

        if help.is_empty() {
            out.push('\n');
            return;
        }
    }

    // Byte offsets: every slice boundary sits at 0, the end, or next to an ASCII space.
    let mut previous_local = 0;
    let mut start = 0;
    let mut position = find_space(help, start + 1);

    while let Some(p) = position {
        if p > start + info_width {
            if start != 0 {
                out.push_str(&padding);
            }

            if previous_local == 0 {
                // A lone word longer than the width; emit it whole.
                push_line(out, &help[start..p]);
                start = p + 1;
                position = find_space(help, start);
            } else {
                push_line(out, &help[start..start + previous_local]);
                start += previous_local + 1;
                previous_local = 0;
            }
        } else {
            previous_local = p - start;
            position = find_space(help, p + 1);
        }
    }

    if help.len() > start {
        if start != 0 {
            out.push_str(&padding);
        }

        if help.len() > info_width + start && previous_local != 0 {
            push_line(out, &help[start..start + previous_local]);
            start += previous_local + 1;

            if help.len() > start {
                out.push_str(&padding);
                push_line(out, &help[start..]);
            }
        } else {
            push_line(out, &help[start..]);
        }
    }
}

fn find_space(text: &str, from: usize) -> Option<usize> {
    text.as_bytes()
        .get(from..)?
        .iter()
        .position(|b| *b == b' ')
        .map(|offset| offset + from)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ArgValue;
    use crate::model::ArgOptions;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[test]
    fn render_help_empty() {
        let initializer = ArgsInitializer::new();
        assert_eq!(
            render_help("program", &initializer),
            "Usage: program [options]\nAvailable options:\n"
        );
    }

    #[test]
    fn render_help_description() {
        let initializer = ArgsInitializer::new().describe("Program desc.");
        assert_eq!(
            render_help("program", &initializer),
            "Usage: program [options]\nProgram desc.\nAvailable options:\n"
        );
    }

    #[test]
    fn render_help_wrapped() {
        let initializer = ArgsInitializer::with_layout("Program desc.", 15, 20)
            .unwrap()
            .value(
                "arg1, a1",
                "3aaa 4bbbb 9ccccccccc 20dddddddddddddddddddd 6vvvvvv",
                ArgValue::<i32>::new().with_default(34),
            )
            .unwrap()
            .flag("arg2", "Arg info2")
            .unwrap()
            .value_with(
                "a3",
                "20dddddddddddddddddddd 9ccccccccc 6vvvvvv 3aaa 4bbbb",
                ArgValue::<String>::new(),
                ArgOptions::new().required(),
            )
            .unwrap()
            .value("arg4, a4", "Arg info4", ArgValue::<f64>::new())
            .unwrap();

        assert_eq!(
            render_help("program", &initializer),
            r#"Usage: program [options]
Program desc.
Available options:
  --a3 arg     20dddddddddddddddddddd
               9ccccccccc 6vvvvvv
               3aaa 4bbbb
  --arg1,-a1 arg(=34)
               3aaa 4bbbb
               9ccccccccc
               20dddddddddddddddddddd
               6vvvvvv
  --arg2       Arg info2
  --arg4,-a4 arg
               Arg info4
"#
        );
    }

    #[test]
    fn render_help_default_layout() {
        let initializer = ArgsInitializer::new()
            .value(
                "output, o",
                "Where to write the result.",
                ArgValue::<String>::new().with_default("out.txt".to_string()),
            )
            .unwrap()
            .flag("verbose, v", "Talk more.")
            .unwrap();

        assert_eq!(
            render_help("tool", &initializer),
            format!(
                "Usage: tool [options]\nAvailable options:\n{:40}Where to write the result.\n{:40}Talk more.\n",
                "  --output,-o arg(=out.txt)", "  --verbose,-v"
            )
        );
    }

    #[test]
    fn render_help_empty_help() {
        let initializer = ArgsInitializer::with_layout("", 10, 10)
            .unwrap()
            .flag("a", "")
            .unwrap()
            .flag("b", "B")
            .unwrap();

        assert_eq!(
            render_help("p", &initializer),
            "Usage: p [options]\nAvailable options:\n  --a     \n  --b     B\n"
        );
    }

    #[test]
    fn render_help_empty_help_wide_left() {
        let initializer = ArgsInitializer::with_layout("", 6, 10)
            .unwrap()
            .flag("longname", "")
            .unwrap()
            .value("b", "B", ArgValue::<u8>::new())
            .unwrap();

        assert_eq!(
            render_help("p", &initializer),
            "Usage: p [options]\nAvailable options:\n  --b arg\n      B\n  --longname\n"
        );
    }

    #[rstest]
    #[case("one two three four", 8, "one two\n|three\n|four\n")]
    #[case("one two three four", 9, "one two\n|three\n|four\n")]
    #[case("one two three four", 13, "one two three\n|four\n")]
    #[case("one two three four", 40, "one two three four\n")]
    #[case("abcdefghij klm", 4, "abcdefghij\n|klm\n")]
    #[case("word", 1, "word\n")]
    fn wrap(#[case] help: &str, #[case] info_width: usize, #[case] expected: &str) {
        let initializer = ArgsInitializer::with_layout("", 6, info_width)
            .unwrap()
            .flag("x", help)
            .unwrap();

        let rendered = render_help("p", &initializer);
        let body = rendered
            .strip_prefix("Usage: p [options]\nAvailable options:\n  --x ")
            .unwrap();
        assert_eq!(body.replace("      ", "|"), expected);
    }

    #[test]
    fn render_help_multibyte() {
        let initializer = ArgsInitializer::with_layout("", 10, 5)
            .unwrap()
            .flag("größe", "ünïcödé wörds hére")
            .unwrap();

        let rendered = render_help("p", &initializer);
        assert_contains!(rendered, "ünïcödé");
        assert_contains!(rendered, "wörds");
        assert_contains!(rendered, "hére");
    }

    #[test]
    fn find_space_bounds() {
        assert_eq!(find_space("a b", 0), Some(1));
        assert_eq!(find_space("a b", 2), None);
        assert_eq!(find_space("a b", 3), None);
        assert_eq!(find_space("a b", 9), None);
        assert_eq!(find_space("", 1), None);
    }
}
