use argtmpl::{ArgtmplError, Arguments};
use console::{style, Style, Term};

const SEPARATOR: &str = "==========";

/// Formats the argument dump: one `key: value` line per argument, then a separator.
pub fn format_arguments(arguments: &Arguments, use_color: bool) -> String {
    let key_style = Style::new().cyan().force_styling(use_color);

    let mut output = String::new();
    for (key, value) in arguments.iter() {
        output.push_str(&format!("{}: {}\n", key_style.apply_to(key), value));
    }
    output.push_str(SEPARATOR);
    output.push('\n');
    output
}

/// Writes the argument dump to stderr, keeping stdout for the rendered document.
pub fn print_arguments(arguments: &Arguments) {
    let use_color = Term::stderr().features().colors_supported();
    eprint!("{}", format_arguments(arguments, use_color));
}

pub fn print_error(err: &ArgtmplError) {
    eprintln!("{} {}", style("error:").red().bold().for_stderr(), err);
}
