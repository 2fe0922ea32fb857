use super::print::print_arguments;
use super::setup::Cli;
use argtmpl::{parse_args, write_output, Result, TemplateDocument};
use std::io;

/// Parses the arguments, optionally dumps them, renders the template and writes
/// it to stdout. Nothing reaches stdout unless rendering succeeded.
pub fn run(cli: Cli) -> Result<()> {
    let arguments = parse_args(&cli.args)?;
    if cli.verbose {
        print_arguments(&arguments);
    }

    let document = TemplateDocument::load(&cli.template, &cli.render_config())?;
    let rendered = document.render(&arguments)?;

    write_output(io::stdout().lock(), &rendered)
}
