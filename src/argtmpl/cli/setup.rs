use argtmpl::{RenderConfig, UndefinedMode};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive, e.g. `argtmpl=trace`.
pub const LOG_ENV: &str = "ARGTMPL_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,argtmpl=debug";

#[derive(Parser, Debug)]
#[command(name = "argtmpl", bin_name = "argtmpl", version)]
#[command(about = "Render a template file from key=value arguments", long_about = None)]
pub struct Cli {
    /// Template filepath
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Argument formed foo=bar (a bare foo means foo=true)
    #[arg(short, long = "arg", value_name = "VALUE")]
    pub args: Vec<String>,

    /// Print the parsed arguments to stderr before rendering
    #[arg(short, long)]
    pub verbose: bool,

    /// How references to arguments that were not given are handled
    #[arg(short, long, value_enum, default_value_t = UndefinedMode::Lenient)]
    pub undefined: UndefinedMode,

    /// Drop the template's final newline from the output
    #[arg(long)]
    pub strip_trailing_newline: bool,
}

impl Cli {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_undefined(self.undefined)
            .with_trailing_newline(!self.strip_trailing_newline)
    }
}

/// Parses process arguments, exiting on `--help`/`--version` (status 0) or on a
/// malformed invocation (status 1).
pub fn parse_or_exit() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    }
}

/// Installs the stderr log subscriber. `ARGTMPL_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
