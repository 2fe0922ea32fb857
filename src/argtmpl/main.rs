mod cli;

fn main() {
    let cli = cli::setup::parse_or_exit();
    cli::setup::init_logging(cli.verbose);

    if let Err(e) = cli::commands::run(cli) {
        cli::print::print_error(&e);
        std::process::exit(1);
    }
}
