use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use quickadd::cli::args::{Cli, Commands};
use quickadd::cli::commands;
use quickadd::config::{ColorSetting, Config, Paths};
use quickadd::error::QuickAddError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "quickadd=debug" } else { "quickadd=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr so stdout stays clean for JSON output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), QuickAddError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Paths::new()?.config_file,
    };
    let config = Config::load_from_path(&config_path)?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {},
    }

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match &cli.command {
        Commands::Parse(args) => commands::parse(args, &config, format)?,
        Commands::Config(args) => commands::config(&args.command, &config, &config_path)?,
        Commands::Completions { shell } => commands::completions(*shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
