use clap::{ArgAction, Args, Parser, Subcommand};
use qsize::commands::config_cmd::ConfigOptions;
use qsize::commands::format_cmd::FormatOptions;
use qsize::commands::{execute_config, execute_format};
use qsize::error::AppError;
use qsize::format::OverflowPolicy;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    qsize::logging::init(cli.verbose);

    match cli.command {
        Commands::Format(args) => {
            let options =
                FormatOptions { values: args.values, json: args.json, overflow: args.overflow };
            execute_format(options)?;
        }
        Commands::Config(args) => {
            let options =
                ConfigOptions { show_path: args.path, edit: args.edit, overflow: args.overflow };
            execute_config(options)?;
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(name = "qsize", version, about = "Render byte counts as human-readable sizes.")]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format byte counts (reads stdin when no values are given).
    Format(FormatArgs),
    /// Manage qsize configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct FormatArgs {
    /// Emit input/output pairs as JSON.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Override the configured handling of values past petabytes (clamp, blank).
    #[arg(long = "overflow", value_name = "POLICY")]
    overflow: Option<OverflowPolicy>,

    /// Byte counts to format.
    #[arg(value_name = "BYTES", num_args = 0.., allow_hyphen_values = true)]
    values: Vec<String>,
}

#[derive(Args)]
struct ConfigArgs {
    /// Show the configuration file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,

    /// Open the configuration file in $EDITOR.
    #[arg(long = "edit", action = ArgAction::SetTrue)]
    edit: bool,

    /// Persist the handling of values past petabytes (clamp, blank).
    #[arg(long = "overflow", value_name = "POLICY")]
    overflow: Option<OverflowPolicy>,
}
