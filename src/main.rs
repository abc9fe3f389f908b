use clap::{Args, CommandFactory, Parser, Subcommand};
use curry::cli::{convert::ConvertOptions, setup::setup, ui};
use curry::core::log::init_logging;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Disable colours
    #[arg(short = 'C', long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
}

#[derive(Args)]
struct ConvertArgs {
    /// Amount to convert
    #[arg(allow_negative_numbers = true)]
    value: Option<String>,

    /// From this currency [default: configured currency, GBP]
    #[arg(short, long, value_name = "CODE")]
    from: Option<String>,

    /// To this currency [default: configured currency, GBP]
    #[arg(short, long, value_name = "CODE")]
    to: Option<String>,

    /// Show only the value
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print raw json
    Raw,
    /// List available currencies
    List,
    /// Clear the cache
    #[command(alias = "clean")]
    Clear,
    /// Store the rate provider access key
    Setup {
        /// Access key issued by the rate provider
        access_key: String,
    },
}

impl From<Commands> for curry::AppCommand {
    fn from(cmd: Commands) -> curry::AppCommand {
        match cmd {
            Commands::Raw => curry::AppCommand::Raw,
            Commands::List => curry::AppCommand::List,
            Commands::Clear => curry::AppCommand::Clear,
            Commands::Setup { .. } => unreachable!("Setup command should be handled separately"),
        }
    }
}

impl ConvertArgs {
    fn into_command(self) -> Option<curry::AppCommand> {
        let ConvertArgs {
            value,
            from,
            to,
            quiet,
        } = self;
        value.map(|amount| {
            curry::AppCommand::Convert(ConvertOptions {
                amount,
                from,
                to,
                quiet,
            })
        })
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Setup { access_key }) => {
            let config = curry::load_config(cli.config_path.as_deref())?;
            setup(&access_key, &config)
        }
        Some(cmd) => curry::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => match cli.convert.into_command() {
            Some(cmd) => curry::run_command(cmd, cli.config_path.as_deref()).await,
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        ui::disable_colors();
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Application failed");
            eprintln!("{}", ui::style_text(&format!("{e:#}"), ui::StyleType::Error));
            ExitCode::FAILURE
        }
    }
}
