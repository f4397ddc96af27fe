use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use zenith::core::CurrencyCode;
use zenith::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

// `--live` and `--static` are mutually exclusive; neither defers to the config.
#[derive(Args, Debug, Clone, Copy)]
struct RateMode {
    /// Apply simulated market movement to the rates
    #[arg(short, long, conflicts_with = "static_rates")]
    live: bool,
    /// Use the fixed rate table even if the config enables live rates
    #[arg(long = "static")]
    static_rates: bool,
}

impl RateMode {
    fn live(self) -> Option<bool> {
        match (self.live, self.static_rates) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

impl From<Commands> for zenith::AppCommand {
    fn from(cmd: Commands) -> zenith::AppCommand {
        match cmd {
            Commands::Rates { mode } => zenith::AppCommand::Rates { live: mode.live() },
            Commands::Convert {
                amount,
                from,
                to,
                mode,
                swap,
                save,
            } => zenith::AppCommand::Convert {
                amount,
                from,
                to,
                live: mode.live(),
                swap,
                save,
            },
            Commands::Trend {
                from,
                to,
                mode,
                swap,
            } => zenith::AppCommand::Trend {
                from,
                to,
                live: mode.live(),
                swap,
            },
            Commands::History { clear } => zenith::AppCommand::History { clear },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the current exchange rate table
    Rates {
        #[command(flatten)]
        mode: RateMode,
    },
    /// Convert an amount and show the 7-day trend
    Convert {
        /// Amount in the source currency
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Source currency, e.g. USD
        from: Option<CurrencyCode>,
        /// Target currency, e.g. EUR
        to: Option<CurrencyCode>,
        #[command(flatten)]
        mode: RateMode,
        /// Convert in the opposite direction
        #[arg(long)]
        swap: bool,
        /// Save the conversion to history
        #[arg(short, long)]
        save: bool,
    },
    /// Display the 7-day trend for a currency pair
    Trend {
        from: Option<CurrencyCode>,
        to: Option<CurrencyCode>,
        #[command(flatten)]
        mode: RateMode,
        /// Show the trend for the opposite direction
        #[arg(long)]
        swap: bool,
    },
    /// Display saved conversions
    History {
        /// Remove all saved conversions
        #[arg(long)]
        clear: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => zenith::cli::setup::setup(),
        Some(cmd) => zenith::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
