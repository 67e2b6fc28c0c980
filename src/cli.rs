use std::path::PathBuf;

mod list;
mod table;
mod terminal;
mod validate;

use anyhow::Context;
use asil::{Config, Level};
use clap::ArgAction;
use list::List;
use table::Table;
use tracing::instrument;
use validate::Validate;

/// Parse an ASIL level from a command-line token.
///
/// This is the CLI boundary: the token is trimmed and case-normalized before
/// matching.
fn parse_level(s: &str) -> Result<Level, String> {
    asil::normalize(s).map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Allow coloured pass/fail markers
    #[arg(long, global = true, overrides_with = "no_color")]
    color: bool,

    /// Never colour pass/fail markers
    #[arg(long, global = true, overrides_with = "color")]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = Self::load_config(self.config.as_deref())?;
        let config = self.apply_overrides(config);
        self.command.run(&config)
    }

    /// Command-line flags take precedence over the configuration file.
    const fn apply_overrides(&self, mut config: Config) -> Config {
        if self.color {
            config.color = true;
        } else if self.no_color {
            config.color = false;
        }
        config
    }

    fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        tracing::debug!(path = %path.display(), "loading configuration");
        Config::load(path).with_context(|| format!("Failed to load {}", path.display()))
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List the valid decompositions of an ASIL level
    List(List),

    /// Validate a proposed ASIL decomposition
    ///
    /// The order of the two parts does not matter.
    Validate(Validate),

    /// Show the full ISO 26262-9 decomposition table
    Table(Table),
}

impl Command {
    #[instrument(level = "debug", skip(config))]
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::List(command) => command.run(config)?,
            Self::Validate(command) => command.run(config)?,
            Self::Table(command) => command.run(config)?,
        }
        Ok(())
    }
}
