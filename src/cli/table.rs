use asil::{Config, Level, OutputFormat};
use clap::Parser;
use tracing::instrument;

use super::list::LevelReport;

/// Command arguments for `asil table`.
#[derive(Debug, Parser)]
pub struct Table {
    /// Output format (defaults to the configured format).
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,
}

impl Table {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let format = self.format(config);
        println!("{}", render(format)?);
        Ok(())
    }

    fn format(&self, config: &Config) -> OutputFormat {
        self.output.unwrap_or(config.output)
    }
}

/// Levels from the highest rank down.
fn levels() -> impl Iterator<Item = Level> {
    Level::ALL.into_iter().rev()
}

fn render(format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => levels()
            .map(asil::describe)
            .collect::<Vec<_>>()
            .join("\n\n"),
        OutputFormat::Json => {
            let reports: Vec<LevelReport> = levels().map(LevelReport::new).collect();
            serde_json::to_string_pretty(&reports)?
        }
    })
}
