use asil::{Config, Decomposition, Level, OutputFormat};
use clap::Parser;
use serde::Serialize;
use tracing::instrument;

use super::parse_level;

/// Command arguments for `asil list`.
#[derive(Debug, Parser)]
pub struct List {
    /// ASIL level to decompose (QM | A | B | C | D, case-insensitive).
    #[arg(value_name = "ASIL", value_parser = parse_level)]
    level: Level,

    /// Output format (defaults to the configured format).
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,
}

/// The decompositions of one level, as emitted in JSON output.
#[derive(Debug, Serialize)]
pub struct LevelReport {
    level: Level,
    decompositions: &'static [Decomposition],
}

impl LevelReport {
    pub const fn new(level: Level) -> Self {
        Self {
            level,
            decompositions: asil::list_decompositions(level),
        }
    }
}

impl List {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let format = self.format(config);
        println!("{}", render(self.level, format)?);
        Ok(())
    }

    fn format(&self, config: &Config) -> OutputFormat {
        self.output.unwrap_or(config.output)
    }
}

fn render(level: Level, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => asil::describe(level),
        OutputFormat::Json => serde_json::to_string_pretty(&LevelReport::new(level))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_flag_overrides_config() {
        let config = Config {
            output: OutputFormat::Json,
            ..Config::default()
        };
        let list = List::try_parse_from(["list", "b", "--output", "text"]).unwrap();
        assert_eq!(list.format(&config), OutputFormat::Text);

        let list = List::try_parse_from(["list", "b"]).unwrap();
        assert_eq!(list.format(&config), OutputFormat::Json);
        assert_eq!(list.format(&Config::default()), OutputFormat::Text);
    }

    #[test]
    fn text_is_the_description() {
        let text = render(Level::B, OutputFormat::Text).unwrap();
        assert_eq!(text, asil::describe(Level::B));
    }

    #[test]
    fn json_lists_pairs() {
        let json = render(Level::C, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "level": "C",
                "decompositions": [
                    { "a": "C", "b": "QM" },
                    { "a": "B", "b": "A" },
                ],
            })
        );
    }

    #[test]
    fn json_for_qm_is_empty() {
        let json = render(Level::QM, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["decompositions"], serde_json::json!([]));
    }
}
