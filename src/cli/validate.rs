use asil::{Config, Level, OutputFormat};
use clap::Parser;
use serde::Serialize;
use tracing::instrument;

use super::{parse_level, terminal::Colorize};

/// Command arguments for `asil validate`.
#[derive(Debug, Parser)]
pub struct Validate {
    /// ASIL level of the original safety requirement.
    #[arg(value_name = "ORIGINAL", value_parser = parse_level)]
    original: Level,

    /// ASIL level of the first independent sub-requirement.
    #[arg(value_name = "PART_A", value_parser = parse_level)]
    part_a: Level,

    /// ASIL level of the second independent sub-requirement.
    #[arg(value_name = "PART_B", value_parser = parse_level)]
    part_b: Level,

    /// Output format (defaults to the configured format).
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// Exit with status 2 if the decomposition is not valid
    #[arg(long, overrides_with = "no_strict")]
    strict: bool,

    /// Exit with status 0 even if the decomposition is not valid
    #[arg(long, overrides_with = "strict")]
    no_strict: bool,
}

#[derive(Debug, Serialize)]
struct Verdict {
    original: Level,
    part_a: Level,
    part_b: Level,
    valid: bool,
}

impl Verdict {
    fn new(original: Level, part_a: Level, part_b: Level) -> Self {
        Self {
            original,
            part_a,
            part_b,
            valid: asil::is_valid_decomposition(original, part_a, part_b),
        }
    }

    fn message(&self, color: bool) -> String {
        let (marker, verdict) = if self.valid {
            ("✔", "is a VALID decomposition")
        } else {
            ("✘", "is NOT a valid decomposition")
        };
        let marker = match (color, self.valid) {
            (false, _) => marker.to_string(),
            (true, true) => marker.success(),
            (true, false) => marker.warning(),
        };
        format!(
            "{marker} ASIL {} → ASIL {}(a) + ASIL {}(b) {verdict} per ISO 26262.",
            self.original, self.part_a, self.part_b
        )
    }

    fn render(&self, format: OutputFormat, color: bool) -> anyhow::Result<String> {
        Ok(match format {
            OutputFormat::Text => self.message(color),
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }
}

impl Validate {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let verdict = Verdict::new(self.original, self.part_a, self.part_b);
        println!("{}", verdict.render(self.format(config), config.color)?);

        if let Some(code) = self.exit_code(&verdict, config) {
            std::process::exit(code);
        }

        Ok(())
    }

    fn format(&self, config: &Config) -> OutputFormat {
        self.output.unwrap_or(config.output)
    }

    const fn strict(&self, config: &Config) -> bool {
        if self.strict {
            true
        } else if self.no_strict {
            false
        } else {
            config.strict
        }
    }

    /// The failure status to exit with, if any.
    const fn exit_code(&self, verdict: &Verdict, config: &Config) -> Option<i32> {
        if !verdict.valid && self.strict(config) {
            Some(2)
        } else {
            None
        }
    }
}
