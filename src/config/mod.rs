pub mod toml_config;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PrimalityStrategy {
    #[default]
    TrialDivision,
    Sieve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// JSON 模式下 stdout 只留給報表，標題與提示改寫到 stderr
    pub fn console_on_stderr(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "goldbach-viz")]
#[command(about = "Find the Goldbach prime pairs of an even number and chart their distribution")]
pub struct CliConfig {
    /// Even number >= 4 (prompts on stdin when omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub number: Option<i64>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Primality test used by the pair search (overrides config)
    #[arg(long, value_enum)]
    pub strategy: Option<PrimalityStrategy>,

    /// Upper bound on histogram bins (overrides config)
    #[arg(long)]
    pub max_bins: Option<usize>,

    /// Skip the scatter chart panel
    #[arg(long)]
    pub no_chart: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
