pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::presenters::{JsonPresenter, TextPresenter};
pub use config::{toml_config::TomlConfig, CliConfig, OutputFormat, PrimalityStrategy};
pub use crate::core::{
    engine::GoldbachEngine,
    pairs::{goldbach_pairs, goldbach_pairs_with},
    prime::{is_prime, Sieve, TrialDivision},
};
pub use domain::model::{GoldbachReport, PrimePair, Summary};
pub use utils::error::{GoldbachError, Result};
