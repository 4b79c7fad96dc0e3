pub mod engine;
pub mod pairs;
pub mod prime;
pub mod stats;

pub use crate::domain::model::{GoldbachReport, PrimePair, Summary};
pub use crate::domain::ports::{ConfigProvider, PrimalityTest, Presenter};
pub use crate::utils::error::Result;
