use crate::config::{OutputFormat, PrimalityStrategy};
use crate::domain::model::GoldbachReport;
use crate::utils::error::Result;

/// 判斷任意 `i64` 是否為質數，結果必須與試除法一致
pub trait PrimalityTest {
    fn is_prime(&self, n: i64) -> bool;
}

impl<T: PrimalityTest + ?Sized> PrimalityTest for Box<T> {
    fn is_prime(&self, n: i64) -> bool {
        (**self).is_prime(n)
    }
}

impl<T: PrimalityTest + ?Sized> PrimalityTest for &T {
    fn is_prime(&self, n: i64) -> bool {
        (**self).is_prime(n)
    }
}

pub trait Presenter {
    fn announce_search(&mut self, n: i64) -> Result<()>;
    fn present(&mut self, report: &GoldbachReport) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub max_bins: usize,
    pub bar_width: usize,
    pub show_chart: bool,
    pub chart_width: usize,
    pub chart_height: usize,
    pub highlighted_pairs: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_bins: 30,
            bar_width: 40,
            show_chart: true,
            chart_width: 60,
            chart_height: 20,
            highlighted_pairs: 5,
        }
    }
}

pub trait ConfigProvider {
    fn display(&self) -> DisplaySettings;
    fn strategy(&self) -> PrimalityStrategy;
    fn output_format(&self) -> OutputFormat;
}
