use crate::app::presenters::chart::{render_histogram, render_scatter};
use crate::core::stats::Histogram;
use crate::domain::model::{GoldbachReport, Summary};
use crate::domain::ports::{DisplaySettings, Presenter};
use crate::utils::error::Result;
use std::io::Write;

pub const COUNTEREXAMPLE_MESSAGE: &str =
    "No prime pairs found! This would disprove the Goldbach Conjecture!";

/// 終端機報表：質數對清單、統計摘要、直方圖與散佈圖
pub struct TextPresenter<W: Write> {
    out: W,
    display: DisplaySettings,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W, display: DisplaySettings) -> Self {
        Self { out, display }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_pairs(&mut self, report: &GoldbachReport) -> Result<()> {
        writeln!(self.out, "\nGoldbach Pairs for {}:", report.n)?;
        for pair in &report.pairs {
            writeln!(self.out, "{:4} + {:4} = {}", pair.first, pair.second, report.n)?;
        }
        Ok(())
    }

    fn write_summary(&mut self, summary: &Summary) -> Result<()> {
        writeln!(self.out, "\nSummary Statistics")?;
        writeln!(self.out, "  Total Pairs: {}", summary.total_pairs)?;
        writeln!(self.out, "  Min First Prime: {}", summary.min_first)?;
        writeln!(self.out, "  Max First Prime: {}", summary.max_first)?;
        writeln!(self.out, "  Min Second Prime: {}", summary.min_second)?;
        writeln!(self.out, "  Max Second Prime: {}", summary.max_second)?;
        writeln!(self.out, "  Most Common First: {}", summary.most_common_first)?;
        writeln!(self.out, "  Most Common Second: {}", summary.most_common_second)?;
        Ok(())
    }

    fn write_distributions(&mut self, report: &GoldbachReport) -> Result<()> {
        let first = Histogram::from_values(&report.first_primes(), self.display.max_bins);
        let second = Histogram::from_values(&report.second_primes(), self.display.max_bins);

        writeln!(self.out)?;
        render_histogram(
            &mut self.out,
            "Distribution of First Primes",
            &first,
            self.display.bar_width,
        )?;
        writeln!(self.out)?;
        render_histogram(
            &mut self.out,
            "Distribution of Second Primes",
            &second,
            self.display.bar_width,
        )?;
        Ok(())
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn announce_search(&mut self, n: i64) -> Result<()> {
        writeln!(self.out, "\nFinding prime pairs for {}...", n)?;
        Ok(())
    }

    fn present(&mut self, report: &GoldbachReport) -> Result<()> {
        let Some(summary) = &report.summary else {
            writeln!(self.out, "{}", COUNTEREXAMPLE_MESSAGE)?;
            self.out.flush()?;
            return Ok(());
        };

        writeln!(self.out, "Found {} prime pairs!", report.pairs.len())?;
        self.write_pairs(report)?;
        self.write_summary(summary)?;
        self.write_distributions(report)?;

        if self.display.show_chart {
            writeln!(self.out)?;
            render_scatter(
                &mut self.out,
                report.n,
                &report.pairs,
                self.display.chart_width,
                self.display.chart_height,
                self.display.highlighted_pairs,
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}
