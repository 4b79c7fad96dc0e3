use crate::domain::model::GoldbachReport;
use crate::domain::ports::Presenter;
use crate::utils::error::Result;
use std::io::Write;

/// 將報表輸出為單一 JSON 文件
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn announce_search(&mut self, _n: i64) -> Result<()> {
        // stdout 只輸出 JSON 文件本身
        Ok(())
    }

    fn present(&mut self, report: &GoldbachReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pairs::goldbach_pairs;
    use crate::core::stats::summarize;

    #[test]
    fn test_json_report_shape() {
        let pairs = goldbach_pairs(10);
        let summary = summarize(&pairs);
        let report = GoldbachReport { n: 10, pairs, summary };

        let mut presenter = JsonPresenter::new(Vec::new());
        presenter.announce_search(10).unwrap();
        presenter.present(&report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&presenter.into_inner()).unwrap();
        assert_eq!(value["n"], 10);
        assert_eq!(value["pairs"][0]["first"], 3);
        assert_eq!(value["pairs"][0]["second"], 7);
        assert_eq!(value["pairs"][1]["first"], 5);
        assert_eq!(value["summary"]["total_pairs"], 2);
    }

    #[test]
    fn test_json_counterexample_has_null_summary() {
        let report = GoldbachReport {
            n: 12,
            pairs: Vec::new(),
            summary: None,
        };
        let mut presenter = JsonPresenter::new(Vec::new());
        presenter.present(&report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&presenter.into_inner()).unwrap();
        assert!(value["pairs"].as_array().unwrap().is_empty());
        assert!(value["summary"].is_null());
    }
}
