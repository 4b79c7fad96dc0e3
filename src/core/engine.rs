use crate::core::pairs::goldbach_pairs_with;
use crate::core::stats::summarize;
use crate::domain::model::GoldbachReport;
use crate::domain::ports::{PrimalityTest, Presenter};
use crate::utils::error::Result;
use crate::utils::validation::validate_goldbach_number;
use std::time::Instant;

pub struct GoldbachEngine<T: PrimalityTest, P: Presenter> {
    tester: T,
    presenter: P,
}

impl<T: PrimalityTest, P: Presenter> GoldbachEngine<T, P> {
    pub fn new(tester: T, presenter: P) -> Self {
        Self { tester, presenter }
    }

    pub fn run(&mut self, n: i64) -> Result<GoldbachReport> {
        validate_goldbach_number(n)?;

        self.presenter.announce_search(n)?;

        let started = Instant::now();
        let pairs = goldbach_pairs_with(&self.tester, n);
        tracing::info!(
            "🔍 Found {} prime pairs for {} in {:?}",
            pairs.len(),
            n,
            started.elapsed()
        );

        if pairs.is_empty() {
            tracing::warn!("⚠️ No Goldbach pairs for {}, a counterexample to the conjecture", n);
        }

        let summary = summarize(&pairs);
        let report = GoldbachReport { n, pairs, summary };

        self.presenter.present(&report)?;
        Ok(report)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prime::TrialDivision;
    use crate::domain::model::PrimePair;
    use crate::utils::error::GoldbachError;

    #[derive(Default)]
    struct RecordingPresenter {
        announced: Vec<i64>,
        reports: Vec<GoldbachReport>,
    }

    impl Presenter for RecordingPresenter {
        fn announce_search(&mut self, n: i64) -> Result<()> {
            self.announced.push(n);
            Ok(())
        }

        fn present(&mut self, report: &GoldbachReport) -> Result<()> {
            self.reports.push(report.clone());
            Ok(())
        }
    }

    /// 故意回報所有數皆非質數，用來模擬反例
    struct NothingIsPrime;

    impl PrimalityTest for NothingIsPrime {
        fn is_prime(&self, _n: i64) -> bool {
            false
        }
    }

    #[test]
    fn test_engine_run_presents_report() {
        let mut engine = GoldbachEngine::new(TrialDivision, RecordingPresenter::default());
        let report = engine.run(10).unwrap();

        assert_eq!(report.pairs, vec![PrimePair::new(3, 7), PrimePair::new(5, 5)]);
        assert_eq!(report.summary.as_ref().unwrap().total_pairs, 2);

        let presenter = engine.into_presenter();
        assert_eq!(presenter.announced, vec![10]);
        assert_eq!(presenter.reports.len(), 1);
        assert_eq!(presenter.reports[0].n, 10);
    }

    #[test]
    fn test_engine_rejects_invalid_number() {
        let mut engine = GoldbachEngine::new(TrialDivision, RecordingPresenter::default());
        assert!(matches!(
            engine.run(7),
            Err(GoldbachError::InvalidNumber { .. })
        ));
        assert!(engine.presenter().announced.is_empty());
    }

    #[test]
    fn test_engine_empty_result_is_not_an_error() {
        let mut engine = GoldbachEngine::new(NothingIsPrime, RecordingPresenter::default());
        let report = engine.run(28).unwrap();

        assert!(report.is_counterexample());
        assert!(report.summary.is_none());
        assert_eq!(engine.presenter().reports.len(), 1);
    }
}
