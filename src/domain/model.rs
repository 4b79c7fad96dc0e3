use serde::{Deserialize, Serialize};

/// 一組 Goldbach 質數對，`first <= second` 且 `first + second == n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrimePair {
    pub first: i64,
    pub second: i64,
}

impl PrimePair {
    pub fn new(first: i64, second: i64) -> Self {
        Self { first, second }
    }

    pub fn sum(&self) -> i64 {
        self.first + self.second
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_pairs: usize,
    pub min_first: i64,
    pub max_first: i64,
    pub min_second: i64,
    pub max_second: i64,
    pub most_common_first: i64,
    pub most_common_second: i64,
}

/// 單次執行結果；只有在找不到質數對時 `summary` 為 `None`
#[derive(Debug, Clone, Serialize)]
pub struct GoldbachReport {
    pub n: i64,
    pub pairs: Vec<PrimePair>,
    pub summary: Option<Summary>,
}

impl GoldbachReport {
    pub fn is_counterexample(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn first_primes(&self) -> Vec<i64> {
        self.pairs.iter().map(|p| p.first).collect()
    }

    pub fn second_primes(&self) -> Vec<i64> {
        self.pairs.iter().map(|p| p.second).collect()
    }
}
