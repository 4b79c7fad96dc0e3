use crate::config::PrimalityStrategy;
use crate::domain::ports::PrimalityTest;

/// 超過此上限的 sieve 不再配置記憶體，改由試除法處理
pub const MAX_SIEVE_LIMIT: usize = 50_000_000;

/// 試除法質數判斷，對所有 `i64` 皆有定義
///
/// `n < 2` 一律非質數，2 是唯一的偶質數；奇數只檢查到 `floor(sqrt(n))` 的奇因數
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // i <= n / i 等同 i * i <= n，但不會溢位
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivision;

impl PrimalityTest for TrialDivision {
    fn is_prime(&self, n: i64) -> bool {
        is_prime(n)
    }
}

/// Eratosthenes 篩法，涵蓋 `0..=limit`
#[derive(Debug, Clone)]
pub struct Sieve {
    composite: Vec<bool>,
}

impl Sieve {
    pub fn new(limit: usize) -> Self {
        let limit = limit.min(MAX_SIEVE_LIMIT);
        let mut composite = vec![false; limit + 1];
        composite[0] = true;
        if limit >= 1 {
            composite[1] = true;
        }

        let mut i = 2;
        while i * i <= limit {
            if !composite[i] {
                let mut multiple = i * i;
                while multiple <= limit {
                    composite[multiple] = true;
                    multiple += i;
                }
            }
            i += 1;
        }

        tracing::debug!("Built sieve up to {}", limit);
        Self { composite }
    }

    pub fn limit(&self) -> usize {
        self.composite.len() - 1
    }
}

impl PrimalityTest for Sieve {
    fn is_prime(&self, n: i64) -> bool {
        if n < 2 {
            return false;
        }
        match usize::try_from(n) {
            Ok(idx) if idx <= self.limit() => !self.composite[idx],
            _ => is_prime(n),
        }
    }
}

/// 依 `strategy` 建立質數判斷器，大小足以列舉 `n` 的質數對
pub fn build_tester(strategy: PrimalityStrategy, n: i64) -> Box<dyn PrimalityTest> {
    match strategy {
        PrimalityStrategy::TrialDivision => Box::new(TrialDivision),
        PrimalityStrategy::Sieve => {
            let limit = usize::try_from(n.max(2)).unwrap_or(MAX_SIEVE_LIMIT);
            Box::new(Sieve::new(limit))
        }
    }
}
