use crate::core::prime::TrialDivision;
use crate::domain::model::PrimePair;
use crate::domain::ports::PrimalityTest;

/// 找出 `n` 的所有 Goldbach 質數對，依第一個質數遞增排序
///
/// 呼叫端必須傳入 >= 4 的偶數，驗證在輸入邊界完成而非此處。
/// 回傳空清單是合法結果
pub fn goldbach_pairs(n: i64) -> Vec<PrimePair> {
    goldbach_pairs_with(&TrialDivision, n)
}

pub fn goldbach_pairs_with<T: PrimalityTest + ?Sized>(tester: &T, n: i64) -> Vec<PrimePair> {
    debug_assert!(n >= 4 && n % 2 == 0, "goldbach_pairs requires an even n >= 4, got {}", n);

    (2..=n / 2)
        .filter(|&p| tester.is_prime(p) && tester.is_prime(n - p))
        .map(|p| PrimePair::new(p, n - p))
        .collect()
}
