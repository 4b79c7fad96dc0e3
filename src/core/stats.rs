use crate::domain::model::{PrimePair, Summary};
use std::collections::BTreeMap;

/// 質數對清單的統計摘要，空清單回傳 `None`
pub fn summarize(pairs: &[PrimePair]) -> Option<Summary> {
    let firsts: Vec<i64> = pairs.iter().map(|p| p.first).collect();
    let seconds: Vec<i64> = pairs.iter().map(|p| p.second).collect();

    Some(Summary {
        total_pairs: pairs.len(),
        min_first: *firsts.iter().min()?,
        max_first: *firsts.iter().max()?,
        min_second: *seconds.iter().min()?,
        max_second: *seconds.iter().max()?,
        most_common_first: most_common(&firsts)?,
        most_common_second: most_common(&seconds)?,
    })
}

/// 眾數；次數相同時取最小值
pub fn most_common(values: &[i64]) -> Option<i64> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut best: Option<(i64, usize)> = None;
    for (value, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// 在 `[min, max]` 上切出 `min(max_bins, values.len())` 個等寬 bin
    ///
    /// 最後一個 bin 為閉區間；所有值相同時範圍擴為 `[v - 0.5, v + 0.5]`
    pub fn from_values(values: &[i64], max_bins: usize) -> Self {
        let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
            return Self { bins: Vec::new() };
        };

        let bin_count = max_bins.min(values.len()).max(1);
        let (mut lower, mut upper) = (min as f64, max as f64);
        if min == max {
            lower -= 0.5;
            upper += 0.5;
        }
        let width = (upper - lower) / bin_count as f64;

        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| HistogramBin {
                lower: lower + i as f64 * width,
                upper: if i + 1 == bin_count {
                    upper
                } else {
                    lower + (i + 1) as f64 * width
                },
                count: 0,
            })
            .collect();

        for &v in values {
            let idx = (((v as f64) - lower) / width).floor() as usize;
            bins[idx.min(bin_count - 1)].count += 1;
        }

        Self { bins }
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}
