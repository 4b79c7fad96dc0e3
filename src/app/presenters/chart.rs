use crate::core::stats::Histogram;
use crate::domain::model::PrimePair;
use crate::utils::error::Result;
use std::io::Write;

const BAR: char = '█';
const POINT: char = '*';
const HIGHLIGHT: char = '@';
const REFERENCE: char = '·';

/// 水平長條直方圖，每個 bin 一行
pub fn render_histogram<W: Write>(
    out: &mut W,
    title: &str,
    histogram: &Histogram,
    bar_width: usize,
) -> Result<()> {
    writeln!(out, "{}", title)?;

    let max_count = histogram.max_count();
    for bin in &histogram.bins {
        let len = bar_length(bin.count, max_count, bar_width);
        let bar: String = std::iter::repeat(BAR).take(len).collect();
        writeln!(
            out,
            "  {:>9.1} - {:<9.1} │{} {}",
            bin.lower, bin.upper, bar, bin.count
        )?;
    }
    Ok(())
}

fn bar_length(count: usize, max_count: usize, bar_width: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    let scaled = (count as f64 * bar_width as f64 / max_count as f64).round() as usize;
    scaled.max(1)
}

/// 散佈圖：x 軸為第一個質數 (`0..=n/2`)，y 軸為第二個質數 (`n/2..=n`)，
/// 底層畫出 `p + q = n` 參考線
///
/// 前 `highlighted` 組以不同符號標示。`width` 與 `height` 皆須至少為 2
pub fn render_scatter<W: Write>(
    out: &mut W,
    n: i64,
    pairs: &[PrimePair],
    width: usize,
    height: usize,
    highlighted: usize,
) -> Result<()> {
    let half = (n / 2) as f64;
    let x_scale = (width - 1) as f64;
    let y_scale = (height - 1) as f64;

    let mut grid = vec![vec![' '; width]; height];
    for col in 0..width {
        let row = (col as f64 * y_scale / x_scale).round() as usize;
        grid[row.min(height - 1)][col] = REFERENCE;
    }

    for (i, pair) in pairs.iter().enumerate() {
        let col = ((pair.first as f64 / half) * x_scale).round() as usize;
        let row = (((n - pair.second) as f64 / half) * y_scale).round() as usize;
        let cell = &mut grid[row.min(height - 1)][col.min(width - 1)];
        if i < highlighted {
            *cell = HIGHLIGHT;
        } else if *cell != HIGHLIGHT {
            *cell = POINT;
        }
    }

    let top_label = n.to_string();
    let bottom_label = (n / 2).to_string();
    let label_width = top_label.len().max(bottom_label.len());

    writeln!(out, "Prime Pairs Distribution for {}", n)?;
    writeln!(out, "  (x: first prime, y: second prime)")?;
    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            top_label.as_str()
        } else if row == height - 1 {
            bottom_label.as_str()
        } else {
            ""
        };
        let line: String = cells.iter().collect();
        writeln!(out, "{:>w$} │{}", label, line.trim_end(), w = label_width)?;
    }

    let axis: String = std::iter::repeat('─').take(width).collect();
    writeln!(out, "{:>w$} └{}", "", axis, w = label_width)?;
    writeln!(
        out,
        "{:>w$}  0{:>gap$}",
        "",
        bottom_label,
        w = label_width,
        gap = width.saturating_sub(1)
    )?;
    writeln!(
        out,
        "  {} first {} pairs   {} pair   {} sum = {}",
        HIGHLIGHT,
        highlighted.min(pairs.len()),
        POINT,
        REFERENCE,
        n
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pairs::goldbach_pairs;

    fn render_to_string<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_bar_length_scaling() {
        assert_eq!(bar_length(0, 5, 40), 0);
        assert_eq!(bar_length(5, 5, 40), 40);
        assert_eq!(bar_length(1, 100, 40), 1);
        assert_eq!(bar_length(3, 0, 40), 0);
    }

    #[test]
    fn test_render_histogram_lines() {
        let hist = Histogram::from_values(&[3, 11, 17, 29, 41, 47], 3);
        let text = render_to_string(|out| {
            render_histogram(out, "Distribution of First Primes", &hist, 12)
        });

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Distribution of First Primes");
        assert_eq!(lines.len(), 4);
        // bins: [3, 17.7) [17.7, 32.3) [32.3, 47]
        assert!(lines[1].ends_with(&format!("│{} 3", "█".repeat(12))), "{}", lines[1]);
        assert!(lines[2].ends_with(&format!("│{} 1", "█".repeat(4))), "{}", lines[2]);
        assert!(lines[3].ends_with(&format!("│{} 2", "█".repeat(8))), "{}", lines[3]);
    }

    #[test]
    fn test_render_scatter_marks_every_pair() {
        let pairs = goldbach_pairs(100);
        let text = render_to_string(|out| render_scatter(out, 100, &pairs, 51, 51, 2));

        assert!(text.starts_with("Prime Pairs Distribution for 100"));
        assert_eq!(text.matches(HIGHLIGHT).count(), 2 + 1);
        assert_eq!(text.matches(POINT).count(), 4 + 1);
        assert!(text.contains("sum = 100"));
    }

    #[test]
    fn test_render_scatter_minimal_grid() {
        let pairs = goldbach_pairs(4);
        let text = render_to_string(|out| render_scatter(out, 4, &pairs, 2, 2, 5));
        assert!(text.contains(HIGHLIGHT));
        assert!(text.contains("@ first 1 pairs"));
    }
}
