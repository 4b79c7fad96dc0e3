use crate::utils::error::{GoldbachError, Result};
use crate::utils::validation::{parse_goldbach_number, validate_goldbach_number};
use std::io::{BufRead, Write};

pub const BANNER: &str = "Enhanced Goldbach Conjecture Visualization";
pub const PROMPT: &str = "\nEnter an even number (≥ 4): ";

pub fn write_banner<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "{}", BANNER)?;
    writeln!(output, "{}", "=".repeat(BANNER.chars().count()))?;
    Ok(())
}

/// 印出標題後取得要分析的偶數
///
/// 命令列已指定 `number` 時只做驗證，不讀取 `input`；否則進入提示迴圈
pub fn resolve_number<R: BufRead, W: Write>(
    number: Option<i64>,
    input: &mut R,
    console: &mut W,
) -> Result<i64> {
    write_banner(console)?;

    match number {
        Some(n) => {
            validate_goldbach_number(n)?;
            tracing::debug!("Using number from command line: {}", n);
            Ok(n)
        }
        None => prompt_for_number(input, console),
    }
}

/// 反覆提示直到使用者輸入 >= 4 的偶數
///
/// 無效輸入會印出原因並重新提示；輸入結束時回傳 [`GoldbachError::InputClosed`]
pub fn prompt_for_number<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64> {
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Err(GoldbachError::InputClosed);
        }

        match parse_goldbach_number(&line) {
            Ok(n) => {
                tracing::debug!("Accepted input: {}", n);
                return Ok(n);
            }
            Err(GoldbachError::InvalidNumber { value, reason }) => {
                tracing::debug!("Rejected input '{}': {}", value, reason);
                writeln!(output, "{}", reason)?;
            }
            Err(e) => return Err(e),
        }
    }
}
