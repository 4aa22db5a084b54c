//! LaTeX組版
//!
//! 筆算記録 ([`crate::steps::ConversionResult`]) をルートごとの
//! レンダラで導出文に変換する。レンダラは基数の組で選択され、
//! 未定義の組は汎用の行変換にフォールバックする。

mod escape;
mod renderers;

use crate::api::Base;
use crate::steps::ConversionResult;

/// 筆算記録をLaTeX導出文に変換する
///
/// # 使用例
///
/// ```
/// use radixsteps::{record_steps, transcribe, Base};
///
/// let result = record_steps("1010", Base::Binary, Base::Hexadecimal).unwrap();
/// let latex = transcribe(&result);
/// assert!(latex.contains("\\textbf{Final Answer:}"));
/// assert!(latex.contains("\\(1010_{2} = A_{16}\\)"));
/// ```
pub fn transcribe(result: &ConversionResult) -> String {
    match (result.input_base, result.output_base) {
        (Base::Binary, Base::Decimal) => renderers::binary_to_decimal(result),
        (Base::Octal, Base::Decimal) => renderers::octal_to_decimal(result),
        (Base::Hexadecimal, Base::Decimal) => renderers::hexadecimal_to_decimal(result),
        (Base::Decimal, Base::Binary) => renderers::decimal_to_binary(result),
        (Base::Decimal, Base::Octal) | (Base::Decimal, Base::Hexadecimal) => {
            renderers::decimal_by_division(result)
        }
        (Base::Binary, Base::Octal)
        | (Base::Octal, Base::Hexadecimal)
        | (Base::Hexadecimal, Base::Octal) => renderers::two_stage_via_decimal(result),
        (Base::Binary, Base::Hexadecimal) => renderers::binary_groups_to_hex(result),
        (Base::Octal, Base::Binary) | (Base::Hexadecimal, Base::Binary) => {
            renderers::digit_expansion_to_binary(result)
        }
        _ => transcribe_plain_lines(&result.lines()),
    }
}

/// 平文行を1行ずつ汎用変換してLaTeXにする
pub fn transcribe_plain_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| escape::escape_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 序数の表示名
///
/// 1〜10は英単語、それ以降は数字と接尾辞 (11th / 21st / 22nd / 23rd)。
pub(crate) fn ordinal_label(n: usize) -> String {
    const WORDS: [&str; 10] = [
        "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
        "Tenth",
    ];
    if (1..=10).contains(&n) {
        return WORDS[n - 1].to_string();
    }
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
