//! 筆算記録
//!
//! 変換の途中経過を型付きの [`Step`] 列として記録する。各 `Step` は
//! `Display` で平文の筆算行を再現し、LaTeX 組版 ([`crate::latex`]) は
//! 文字列ではなく構造化フィールドから導出文を組み立てる。

mod recorder;

use std::fmt;

use serde::Serialize;

use crate::api::Base;
use crate::error::RadixStepsError;

/// 筆算の1ステップ
///
/// 数値を伴うステップ (`Digit` / `Division` / `Sum`) は計算値を
/// フィールドとして保持し、文章ステップは表示文字列を保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Step {
    /// 導入行 ("Converting binary number 1010 to decimal:")
    Header(String),
    /// 位取り記数法の公式
    Formula(String),
    /// 補足 (16進の英字対応表など)
    Note(String),
    /// 手順の説明 (割り算法の要約)
    Method(String),
    /// 桁列挙の開始 ("For 1010:")
    ForValue(String),
    /// 位取りの1桁分の積
    Digit {
        /// 桁の表示文字 (16進英字は大文字)
        symbol: char,
        /// 桁値
        value: i64,
        /// 右端からの位置 (最下位桁が 0)
        position: usize,
        /// 基数
        radix: u32,
        /// 位の重み (radix^position)
        weight: i64,
        /// value × weight
        product: i64,
    },
    /// 割り算法の1回分
    Division {
        dividend: i64,
        divisor: i64,
        quotient: i64,
        remainder: i64,
    },
    /// 積の合計
    Sum { total: i64 },
    /// 結果行 ("Result: 101010")
    ResultText(String),
    /// 複合ルートの段階見出し
    Stage { index: usize, label: String },
}

impl fmt::Display for Step {
    /// 平文の筆算行を再現する
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Header(text) | Step::ForValue(text) | Step::ResultText(text) => {
                f.write_str(text)
            }
            Step::Formula(text) => write!(f, "Formula: {}", text),
            Step::Note(text) => write!(f, "Note: {}", text),
            Step::Method(text) => write!(f, "Method: {}", text),
            Step::Digit {
                symbol,
                value,
                position,
                radix,
                weight,
                product,
            } => {
                if symbol.is_ascii_alphabetic() {
                    write!(
                        f,
                        "  {} (={}) x {}^{} = {} x {} = {}",
                        symbol, value, radix, position, value, weight, product
                    )
                } else {
                    write!(
                        f,
                        "  {} x {}^{} = {} x {} = {}",
                        value, radix, position, value, weight, product
                    )
                }
            }
            Step::Division {
                dividend,
                divisor,
                quotient,
                remainder,
            } => {
                if *remainder >= 10 {
                    write!(
                        f,
                        "{} ÷ {} = {} remainder {} ({})",
                        dividend,
                        divisor,
                        quotient,
                        remainder,
                        crate::radix::digit_symbol(*remainder)
                    )
                } else {
                    write!(
                        f,
                        "{} ÷ {} = {} remainder {}",
                        dividend, divisor, quotient, remainder
                    )
                }
            }
            Step::Sum { total } => write!(f, "Sum: {}", total),
            Step::Stage { index, label } => write!(f, "Step {}: {}", index, label),
        }
    }
}

/// 1件の変換結果 (入出力と筆算記録)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// 入力の桁文字列
    pub input: String,
    /// 入力の基数
    pub input_base: Base,
    /// 出力の桁文字列
    pub output: String,
    /// 出力の基数
    pub output_base: Base,
    /// 筆算の記録 (生成順)
    pub steps: Vec<Step>,
}

impl ConversionResult {
    /// 筆算の平文行を生成順に返す
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.to_string()).collect()
    }
}

/// 筆算付きで基数変換を行う
///
/// # 引数
///
/// * `value` - 入力の桁文字列
/// * `from` - 入力の基数
/// * `to` - 出力の基数
///
/// # 戻り値
///
/// 変換結果と筆算記録。同一基数間や ASCII を含む組は
/// `UnsupportedRoute` となる。
///
/// # 使用例
///
/// ```
/// use radixsteps::{record_steps, Base};
///
/// let result = record_steps("1010", Base::Binary, Base::Decimal).unwrap();
/// assert_eq!(result.output, "10");
/// assert!(result.lines().iter().any(|l| l == "Sum: 10"));
/// ```
pub fn record_steps(value: &str, from: Base, to: Base) -> Result<ConversionResult, RadixStepsError> {
    if !from.is_numeric() || !to.is_numeric() || from == to {
        return Err(RadixStepsError::UnsupportedRoute { from, to });
    }
    match (from, to) {
        (_, Base::Decimal) => recorder::to_decimal(value, from),
        (Base::Decimal, _) => recorder::from_decimal(value, to),
        _ => recorder::via_decimal(value, from, to),
    }
}
