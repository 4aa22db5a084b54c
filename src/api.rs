//! 公開API型定義
//!
//! 基数 (`Base`) と解答セルの書式 (`SolutionFormat`) を提供する。
//! どちらも文字列との相互変換を持ち、バッチ入力行やビルダーの
//! 設定値として利用される。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RadixStepsError;

/// 変換対象の基数
///
/// 数値基数は 2 / 8 / 10 / 16 の4種類。`Ascii` は入力行の解析のために
/// 存在するが、筆算ルートを持たないため変換要求に現れた場合は
/// `UnsupportedRoute` となる。
///
/// # 使用例
///
/// ```
/// use radixsteps::Base;
///
/// let base: Base = "hex".parse().unwrap();
/// assert_eq!(base, Base::Hexadecimal);
/// assert_eq!(base.radix(), Some(16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    /// 2進数
    Binary,
    /// 8進数
    Octal,
    /// 10進数
    Decimal,
    /// 16進数
    Hexadecimal,
    /// ASCII (数値基数ではない)
    Ascii,
}

impl Base {
    /// 数値基数 (2, 8, 10, 16) を返す。`Ascii` は `None`。
    pub fn radix(&self) -> Option<u32> {
        match self {
            Base::Binary => Some(2),
            Base::Octal => Some(8),
            Base::Decimal => Some(10),
            Base::Hexadecimal => Some(16),
            Base::Ascii => None,
        }
    }

    /// 英語の名称 ("binary" など)。文章生成に使用する。
    pub fn word(&self) -> &'static str {
        match self {
            Base::Binary => "binary",
            Base::Octal => "octal",
            Base::Decimal => "decimal",
            Base::Hexadecimal => "hexadecimal",
            Base::Ascii => "ascii",
        }
    }

    /// LaTeX の下付き添字に使う基数表記 ("2", "8", "10", "16")
    pub fn subscript(&self) -> &'static str {
        match self {
            Base::Binary => "2",
            Base::Octal => "8",
            Base::Decimal => "10",
            Base::Hexadecimal => "16",
            Base::Ascii => "ascii",
        }
    }

    /// 数値基数かどうか
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Base::Ascii)
    }

    /// 全数値基数 (宣言順)
    pub fn numeric_bases() -> [Base; 4] {
        [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal]
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

impl FromStr for Base {
    type Err = RadixStepsError;

    /// 基数名の解析
    ///
    /// 英単語・頭文字・基数の数字表記をすべて受け付ける
    /// ("16" / "hex" / "h" / "hexadecimal" は同じ結果になる)。
    /// 大文字小文字は区別しない。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2" | "b" | "bin" | "binary" => Ok(Base::Binary),
            "8" | "o" | "oct" | "octal" => Ok(Base::Octal),
            "10" | "d" | "dec" | "decimal" => Ok(Base::Decimal),
            "16" | "h" | "hex" | "hexadecimal" => Ok(Base::Hexadecimal),
            "a" | "ascii" => Ok(Base::Ascii),
            _ => Err(RadixStepsError::UnknownBase(s.to_string())),
        }
    }
}

/// 解答セルの書式
///
/// `Plain` は筆算の行をそのまま出力し、`Latex` は組版指示付きの
/// 導出文に変換する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolutionFormat {
    /// 平文の筆算行
    Plain,
    /// LaTeX 導出文
    Latex,
}

impl Default for SolutionFormat {
    fn default() -> Self {
        SolutionFormat::Plain
    }
}

impl fmt::Display for SolutionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionFormat::Plain => write!(f, "plain"),
            SolutionFormat::Latex => write!(f, "latex"),
        }
    }
}

impl FromStr for SolutionFormat {
    type Err = RadixStepsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(SolutionFormat::Plain),
            "latex" | "tex" => Ok(SolutionFormat::Latex),
            _ => Err(RadixStepsError::Config(format!(
                "unknown solution format: {}",
                s
            ))),
        }
    }
}
