//! エラー型定義
//!
//! ライブラリ全体で使用するエラー型を提供する。

use thiserror::Error;

use crate::api::Base;

/// 基数変換ライブラリのエラー型
///
/// 入力不正 (`InvalidDigit` / `UnknownBase` / `MalformedRequest`)、
/// 演算限界 (`Overflow`)、ルート未定義 (`UnsupportedRoute`)、
/// 設定不正 (`Config`)、および下位層のエラー (`Io` / `Xlsx`) を区別する。
#[derive(Error, Debug)]
pub enum RadixStepsError {
    /// 指定基数で解釈できない桁を含む入力
    #[error("Invalid digit in '{value}' for {base} input")]
    InvalidDigit { value: String, base: Base },

    /// 64bit符号付き整数の範囲を超える入力
    #[error("Value '{0}' exceeds the 64-bit signed integer range")]
    Overflow(String),

    /// 筆算ルートが定義されていない基数の組
    #[error("No conversion route from {from} to {to}")]
    UnsupportedRoute { from: Base, to: Base },

    /// 解釈できない基数名
    #[error("Unknown base name: '{0}'")]
    UnknownBase(String),

    /// 解析できないバッチ要求行
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// 設定エラー
    #[error("Configuration error: {0}")]
    Config(String),

    /// IOエラー
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// xlsx書き込みエラー
    #[error("Excel write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
