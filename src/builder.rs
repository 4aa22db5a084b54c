//! 変換器の構築と公開API
//!
//! [`ConverterBuilder`] で設定を組み立て、`build()` で検証してから
//! [`Converter`] を得る。`Converter` は筆算付き変換・バッチ処理・
//! Excel出力の入口となる。

use std::io::BufRead;
use std::path::Path;

use crate::api::{Base, SolutionFormat};
use crate::batch::{self, ConversionRequest, Target};
use crate::error::RadixStepsError;
use crate::export;
use crate::latex;
use crate::radix;
use crate::steps::{self, ConversionResult};

/// Excelのシート名に使えない文字
const INVALID_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];
/// Excelのシート名の最大長
const MAX_SHEET_NAME_LEN: usize = 31;

/// 変換と出力の設定
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// 解答セルの書式
    pub solution_format: SolutionFormat,
    /// 出力シート名
    pub sheet_name: String,
    /// 列幅 (Input / Solution / Output)。`None` なら書式ごとの既定値
    pub column_widths: Option<(f64, f64, f64)>,
    /// 内容に合わせた列幅の自動調整
    pub auto_fit: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            solution_format: SolutionFormat::default(),
            sheet_name: "Base Conversion".to_string(),
            column_widths: None,
            auto_fit: true,
        }
    }
}

impl ConversionConfig {
    /// 設定または書式ごとの既定の列幅
    ///
    /// LaTeX は導出文が長いため Solution 列を広く取る。
    pub(crate) fn effective_widths(&self) -> (f64, f64, f64) {
        self.column_widths.unwrap_or(match self.solution_format {
            SolutionFormat::Latex => (45.0, 80.0, 35.0),
            SolutionFormat::Plain => (25.0, 60.0, 25.0),
        })
    }
}

/// [`Converter`] のビルダー
///
/// # 使用例
///
/// ```
/// use radixsteps::{ConverterBuilder, SolutionFormat};
///
/// let converter = ConverterBuilder::new()
///     .with_solution_format(SolutionFormat::Latex)
///     .with_sheet_name("Worksheet 1")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    config: ConversionConfig,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解答セルの書式を設定する
    pub fn with_solution_format(mut self, format: SolutionFormat) -> Self {
        self.config.solution_format = format;
        self
    }

    /// 出力シート名を設定する
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.config.sheet_name = name.into();
        self
    }

    /// 列幅 (Input / Solution / Output) を設定する
    pub fn with_column_widths(mut self, input: f64, solution: f64, output: f64) -> Self {
        self.config.column_widths = Some((input, solution, output));
        self
    }

    /// 内容に合わせた列幅の自動調整を切り替える
    pub fn with_auto_fit(mut self, enabled: bool) -> Self {
        self.config.auto_fit = enabled;
        self
    }

    /// 設定を検証して [`Converter`] を生成する
    ///
    /// # 戻り値
    ///
    /// シート名や列幅が不正な場合は `Config` エラー。
    pub fn build(self) -> Result<Converter, RadixStepsError> {
        let name = &self.config.sheet_name;
        if name.trim().is_empty() {
            return Err(RadixStepsError::Config(
                "sheet name must not be empty".to_string(),
            ));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(RadixStepsError::Config(format!(
                "sheet name must be at most {} characters: '{}'",
                MAX_SHEET_NAME_LEN, name
            )));
        }
        if let Some(c) = name.chars().find(|c| INVALID_SHEET_CHARS.contains(c)) {
            return Err(RadixStepsError::Config(format!(
                "sheet name must not contain '{}': '{}'",
                c, name
            )));
        }
        if let Some((input, solution, output)) = self.config.column_widths {
            if input <= 0.0 || solution <= 0.0 || output <= 0.0 {
                return Err(RadixStepsError::Config(
                    "column widths must be positive".to_string(),
                ));
            }
        }
        Ok(Converter {
            config: self.config,
        })
    }
}

/// 基数変換器
///
/// # 使用例
///
/// ```
/// use radixsteps::{Base, ConverterBuilder, SolutionFormat};
///
/// let converter = ConverterBuilder::new()
///     .with_solution_format(SolutionFormat::Latex)
///     .build()
///     .unwrap();
/// let result = converter
///     .convert_with_steps("1010", Base::Binary, Base::Hexadecimal)
///     .unwrap();
/// assert_eq!(result.output, "A");
/// assert!(converter.solution(&result).contains("Final Answer"));
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    /// 現在の設定
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// 基数変換 (筆算記録なし)
    pub fn convert(
        &self,
        value: &str,
        from: Base,
        to: Base,
    ) -> Result<String, RadixStepsError> {
        radix::convert(value, from, to)
    }

    /// 筆算付きで基数変換する
    pub fn convert_with_steps(
        &self,
        value: &str,
        from: Base,
        to: Base,
    ) -> Result<ConversionResult, RadixStepsError> {
        steps::record_steps(value, from, to)
    }

    /// 変換元を除く全数値基数へ変換する
    ///
    /// 失敗したルートは警告して結果から除く。
    pub fn convert_all(&self, value: &str, from: Base) -> Vec<ConversionResult> {
        let request = ConversionRequest {
            value: value.to_string(),
            from,
            to: Target::All,
        };
        batch::process_requests(std::slice::from_ref(&request))
    }

    /// 設定された書式で解答セルの文字列を生成する
    pub fn solution(&self, result: &ConversionResult) -> String {
        match self.config.solution_format {
            SolutionFormat::Latex => latex::transcribe(result),
            SolutionFormat::Plain => result.lines().join("\n"),
        }
    }

    /// 要求行を読み込んで並列に変換する
    pub fn process_batch<R: BufRead>(
        &self,
        reader: R,
    ) -> Result<Vec<ConversionResult>, RadixStepsError> {
        let requests = batch::read_requests(reader)?;
        Ok(batch::process_requests(&requests))
    }

    /// 変換結果をxlsxファイルに書き出す
    pub fn export_to_path(
        &self,
        results: &[ConversionResult],
        path: impl AsRef<Path>,
    ) -> Result<(), RadixStepsError> {
        let mut workbook = export::build_workbook(results, &self.config)?;
        workbook.save(path.as_ref())?;
        Ok(())
    }

    /// 変換結果をxlsxのバイト列として書き出す
    pub fn export_to_buffer(
        &self,
        results: &[ConversionResult],
    ) -> Result<Vec<u8>, RadixStepsError> {
        let mut workbook = export::build_workbook(results, &self.config)?;
        Ok(workbook.save_to_buffer()?)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let converter = ConverterBuilder::new().build().unwrap();
        assert_eq!(converter.config().solution_format, SolutionFormat::Plain);
        assert_eq!(converter.config().sheet_name, "Base Conversion");
        assert!(converter.config().auto_fit);
    }

    #[test]
    fn test_builder_rejects_empty_sheet_name() {
        let err = ConverterBuilder::new().with_sheet_name("").build().unwrap_err();
        assert!(matches!(err, RadixStepsError::Config(_)));
    }

    #[test]
    fn test_builder_rejects_long_sheet_name() {
        let err = ConverterBuilder::new()
            .with_sheet_name("a".repeat(32))
            .build()
            .unwrap_err();
        assert!(matches!(err, RadixStepsError::Config(_)));
    }

    #[test]
    fn test_builder_rejects_invalid_sheet_chars() {
        for name in ["a[b", "a]b", "a:b", "a*b", "a?b", "a/b", "a\\b"] {
            let err = ConverterBuilder::new().with_sheet_name(name).build().unwrap_err();
            assert!(matches!(err, RadixStepsError::Config(_)), "name: {}", name);
        }
    }

    #[test]
    fn test_builder_rejects_nonpositive_widths() {
        let err = ConverterBuilder::new()
            .with_column_widths(0.0, 80.0, 35.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, RadixStepsError::Config(_)));
    }

    #[test]
    fn test_effective_widths_by_format() {
        let latex = ConverterBuilder::new()
            .with_solution_format(SolutionFormat::Latex)
            .build()
            .unwrap();
        assert_eq!(latex.config().effective_widths(), (45.0, 80.0, 35.0));

        let plain = ConverterBuilder::new().build().unwrap();
        assert_eq!(plain.config().effective_widths(), (25.0, 60.0, 25.0));

        let custom = ConverterBuilder::new()
            .with_column_widths(10.0, 20.0, 30.0)
            .build()
            .unwrap();
        assert_eq!(custom.config().effective_widths(), (10.0, 20.0, 30.0));
    }

    #[test]
    fn test_convert_all_skips_source_base() {
        let converter = ConverterBuilder::new().build().unwrap();
        let results = converter.convert_all("42", Base::Decimal);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.output_base != Base::Decimal));
    }

    #[test]
    fn test_solution_respects_format() {
        let result = steps::record_steps("1010", Base::Binary, Base::Decimal).unwrap();

        let plain = ConverterBuilder::new().build().unwrap();
        assert!(plain
            .solution(&result)
            .starts_with("Converting binary number 1010 to decimal:"));

        let latex = ConverterBuilder::new()
            .with_solution_format(SolutionFormat::Latex)
            .build()
            .unwrap();
        assert!(latex.solution(&result).contains("\\textbf{Final Answer:}"));
    }
}
