//! Excel出力
//!
//! 変換結果を3列 (Input / Solution / Output) のワークシートに
//! 書き出す。列幅は設定値を基準に、内容の表示幅に合わせて
//! 広げられる。

use rust_xlsxwriter::Workbook;
use unicode_width::UnicodeWidthStr;

use crate::api::SolutionFormat;
use crate::builder::ConversionConfig;
use crate::error::RadixStepsError;
use crate::latex;
use crate::steps::ConversionResult;

/// 自動調整時の列幅の上限
const MAX_COLUMN_WIDTH: f64 = 120.0;

/// 下付き添字付きの問題文を生成する
fn format_question(result: &ConversionResult, format: SolutionFormat) -> String {
    match format {
        SolutionFormat::Latex => format!(
            "Convert the {} number ${}_{{{}}}$ to {}.",
            result.input_base.word(),
            result.input,
            result.input_base.subscript(),
            result.output_base.word()
        ),
        SolutionFormat::Plain => format!(
            "{} (base {})",
            result.input,
            result.input_base.subscript()
        ),
    }
}

/// 解答セルの値を生成する
fn format_answer(result: &ConversionResult, format: SolutionFormat) -> String {
    match format {
        SolutionFormat::Latex => format!(
            "${}_{{{}}}$",
            result.output,
            result.output_base.subscript()
        ),
        SolutionFormat::Plain => format!(
            "{} (base {})",
            result.output,
            result.output_base.subscript()
        ),
    }
}

/// 基準幅と内容の表示幅から列幅を決める
fn fit_width(hint: f64, content_width: usize) -> f64 {
    hint.max(content_width as f64 + 2.0).min(MAX_COLUMN_WIDTH)
}

/// 変換結果からワークブックを組み立てる
///
/// 保存は呼び出し側 ([`crate::Converter`]) が行う。
pub(crate) fn build_workbook(
    results: &[ConversionResult],
    config: &ConversionConfig,
) -> Result<Workbook, RadixStepsError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(&config.sheet_name)?;

    sheet.write_string(0, 0, "Input")?;
    sheet.write_string(0, 1, "Solution")?;
    sheet.write_string(0, 2, "Output")?;

    let mut input_width = 0usize;
    let mut output_width = 0usize;
    for (i, result) in results.iter().enumerate() {
        let row = i as u32 + 1;
        let question = format_question(result, config.solution_format);
        let solution = match config.solution_format {
            SolutionFormat::Latex => latex::transcribe(result),
            SolutionFormat::Plain => result.lines().join("\n"),
        };
        let answer = format_answer(result, config.solution_format);

        input_width = input_width.max(UnicodeWidthStr::width(question.as_str()));
        output_width = output_width.max(UnicodeWidthStr::width(answer.as_str()));

        sheet.write_string(row, 0, &question)?;
        sheet.write_string(row, 1, &solution)?;
        sheet.write_string(row, 2, &answer)?;
    }

    let (input_hint, solution_hint, output_hint) = config.effective_widths();
    if config.auto_fit {
        sheet.set_column_width(0, fit_width(input_hint, input_width))?;
        sheet.set_column_width(1, solution_hint)?;
        sheet.set_column_width(2, fit_width(output_hint, output_width))?;
    } else {
        sheet.set_column_width(0, input_hint)?;
        sheet.set_column_width(1, solution_hint)?;
        sheet.set_column_width(2, output_hint)?;
    }

    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Base;
    use crate::steps::record_steps;

    fn sample_results() -> Vec<ConversionResult> {
        vec![
            record_steps("1010", Base::Binary, Base::Hexadecimal).unwrap(),
            record_steps("255", Base::Decimal, Base::Hexadecimal).unwrap(),
        ]
    }

    #[test]
    fn test_format_question_latex() {
        let result = record_steps("1010", Base::Binary, Base::Hexadecimal).unwrap();
        assert_eq!(
            format_question(&result, SolutionFormat::Latex),
            "Convert the binary number $1010_{2}$ to hexadecimal."
        );
    }

    #[test]
    fn test_format_answer_latex() {
        let result = record_steps("1010", Base::Binary, Base::Hexadecimal).unwrap();
        assert_eq!(format_answer(&result, SolutionFormat::Latex), "$A_{16}$");
    }

    #[test]
    fn test_format_plain_cells() {
        let result = record_steps("255", Base::Decimal, Base::Hexadecimal).unwrap();
        assert_eq!(
            format_question(&result, SolutionFormat::Plain),
            "255 (base 10)"
        );
        assert_eq!(format_answer(&result, SolutionFormat::Plain), "FF (base 16)");
    }

    #[test]
    fn test_fit_width_bounds() {
        // 基準幅より短い内容は基準幅のまま
        assert_eq!(fit_width(45.0, 10), 45.0);
        // 長い内容は余白付きで広げる
        assert_eq!(fit_width(45.0, 60), 62.0);
        // 上限を超えない
        assert_eq!(fit_width(45.0, 500), MAX_COLUMN_WIDTH);
    }

    #[test]
    fn test_build_workbook_succeeds() {
        let config = ConversionConfig::default();
        let mut workbook = build_workbook(&sample_results(), &config).unwrap();
        let buffer = workbook.save_to_buffer().unwrap();
        assert!(!buffer.is_empty());
        // xlsx は zip コンテナなので PK で始まる
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn test_build_workbook_empty_results() {
        let config = ConversionConfig::default();
        let mut workbook = build_workbook(&[], &config).unwrap();
        assert!(!workbook.save_to_buffer().unwrap().is_empty());
    }
}
