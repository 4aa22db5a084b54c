//! 筆算の記録処理
//!
//! 位取り記数法 (→10進) と割り算法 (10進→) の2方式、および
//! 10進を経由する複合ルートを記録する。

use crate::api::Base;
use crate::error::RadixStepsError;
use crate::radix;

use super::{ConversionResult, Step};

/// 16進英字の対応表 (→10進方向)
const HEX_LETTER_NOTE: &str = "A=10, B=11, C=12, D=13, E=14, F=15";
/// 16進英字の対応表 (10進→方向)
const HEX_VALUE_NOTE: &str = "10=A, 11=B, 12=C, 13=D, 14=E, 15=F";

/// 位取り記数法で10進へ変換し、桁ごとの積を記録する
pub(super) fn to_decimal(value: &str, from: Base) -> Result<ConversionResult, RadixStepsError> {
    let radix = from.radix().ok_or(RadixStepsError::UnsupportedRoute {
        from,
        to: Base::Decimal,
    })?;
    if value.is_empty() {
        return Err(RadixStepsError::InvalidDigit {
            value: value.to_string(),
            base: from,
        });
    }

    let mut steps = Vec::new();
    steps.push(Step::Header(format!(
        "Converting {} number {} to decimal:",
        from.word(),
        value
    )));
    steps.push(Step::Formula(format!(
        "Decimal = d_1 x {r}^(n-1) + d_2 x {r}^(n-2) + ... + d_n x {r}^0",
        r = radix
    )));
    if from == Base::Hexadecimal {
        steps.push(Step::Note(HEX_LETTER_NOTE.to_string()));
    }
    steps.push(Step::ForValue(format!("For {}:", value)));

    // 1. 左端の桁から順に、位の重みと積を記録する
    let digits: Vec<char> = value.chars().collect();
    let len = digits.len();
    let mut total: i64 = 0;
    for (i, &c) in digits.iter().enumerate() {
        let digit = radix::digit_value(c, radix).ok_or_else(|| RadixStepsError::InvalidDigit {
            value: value.to_string(),
            base: from,
        })?;
        let position = len - 1 - i;
        let weight = (radix as i64)
            .checked_pow(position as u32)
            .ok_or_else(|| RadixStepsError::Overflow(value.to_string()))?;
        let product = digit
            .checked_mul(weight)
            .ok_or_else(|| RadixStepsError::Overflow(value.to_string()))?;
        total = total
            .checked_add(product)
            .ok_or_else(|| RadixStepsError::Overflow(value.to_string()))?;
        steps.push(Step::Digit {
            symbol: c.to_ascii_uppercase(),
            value: digit,
            position,
            radix,
            weight,
            product,
        });
    }

    // 2. 合計が10進の結果
    steps.push(Step::Sum { total });

    Ok(ConversionResult {
        input: value.to_string(),
        input_base: from,
        output: total.to_string(),
        output_base: Base::Decimal,
        steps,
    })
}

/// 割り算法で10進から変換し、各回の商と余りを記録する
pub(super) fn from_decimal(value: &str, to: Base) -> Result<ConversionResult, RadixStepsError> {
    let radix = to.radix().ok_or(RadixStepsError::UnsupportedRoute {
        from: Base::Decimal,
        to,
    })?;
    let n = radix::parse_value(value, Base::Decimal)?;

    let mut steps = Vec::new();
    steps.push(Step::Header(format!(
        "Converting decimal number {} to {}:",
        value,
        to.word()
    )));
    steps.push(Step::Method(format!(
        "Divide continuously by {}, note the remainders, read the result from bottom to top.",
        radix
    )));
    if to == Base::Hexadecimal {
        steps.push(Step::Note(HEX_VALUE_NOTE.to_string()));
    }

    // 余りは生成順に記録し、結果は最後の余りから逆順に読む。
    // 入力が 0 のときは割り算を行わず結果をそのまま 0 とする。
    let mut current = n;
    while current > 0 {
        let quotient = current / radix as i64;
        let remainder = current % radix as i64;
        steps.push(Step::Division {
            dividend: current,
            divisor: radix as i64,
            quotient,
            remainder,
        });
        current = quotient;
    }

    let result = radix::format_value(n, radix);
    steps.push(Step::ResultText(format!("Result: {}", result)));

    Ok(ConversionResult {
        input: value.to_string(),
        input_base: Base::Decimal,
        output: result,
        output_base: to,
        steps,
    })
}

/// 10進を経由する複合ルート。両段階の記録を段階見出し付きで連結する。
pub(super) fn via_decimal(
    value: &str,
    from: Base,
    to: Base,
) -> Result<ConversionResult, RadixStepsError> {
    let first = to_decimal(value, from)?;
    let second = from_decimal(&first.output, to)?;

    let mut steps = Vec::new();
    steps.push(Step::Header(format!(
        "Converting {} number {} to {}:",
        from.word(),
        value,
        to.word()
    )));
    steps.push(Step::Stage {
        index: 1,
        label: format!("Convert {} to decimal:", from.word()),
    });
    steps.extend(first.steps);
    steps.push(Step::Stage {
        index: 2,
        label: format!("Convert decimal to {}:", to.word()),
    });
    steps.extend(second.steps);

    Ok(ConversionResult {
        input: value.to_string(),
        input_base: from,
        output: second.output,
        output_base: to,
        steps,
    })
}
