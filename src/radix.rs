//! 基数変換の数値コア
//!
//! 文字列と `i64` の相互変換、および桁↔ビット列の固定対応表を提供する。
//! 筆算記録 ([`crate::steps`]) と LaTeX 組版 ([`crate::latex`]) の両方が
//! このモジュールの桁解釈に依存する。

use crate::api::Base;
use crate::error::RadixStepsError;

/// 1文字を桁値に変換する。基数の範囲外なら `None`。
///
/// 16進の英字は大文字小文字を区別しない。
pub(crate) fn digit_value(c: char, radix: u32) -> Option<i64> {
    c.to_digit(radix).map(|d| d as i64)
}

/// 桁値 (0..=15) を表示用の文字に変換する。10以上は大文字英字。
pub(crate) fn digit_symbol(value: i64) -> char {
    debug_assert!((0..16).contains(&value));
    match value {
        0..=9 => (b'0' + value as u8) as char,
        _ => (b'A' + (value - 10) as u8) as char,
    }
}

/// 指定基数の文字列を `i64` に変換する
///
/// # 引数
///
/// * `value` - 桁文字列 (符号なし)
/// * `base` - 入力の基数
///
/// # 戻り値
///
/// 解析した値。範囲外の桁は `InvalidDigit`、`i64` を超える値は
/// `Overflow` となる。
pub fn parse_value(value: &str, base: Base) -> Result<i64, RadixStepsError> {
    let radix = base.radix().ok_or(RadixStepsError::UnsupportedRoute {
        from: base,
        to: base,
    })?;
    if value.is_empty() {
        return Err(RadixStepsError::InvalidDigit {
            value: value.to_string(),
            base,
        });
    }

    let mut total: i64 = 0;
    for c in value.chars() {
        let digit = digit_value(c, radix).ok_or_else(|| RadixStepsError::InvalidDigit {
            value: value.to_string(),
            base,
        })?;
        total = total
            .checked_mul(radix as i64)
            .and_then(|t| t.checked_add(digit))
            .ok_or_else(|| RadixStepsError::Overflow(value.to_string()))?;
    }
    Ok(total)
}

/// 非負の `i64` を指定基数の文字列に変換する。16進は大文字。
pub(crate) fn format_value(mut n: i64, radix: u32) -> String {
    debug_assert!(n >= 0);
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(digit_symbol(n % radix as i64));
        n /= radix as i64;
    }
    digits.iter().rev().collect()
}

/// 基数変換 (筆算記録なし)
///
/// # 使用例
///
/// ```
/// use radixsteps::{convert, Base};
///
/// assert_eq!(convert("255", Base::Decimal, Base::Hexadecimal).unwrap(), "FF");
/// assert_eq!(convert("FF", Base::Hexadecimal, Base::Binary).unwrap(), "11111111");
/// ```
pub fn convert(value: &str, from: Base, to: Base) -> Result<String, RadixStepsError> {
    if !from.is_numeric() || !to.is_numeric() {
        return Err(RadixStepsError::UnsupportedRoute { from, to });
    }
    let n = parse_value(value, from)?;
    // to.radix() は数値基数の場合は必ず Some
    Ok(format_value(n, to.radix().unwrap_or(10)))
}

/// 16進1桁に対応する4ビット列
pub(crate) fn hex_digit_bits(value: i64) -> &'static str {
    const TABLE: [&str; 16] = [
        "0000", "0001", "0010", "0011", "0100", "0101", "0110", "0111", "1000", "1001", "1010",
        "1011", "1100", "1101", "1110", "1111",
    ];
    TABLE[value as usize]
}

/// 8進1桁に対応する3ビット列
pub(crate) fn octal_digit_bits(value: i64) -> &'static str {
    const TABLE: [&str; 8] = ["000", "001", "010", "011", "100", "101", "110", "111"];
    TABLE[value as usize]
}

/// 連結したビット列の先頭ゼロを落とす。全桁ゼロなら "0" を返す。
pub(crate) fn strip_leading_zeros(bits: &str) -> &str {
    let trimmed = bits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binary() {
        assert_eq!(parse_value("1010", Base::Binary).unwrap(), 10);
        assert_eq!(parse_value("0", Base::Binary).unwrap(), 0);
        assert_eq!(parse_value("11111111", Base::Binary).unwrap(), 255);
    }

    #[test]
    fn test_parse_hex_case_insensitive() {
        assert_eq!(parse_value("FF", Base::Hexadecimal).unwrap(), 255);
        assert_eq!(parse_value("ff", Base::Hexadecimal).unwrap(), 255);
        assert_eq!(parse_value("1aB", Base::Hexadecimal).unwrap(), 427);
    }

    #[test]
    fn test_parse_invalid_digit() {
        // 基数の範囲外の桁は InvalidDigit になること
        let err = parse_value("102", Base::Binary).unwrap_err();
        assert!(matches!(err, RadixStepsError::InvalidDigit { .. }));
        let err = parse_value("8", Base::Octal).unwrap_err();
        assert!(matches!(err, RadixStepsError::InvalidDigit { .. }));
        let err = parse_value("G", Base::Hexadecimal).unwrap_err();
        assert!(matches!(err, RadixStepsError::InvalidDigit { .. }));
    }

    #[test]
    fn test_parse_empty() {
        let err = parse_value("", Base::Decimal).unwrap_err();
        assert!(matches!(err, RadixStepsError::InvalidDigit { .. }));
    }

    #[test]
    fn test_parse_overflow() {
        // i64::MAX = 7FFFFFFFFFFFFFFF。1桁超えると Overflow
        assert_eq!(
            parse_value("7FFFFFFFFFFFFFFF", Base::Hexadecimal).unwrap(),
            i64::MAX
        );
        let err = parse_value("8000000000000000", Base::Hexadecimal).unwrap_err();
        assert!(matches!(err, RadixStepsError::Overflow(_)));
        let err = parse_value("9223372036854775808", Base::Decimal).unwrap_err();
        assert!(matches!(err, RadixStepsError::Overflow(_)));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0, 2), "0");
        assert_eq!(format_value(42, 2), "101010");
        assert_eq!(format_value(255, 16), "FF");
        assert_eq!(format_value(15, 8), "17");
    }

    #[test]
    fn test_convert_routes() {
        assert_eq!(convert("1010", Base::Binary, Base::Decimal).unwrap(), "10");
        assert_eq!(convert("42", Base::Decimal, Base::Binary).unwrap(), "101010");
        assert_eq!(convert("17", Base::Octal, Base::Hexadecimal).unwrap(), "F");
        assert_eq!(convert("FF", Base::Hexadecimal, Base::Octal).unwrap(), "377");
    }

    #[test]
    fn test_convert_ascii_unsupported() {
        let err = convert("A", Base::Ascii, Base::Binary).unwrap_err();
        assert!(matches!(err, RadixStepsError::UnsupportedRoute { .. }));
        let err = convert("65", Base::Decimal, Base::Ascii).unwrap_err();
        assert!(matches!(err, RadixStepsError::UnsupportedRoute { .. }));
    }

    #[test]
    fn test_digit_symbol() {
        assert_eq!(digit_symbol(0), '0');
        assert_eq!(digit_symbol(9), '9');
        assert_eq!(digit_symbol(10), 'A');
        assert_eq!(digit_symbol(15), 'F');
    }

    #[test]
    fn test_bit_tables() {
        assert_eq!(hex_digit_bits(10), "1010");
        assert_eq!(hex_digit_bits(15), "1111");
        assert_eq!(octal_digit_bits(7), "111");
        assert_eq!(octal_digit_bits(1), "001");
    }

    #[test]
    fn test_strip_leading_zeros() {
        assert_eq!(strip_leading_zeros("001111"), "1111");
        assert_eq!(strip_leading_zeros("000"), "0");
        assert_eq!(strip_leading_zeros("101"), "101");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// format→parse の往復が恒等になること
            #[test]
            fn prop_format_parse_roundtrip(n in 0i64..=i64::MAX, base in prop_oneof![
                Just(Base::Binary),
                Just(Base::Octal),
                Just(Base::Decimal),
                Just(Base::Hexadecimal),
            ]) {
                let radix = base.radix().unwrap();
                let text = format_value(n, radix);
                prop_assert_eq!(parse_value(&text, base).unwrap(), n);
            }

            /// 任意の数値基数間の変換が値を保存すること
            #[test]
            fn prop_convert_preserves_value(n in 0i64..=1_000_000_000i64) {
                let decimal = n.to_string();
                let hex = convert(&decimal, Base::Decimal, Base::Hexadecimal).unwrap();
                let binary = convert(&hex, Base::Hexadecimal, Base::Binary).unwrap();
                let back = convert(&binary, Base::Binary, Base::Decimal).unwrap();
                prop_assert_eq!(back, decimal);
            }
        }
    }
}
