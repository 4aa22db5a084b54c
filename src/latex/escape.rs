//! 汎用行のLaTeX変換と予約語の退避
//!
//! 構造化レンダラが扱わない平文行を記号置換でLaTeXに変換する。
//! 置換対象の文字 (`x` など) を含む英単語は、変換の前に一時的な
//! 偽装表記へ退避し、変換後に復元する。

use once_cell::sync::Lazy;
use regex::Regex;

/// 退避対象の語と偽装表記の対応表
///
/// 偽装表記は置換規則のどれにも一致しない文字列であること。
const GUARD_WORDS: &[(&str, &str)] = &[("hexadecimal", "he--adecimal")];

/// 数値同士の乗算表記 ("8 x 16" / "8X16")
static TIMES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*[xX]\s*(\d+)").expect("valid times pattern"));

/// 予約語を偽装表記へ退避する
pub(crate) fn disguise(text: &str) -> String {
    let mut out = text.to_string();
    for (word, mask) in GUARD_WORDS {
        out = out.replace(word, mask);
    }
    out
}

/// 偽装表記を元の語へ復元する
pub(crate) fn restore(text: &str) -> String {
    let mut out = text.to_string();
    for (word, mask) in GUARD_WORDS {
        out = out.replace(mask, word);
    }
    out
}

/// 平文1行をLaTeX表記へ変換する
///
/// すでにバックスラッシュを含む行はLaTeX済みとみなし、
/// 復元のみ行ってそのまま返す。
pub(crate) fn escape_line(line: &str) -> String {
    let masked = disguise(line);
    if masked.contains('\\') {
        return restore(&masked);
    }

    // 1. 比較演算子と省略記号
    let mut out = masked.replace("<=", "\\leq");
    out = out.replace(">=", "\\geq");
    out = out.replace('<', "\\lt");
    out = out.replace('>', "\\gt");
    out = out.replace("...", "\\dots");
    // 2. 乗算記号
    out = TIMES_RE.replace_all(&out, "${1} \\times ${2}").into_owned();
    // 3. 空白は改行不可スペースに置き換える
    out = out.replace(' ', "~");

    restore(&out)
}
