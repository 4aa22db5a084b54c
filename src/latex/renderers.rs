//! ルート別のLaTeXレンダラ
//!
//! 各レンダラは筆算記録の構造化フィールドから導出文を組み立てる。
//! 期待する構造が記録に無い場合は汎用の行変換にフォールバックする。

use crate::api::Base;
use crate::radix;
use crate::steps::{ConversionResult, Step};

use super::ordinal_label;

/// 位取りの1桁分 (記録からの抽出ビュー)
struct DigitTerm {
    symbol: char,
    value: i64,
    position: usize,
    weight: i64,
    product: i64,
}

/// 割り算法の1回分 (記録からの抽出ビュー)
struct DivisionRow {
    dividend: i64,
    divisor: i64,
    quotient: i64,
    remainder: i64,
}

fn digit_terms(result: &ConversionResult) -> Vec<DigitTerm> {
    result
        .steps
        .iter()
        .filter_map(|step| match step {
            Step::Digit {
                symbol,
                value,
                position,
                weight,
                product,
                ..
            } => Some(DigitTerm {
                symbol: *symbol,
                value: *value,
                position: *position,
                weight: *weight,
                product: *product,
            }),
            _ => None,
        })
        .collect()
}

fn division_rows(result: &ConversionResult) -> Vec<DivisionRow> {
    result
        .steps
        .iter()
        .filter_map(|step| match step {
            Step::Division {
                dividend,
                divisor,
                quotient,
                remainder,
            } => Some(DivisionRow {
                dividend: *dividend,
                divisor: *divisor,
                quotient: *quotient,
                remainder: *remainder,
            }),
            _ => None,
        })
        .collect()
}

fn sum_total(result: &ConversionResult) -> Option<i64> {
    result.steps.iter().find_map(|step| match step {
        Step::Sum { total } => Some(*total),
        _ => None,
    })
}

/// 基数付きの下付き表記 ("1010_{2}")
fn subscripted(text: &str, base: Base) -> String {
    format!("{}_{{{}}}", text, base.subscript())
}

fn title_word(base: Base) -> &'static str {
    match base {
        Base::Binary => "Binary",
        Base::Octal => "Octal",
        Base::Decimal => "Decimal",
        Base::Hexadecimal => "Hexadecimal",
        Base::Ascii => "ASCII",
    }
}

/// 結論ブロック。全レンダラが末尾に出力する。
fn final_answer(result: &ConversionResult) -> String {
    format!(
        "\\begin{{center}}\n\\textbf{{Final Answer:}} \\({} = {}\\)\n\\end{{center}}",
        subscripted(&result.input, result.input_base),
        subscripted(&result.output, result.output_base)
    )
}

/// 非ゼロの積を "+" で連結した合計式 ("8 + 2")
fn sum_expr(terms: &[DigitTerm]) -> String {
    let parts: Vec<String> = terms
        .iter()
        .filter(|t| t.product != 0)
        .map(|t| t.product.to_string())
        .collect();
    if parts.is_empty() {
        "0".to_string()
    } else {
        parts.join(" + ")
    }
}

/// 入力に現れた英字桁の対応表 ("\(A = 10\), \(F = 15\)")。英字が無ければ `None`。
fn letter_legend(terms: &[DigitTerm]) -> Option<String> {
    let mut letters: Vec<(char, i64)> = terms
        .iter()
        .filter(|t| t.symbol.is_ascii_alphabetic())
        .map(|t| (t.symbol, t.value))
        .collect();
    letters.sort();
    letters.dedup();
    if letters.is_empty() {
        return None;
    }
    Some(
        letters
            .iter()
            .map(|(s, v)| format!("\\({} = {}\\)", s, v))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// 余りに現れた10以上の値の対応表 ("\(15 = F\)")。無ければ `None`。
fn remainder_legend(rows: &[DivisionRow]) -> Option<String> {
    let mut values: Vec<i64> = rows
        .iter()
        .map(|r| r.remainder)
        .filter(|r| *r >= 10)
        .collect();
    values.sort_unstable();
    values.dedup();
    if values.is_empty() {
        return None;
    }
    Some(
        values
            .iter()
            .map(|v| format!("\\({} = {}\\)", v, radix::digit_symbol(*v)))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

fn fallback(result: &ConversionResult) -> String {
    super::transcribe_plain_lines(&result.lines())
}

/// 2進→10進: 位の重みの列挙
pub(super) fn binary_to_decimal(result: &ConversionResult) -> String {
    let terms = digit_terms(result);
    let total = match sum_total(result) {
        Some(t) if !terms.is_empty() => t,
        _ => return fallback(result),
    };

    let mut out = String::from("\\begin{enumerate}\n");
    out.push_str(
        "\\item Method: To convert a binary number to its decimal equivalent, assign each digit \
         a positional weight, where the rightmost digit has a weight of \\(2^{0}\\) and each digit \
         to the left doubles it, up to \\(2^{n-1}\\) for the leftmost digit of an \\(n\\)-digit \
         number. Multiply each digit by its weight and sum the products:\n",
    );
    out.push_str(
        "\\begin{center}\n\\(\\text{Decimal} = d_1 \\times 2^{n-1} + d_2 \\times 2^{n-2} + \
         \\dots + d_n \\times 2^{0}\\)\n\\end{center}\n",
    );
    out.push_str("\\item Calculate each part:\n\\begin{itemize}\n");
    for term in &terms {
        out.push_str(&format!(
            "\\item ${} \\times 2^{{{}}} = {} \\times {} = {}$\n",
            term.value, term.position, term.value, term.weight, term.product
        ));
    }
    out.push_str("\\end{itemize}\n");
    out.push_str(&format!(
        "\\item Sum the products: ${} = {}$\n",
        sum_expr(&terms),
        total
    ));
    out.push_str(&final_answer(result));
    out.push_str("\n\\end{enumerate}");
    out
}

/// 8進→10進: 展開式と序数付きの項の列挙
pub(super) fn octal_to_decimal(result: &ConversionResult) -> String {
    positional_with_ordinals(result, 8, None)
}

/// 16進→10進: 8進と同形だが英字対応表が加わる
pub(super) fn hexadecimal_to_decimal(result: &ConversionResult) -> String {
    let legend = letter_legend(&digit_terms(result));
    positional_with_ordinals(result, 16, legend)
}

fn positional_with_ordinals(
    result: &ConversionResult,
    radix_value: u32,
    legend: Option<String>,
) -> String {
    let terms = digit_terms(result);
    let total = match sum_total(result) {
        Some(t) if !terms.is_empty() => t,
        _ => return fallback(result),
    };
    let n = terms.len();
    let word = result.input_base.word();

    let mut out = String::from("\\begin{enumerate}\n");
    out.push_str(&format!(
        "\\item Apply the formula: $\\text{{Decimal}} = d_1 \\times {r}^{{n-1}} + d_2 \\times \
         {r}^{{n-2}} + \\dots + d_n \\times {r}^{{0}}$, where $d_i$ represents each digit of the \
         {word} number, and $n$ is the number of digits.\n",
        r = radix_value,
        word = word
    ));
    if let Some(legend) = legend {
        out.push_str(&format!(
            "\\item In hexadecimal, digits range from 0 to 15; the letters A--F stand for the \
             values 10--15. Letters used here: {}.\n",
            legend
        ));
    }
    out.push_str(&format!(
        "\\item Calculate each term for the {} number ${}$ ({} digits, so $n={}$):\n",
        word, result.input, n, n
    ));
    out.push_str("\\begin{itemize}\n");

    // 公式を桁数で展開した形を先に示す
    let symbolic: Vec<String> = (1..=n)
        .map(|i| format!("d_{{{}}} \\times {}^{{{}-{}}}", i, radix_value, n, i))
        .collect();
    let resolved: Vec<String> = (1..=n)
        .map(|i| format!("d_{{{}}} \\times {}^{{{}}}", i, radix_value, n - i))
        .collect();
    out.push_str(&format!(
        "\\item The formula becomes: $\\text{{Decimal}} = {} = {}$.\n",
        symbolic.join(" + "),
        resolved.join(" + ")
    ));

    for (i, term) in terms.iter().enumerate() {
        let digit_text = if term.symbol.is_ascii_alphabetic() {
            format!("d_{{{}}} = {} = {}", i + 1, term.symbol, term.value)
        } else {
            format!("d_{{{}}} = {}", i + 1, term.value)
        };
        out.push_str(&format!(
            "\\item {} digit: ${}$, position {} (from left), so compute ${} \\times \
             {}^{{{}}}$:\n\\[\n{} \\times {} = {}\n\\]\n",
            ordinal_label(i + 1),
            digit_text,
            i + 1,
            term.value,
            radix_value,
            term.position,
            term.value,
            term.weight,
            term.product
        ));
    }
    out.push_str(&format!(
        "\\item Sum the results: ${} = {}$.\n",
        sum_expr(&terms),
        total
    ));
    out.push_str("\\end{itemize}\n");
    out.push_str(&final_answer(result));
    out.push_str("\n\\end{enumerate}");
    out
}

/// 10進→2進: 割り算の列挙
pub(super) fn decimal_to_binary(result: &ConversionResult) -> String {
    let rows = division_rows(result);
    if rows.is_empty() {
        return fallback(result);
    }

    let mut out = String::from("\\begin{enumerate}\n");
    out.push_str(
        "\\item Method: Divide continuously by 2, note the remainders, read the result from \
         bottom to top.\n\\begin{itemize}\n",
    );
    for row in &rows {
        out.push_str(&format!(
            "\\item Divide {} by {} = {} remainder {}\n",
            row.dividend, row.divisor, row.quotient, row.remainder
        ));
    }
    out.push_str("\\end{itemize}\n");
    out.push_str(&format!(
        "\\item Read the result from bottom to top. Result: {}\n",
        result.output
    ));
    out.push_str(&final_answer(result));
    out.push_str("\n\\end{enumerate}");
    out
}

/// 10進→8進/16進: 割り算の列挙 (説明を段階に分けた形)
pub(super) fn decimal_by_division(result: &ConversionResult) -> String {
    let rows = division_rows(result);
    if rows.is_empty() {
        return fallback(result);
    }
    let radix_value = match result.output_base.radix() {
        Some(r) => r,
        None => return fallback(result),
    };
    let word = result.output_base.word();

    let mut out = String::from("\\begin{enumerate}\n");
    out.push_str(&format!(
        "\\item Understand the Method: Divide the decimal number by {} repeatedly, record the \
         remainders, and read the remainders from bottom to top to form the {} number. \\\\\n",
        radix_value, word
    ));
    if result.output_base == Base::Hexadecimal {
        match remainder_legend(&rows) {
            Some(legend) => out.push_str(&format!(
                "\\textbf{{Note}}: Hexadecimal digits range from 0 to 15, where remainders above \
                 9 are written as letters: {}.\n",
                legend
            )),
            None => {
                out.push_str("\\textbf{Note}: Hexadecimal digits range from 0 to 15.\n");
            }
        }
    } else {
        out.push_str("\\textbf{Note}: Octal digits range from 0 to 7.\n");
    }

    out.push_str("\\item Perform the Division\n\\begin{itemize}\n");
    for row in &rows {
        if row.remainder >= 10 {
            out.push_str(&format!(
                "\\item Divide {} by {} = {} remainder {} ({})\n",
                row.dividend,
                row.divisor,
                row.quotient,
                row.remainder,
                radix::digit_symbol(row.remainder)
            ));
        } else {
            out.push_str(&format!(
                "\\item Divide {} by {} = {} remainder {}\n",
                row.dividend, row.divisor, row.quotient, row.remainder
            ));
        }
    }
    out.push_str("\\end{itemize}\n");

    let reversed: Vec<String> = rows
        .iter()
        .rev()
        .map(|r| format!("\\({}\\)", radix::digit_symbol(r.remainder)))
        .collect();
    out.push_str(&format!(
        "\\item Read the Result \\\\\nReading the remainders from bottom to top: {}. \\\\\nThus, \
         the {} number is \\({}\\).\n",
        reversed.join(", "),
        word,
        subscripted(&result.output, result.output_base)
    ));
    out.push_str(&final_answer(result));
    out.push_str("\n\\end{enumerate}");
    out
}

/// 10進経由の2段階ルート (2進→8進、8進→16進、16進→8進)
pub(super) fn two_stage_via_decimal(result: &ConversionResult) -> String {
    let terms = digit_terms(result);
    let rows = division_rows(result);
    let total = match sum_total(result) {
        Some(t) if !terms.is_empty() && !rows.is_empty() => t,
        _ => return fallback(result),
    };
    let from = result.input_base;
    let to = result.output_base;
    let (from_radix, to_radix) = match (from.radix(), to.radix()) {
        (Some(f), Some(t)) => (f, t),
        _ => return fallback(result),
    };
    let n = terms.len();
    let decimal_text = total.to_string();

    let mut out = String::from("\\begin{enumerate}\n");

    // 第1段階: 位取り記数法で10進へ
    out.push_str(&format!(
        "\\item Convert {} to Decimal \\\\\nUse the formula:\n\\[\n\\text{{Decimal}} = d_1 \
         \\times {r}^{{n-1}} + d_2 \\times {r}^{{n-2}} + \\dots + d_n \\times \
         {r}^{{0}}\n\\]\nwhere \\(d_i\\) is the \\(i\\)-th digit of the {word} number, and \
         \\(n\\) is the number of digits. \\\\\n",
        title_word(from),
        r = from_radix,
        word = from.word()
    ));
    if from == Base::Hexadecimal {
        if let Some(legend) = letter_legend(&terms) {
            out.push_str(&format!("The letters stand for: {}. \\\\\n", legend));
        }
    }
    out.push_str(&format!(
        "For \\({}\\) (\\(n = {}\\) digits):\n\\begin{{itemize}}\n",
        subscripted(&result.input, from),
        n
    ));
    for (i, term) in terms.iter().enumerate() {
        let digit_text = if term.symbol.is_ascii_alphabetic() {
            format!("d_{{{}}} = {} = {}", i + 1, term.symbol, term.value)
        } else {
            format!("d_{{{}}} = {}", i + 1, term.value)
        };
        out.push_str(&format!(
            "    \\item {} digit (\\({}\\)): \\({v} \\times {r}^{{{n}-{i}}} = {v} \\times \
             {r}^{{{p}}} = {v} \\times {w} = {prod}\\)\n",
            ordinal_label(i + 1),
            digit_text,
            v = term.value,
            r = from_radix,
            n = n,
            i = i + 1,
            p = term.position,
            w = term.weight,
            prod = term.product
        ));
    }
    out.push_str(&format!(
        "    \\item Sum: \\({} = {}\\)\n\\end{{itemize}}\n",
        sum_expr(&terms),
        total
    ));
    out.push_str(&format!(
        "So, \\({} = {}\\).\n",
        subscripted(&result.input, from),
        subscripted(&decimal_text, Base::Decimal)
    ));

    // 第2段階: 割り算法で目的の基数へ
    out.push_str(&format!(
        "\\item Convert Decimal to {} \\\\\nDivide the decimal number by {} repeatedly, record \
         the remainders, and read the remainders from bottom to top. \\\\\n",
        title_word(to),
        to_radix
    ));
    if to == Base::Hexadecimal {
        if let Some(legend) = remainder_legend(&rows) {
            out.push_str(&format!(
                "\\textbf{{Note}}: remainders above 9 are written as letters: {}. \\\\\n",
                legend
            ));
        }
    }
    out.push_str(&format!(
        "For \\({}\\):\n\\begin{{itemize}}\n",
        subscripted(&decimal_text, Base::Decimal)
    ));
    for row in &rows {
        if row.remainder >= 10 {
            out.push_str(&format!(
                "    \\item \\({} \\div {} = {}\\), remainder \\({} = {}\\)\n",
                row.dividend,
                row.divisor,
                row.quotient,
                row.remainder,
                radix::digit_symbol(row.remainder)
            ));
        } else {
            out.push_str(&format!(
                "    \\item \\({} \\div {} = {}\\), remainder \\({}\\)\n",
                row.dividend, row.divisor, row.quotient, row.remainder
            ));
        }
    }
    out.push_str("\\end{itemize}\n");
    out.push_str(&format!(
        "Reading the remainders from bottom to top: \\({}\\).\n",
        subscripted(&result.output, to)
    ));
    out.push_str(&final_answer(result));
    out.push_str("\n\\end{enumerate}");
    out
}

/// 2進→16進: 右端から4ビットごとに区切って対応表で引く
pub(super) fn binary_groups_to_hex(result: &ConversionResult) -> String {
    let value = &result.input;
    if value.is_empty() || !value.chars().all(|c| c == '0' || c == '1') {
        return fallback(result);
    }

    // 左端のグループを先頭ゼロで4ビットに揃える
    let pad = (4 - value.len() % 4) % 4;
    let padded = format!("{}{}", "0".repeat(pad), value);
    let groups: Vec<(String, char)> = padded
        .as_bytes()
        .chunks(4)
        .map(|chunk| {
            let bits: String = chunk.iter().map(|b| *b as char).collect();
            let digit = chunk.iter().fold(0i64, |acc, b| acc * 2 + (b - b'0') as i64);
            (bits, radix::digit_symbol(digit))
        })
        .collect();

    let mut table_rows: Vec<(String, char)> = groups.clone();
    table_rows.sort_by_key(|(_, sym)| *sym);
    table_rows.dedup();

    let mut out = String::from(
        "\\textbf{Method:} Starting from the rightmost bit, split the binary number into groups \
         of 4 bits, padding the leftmost group with leading zeros, then convert each group into \
         its hexadecimal digit using the conversion table and concatenate the digits from left \
         to right.\n",
    );
    out.push_str(
        "\\begin{center}\n\\begin{tabular}{|c|c|} \\hline\n\\text{Binary Group} & \
         \\text{Hexadecimal} \\\\ \\hline\n",
    );
    for (bits, sym) in &table_rows {
        out.push_str(&format!("{} & {} \\\\ \\hline\n", bits, sym));
    }
    out.push_str("\\end{tabular}\n\\end{center}\n");

    let grouped: Vec<String> = groups.iter().map(|(bits, _)| bits.clone()).collect();
    out.push_str(&format!(
        "\\begin{{center}}\n\\({} \\rightarrow {}\\)\n\\end{{center}}\n",
        grouped.join("\\;"),
        subscripted(&result.output, Base::Hexadecimal)
    ));
    out.push_str(&final_answer(result));
    out
}

/// 8進/16進→2進: 桁ごとのビット展開
pub(super) fn digit_expansion_to_binary(result: &ConversionResult) -> String {
    let terms = digit_terms(result);
    if terms.is_empty() {
        return fallback(result);
    }
    let (bits_of, bit_count, digit_header): (fn(i64) -> &'static str, usize, &str) =
        match result.input_base {
            Base::Octal => (radix::octal_digit_bits, 3, "Octal Digit"),
            Base::Hexadecimal => (radix::hex_digit_bits, 4, "Hex Digit"),
            _ => return fallback(result),
        };
    let word = result.input_base.word();

    let mut table_rows: Vec<(char, &str)> = terms
        .iter()
        .map(|t| (t.symbol, bits_of(t.value)))
        .collect();
    table_rows.sort_by_key(|(sym, _)| *sym);
    table_rows.dedup();

    let concatenated: String = terms.iter().map(|t| bits_of(t.value)).collect();
    let trimmed = radix::strip_leading_zeros(&concatenated);

    let mut out = String::from("\\begin{enumerate}\n");
    out.push_str(&format!(
        "\\item Method: Replace each {} digit with its {}-bit binary equivalent using the \
         conversion table, then concatenate the groups from left to right and drop any leading \
         zeros.\n",
        word, bit_count
    ));
    out.push_str(&format!(
        "\\begin{{center}}\n\\begin{{tabular}}{{|c|c|}} \\hline\n\\text{{{}}} & \\text{{Binary \
         Equivalent}} \\\\ \\hline\n",
        digit_header
    ));
    for (sym, bits) in &table_rows {
        out.push_str(&format!("{} & {} \\\\ \\hline\n", sym, bits));
    }
    out.push_str("\\end{tabular}\n\\end{center}\n");

    out.push_str(&format!(
        "\\item For the {} number \\({}\\):\n\\begin{{itemize}}\n",
        word,
        subscripted(&result.input, result.input_base)
    ));
    for (i, term) in terms.iter().enumerate() {
        out.push_str(&format!(
            "    \\item {} digit \\({}\\) = \\({}\\)\n",
            ordinal_label(i + 1),
            term.symbol,
            bits_of(term.value)
        ));
    }
    out.push_str("\\end{itemize}\n");
    if trimmed != concatenated {
        out.push_str(&format!(
            "Concatenating the groups gives \\({}\\); dropping the leading zeros leaves \
             \\({}\\).\n",
            concatenated, trimmed
        ));
    } else {
        out.push_str(&format!(
            "Concatenating the groups gives \\({}\\).\n",
            concatenated
        ));
    }
    out.push_str(&final_answer(result));
    out.push_str("\n\\end{enumerate}");
    out
}
