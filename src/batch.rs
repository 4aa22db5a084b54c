//! バッチ処理
//!
//! `<値> <変換元> <変換先>` 形式の要求行を読み込み、並列に変換する。
//! 解析できない行や失敗した変換は警告ログを出して読み飛ばし、
//! 残りの処理を続行する。結果の順序は入力順を保つ。

use std::io::BufRead;
use std::str::FromStr;

use rayon::prelude::*;

use crate::api::Base;
use crate::error::RadixStepsError;
use crate::steps::{self, ConversionResult};

/// 変換先の指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// 単一の基数
    Base(Base),
    /// 変換元を除く全数値基数
    All,
}

/// バッチの1要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub value: String,
    pub from: Base,
    pub to: Target,
}

impl ConversionRequest {
    /// 具体的な (値, 変換元, 変換先) の組に展開する
    ///
    /// `All` は変換元と ASCII を除いた数値基数すべてに展開される。
    pub fn expand(&self) -> Vec<(String, Base, Base)> {
        match self.to {
            Target::Base(to) => vec![(self.value.clone(), self.from, to)],
            Target::All => Base::numeric_bases()
                .into_iter()
                .filter(|b| *b != self.from)
                .map(|b| (self.value.clone(), self.from, b))
                .collect(),
        }
    }
}

/// 1行を要求に解析する
///
/// 空行と `#` で始まるコメント行は `Ok(None)`。フィールド数が
/// 3でない行は `MalformedRequest` となる。
pub fn parse_request_line(line: &str) -> Result<Option<ConversionRequest>, RadixStepsError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(RadixStepsError::MalformedRequest(format!(
            "expected '<value> <from> <to>', got '{}'",
            trimmed
        )));
    }
    let from = Base::from_str(fields[1])?;
    let to = if fields[2].eq_ignore_ascii_case("all") {
        Target::All
    } else {
        Target::Base(Base::from_str(fields[2])?)
    };
    Ok(Some(ConversionRequest {
        value: fields[0].to_string(),
        from,
        to,
    }))
}

/// リーダーから要求を読み込む
///
/// IOエラーは即座に返す。解析エラーは行番号付きで警告して
/// 読み飛ばす。
pub fn read_requests<R: BufRead>(reader: R) -> Result<Vec<ConversionRequest>, RadixStepsError> {
    let mut requests = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_request_line(&line) {
            Ok(Some(request)) => requests.push(request),
            Ok(None) => {}
            Err(err) => log::warn!("skipping request at line {}: {}", idx + 1, err),
        }
    }
    Ok(requests)
}

/// 要求を並列に処理する
///
/// 展開後の各変換を rayon で分散し、インデックスで整列して
/// 入力順を復元する。失敗した変換は警告して結果から除く。
pub fn process_requests(requests: &[ConversionRequest]) -> Vec<ConversionResult> {
    let jobs: Vec<(String, Base, Base)> = requests.iter().flat_map(|r| r.expand()).collect();

    let mut indexed: Vec<(usize, ConversionResult)> = jobs
        .par_iter()
        .enumerate()
        .filter_map(|(i, (value, from, to))| {
            match steps::record_steps(value, *from, *to) {
                Ok(result) => Some((i, result)),
                Err(err) => {
                    log::warn!(
                        "skipping conversion of '{}' from {} to {}: {}",
                        value,
                        from,
                        to,
                        err
                    );
                    None
                }
            }
        })
        .collect();

    // 並列実行で乱れた順序をインデックスで復元する
    indexed.sort_by_key(|(i, _)| *i);
    indexed.into_iter().map(|(_, result)| result).collect()
}
