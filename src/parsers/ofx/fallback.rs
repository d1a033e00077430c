use std::sync::LazyLock;

use regex::Regex;

use super::dto::{RawFitId, RawTransaction};
use crate::normalize::NO_DESCRIPTION;

static BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<STMTTRN>(.*?)</STMTTRN>").expect("block pattern"));
static TRN_TYPE: LazyLock<Regex> = LazyLock::new(|| field_pattern("TRNTYPE"));
static DT_POSTED: LazyLock<Regex> = LazyLock::new(|| field_pattern("DTPOSTED"));
static AMOUNT: LazyLock<Regex> = LazyLock::new(|| field_pattern("TRNAMT"));
static FITID: LazyLock<Regex> = LazyLock::new(|| field_pattern("FITID"));
static MEMO: LazyLock<Regex> = LazyLock::new(|| field_pattern("MEMO"));

fn field_pattern(name: &str) -> Regex {
    Regex::new(&format!(r"(?i)<{name}>\s*([^<]+)")).expect("field pattern")
}

fn field(pattern: &Regex, block: &str) -> Option<String> {
    pattern
        .captures(block)
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Last-resort transaction discovery for documents whose overall structure
/// is broken but whose transaction blocks are still locatable as flat text.
///
/// Each block is matched independently; a block missing its amount, posted
/// date or FITID is not salvageable and gets dropped. `None` distinguishes
/// "nothing extractable" from a legitimately empty result.
pub fn extract_by_pattern(sanitized: &str) -> Option<Vec<RawTransaction>> {
    let mut found = Vec::new();

    for captures in BLOCK.captures_iter(sanitized) {
        let block = &captures[1];

        let (Some(amount), Some(dt_posted), Some(fitid)) = (
            field(&AMOUNT, block),
            field(&DT_POSTED, block),
            field(&FITID, block),
        ) else {
            continue;
        };

        found.push(RawTransaction {
            trn_type: field(&TRN_TYPE, block),
            dt_posted: Some(dt_posted),
            amount: Some(amount),
            fitid: Some(RawFitId::Scalar(fitid)),
            memo: Some(field(&MEMO, block).unwrap_or_else(|| NO_DESCRIPTION.to_string())),
        });
    }

    if found.is_empty() { None } else { Some(found) }
}
