use super::dto::{RawFitId, RawTransaction};
use super::tree::{OfxTree, parse_tree};

pub const OPEN_MARKER: &str = "<OFX>";
pub const CLOSE_MARKER: &str = "</OFX>";

/// Minimum viability: both document markers must be present. Anything else
/// is not a statement file and gets no fallback attempt.
pub fn is_viable(sanitized: &str) -> bool {
    sanitized.contains(OPEN_MARKER) && sanitized.contains(CLOSE_MARKER)
}

const BANK_PATH: [&str; 4] = ["BANKMSGSRSV1", "STMTTRNRS", "STMTRS", "BANKTRANLIST"];
const CARD_PATH: [&str; 4] = ["CREDITCARDMSGSRSV1", "CCSTMTTRNRS", "CCSTMTRS", "BANKTRANLIST"];

/// Primary extraction path: build the tag tree and walk the fixed path down
/// to the transaction list, bank branch first, credit card branch second.
///
/// `None` means the document looked viable but no transaction list was
/// reachable (or it held no entries) — the caller may still try the pattern
/// extractor. It is a signal, not an error.
pub fn extract_structural(sanitized: &str) -> Option<Vec<RawTransaction>> {
    let tree = parse_tree(sanitized);
    let ofx = tree.child("OFX")?;
    let list = ofx.walk(&BANK_PATH).or_else(|| ofx.walk(&CARD_PATH))?;

    let transactions: Vec<RawTransaction> =
        list.children("STMTTRN").map(raw_from_node).collect();
    if transactions.is_empty() {
        None
    } else {
        Some(transactions)
    }
}

fn raw_from_node(node: &OfxTree) -> RawTransaction {
    RawTransaction {
        trn_type: leaf_text(node, "TRNTYPE"),
        dt_posted: leaf_text(node, "DTPOSTED"),
        amount: leaf_text(node, "TRNAMT"),
        fitid: node.child("FITID").and_then(fitid_from_node),
        memo: leaf_text(node, "MEMO"),
    }
}

fn leaf_text(node: &OfxTree, name: &str) -> Option<String> {
    node.child(name)
        .and_then(OfxTree::leaf_value)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

fn fitid_from_node(node: &OfxTree) -> Option<RawFitId> {
    match node {
        OfxTree::Leaf(value) => {
            let value = value.trim();
            if value.is_empty() {
                None
            } else {
                Some(RawFitId::Scalar(value.to_string()))
            }
        }
        OfxTree::Node(children) => {
            let parts: Vec<String> = children
                .iter()
                .filter_map(|(_, child)| child.leaf_value())
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(RawFitId::Composite(parts))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::sanitize;
    use rstest::rstest;

    const SAMPLE_SGML: &str = "OFXHEADER:100 DATA:OFXSGML VERSION:102 <OFX> \
        <BANKMSGSRSV1> <STMTTRNRS> <TRNUID>1 <STMTRS> <CURDEF>BRL \
        <BANKTRANLIST> <DTSTART>20251201 <DTEND>20251231 \
        <STMTTRN> <TRNTYPE>DEBIT <DTPOSTED>20251226120000 <TRNAMT>-50.00 \
        <FITID>202512260 <MEMO>Morning coffee </STMTTRN> \
        <STMTTRN> <TRNTYPE>CREDIT <DTPOSTED>20251225000000 <TRNAMT>1500.00 \
        <FITID>202512250 </STMTTRN> \
        </BANKTRANLIST> </STMTRS> </STMTTRNRS> </BANKMSGSRSV1> </OFX>";

    const SAMPLE_CARD: &str = "<OFX> <CREDITCARDMSGSRSV1> <CCSTMTTRNRS> <CCSTMTRS> \
        <BANKTRANLIST> <STMTTRN> <TRNTYPE>CREDIT <DTPOSTED>20251225120000 \
        <TRNAMT>1500.00 <FITID>202512250 </STMTTRN> </BANKTRANLIST> \
        </CCSTMTRS> </CCSTMTTRNRS> </CREDITCARDMSGSRSV1> </OFX>";

    #[rstest]
    #[case("<OFX>stuff</OFX>", true)]
    #[case("OFXHEADER:100 <OFX> <A>1 </OFX>", true)]
    #[case("<OFX> no closer", false)]
    #[case("no opener </OFX>", false)]
    #[case("plain text, clearly not a statement", false)]
    #[case("", false)]
    fn test_is_viable(#[case] content: &str, #[case] expected: bool) {
        assert_eq!(is_viable(content), expected);
    }

    #[test]
    fn test_extract_bank_statement() {
        let found = extract_structural(SAMPLE_SGML).unwrap();
        assert_eq!(found.len(), 2);

        assert_eq!(found[0].trn_type.as_deref(), Some("DEBIT"));
        assert_eq!(found[0].dt_posted.as_deref(), Some("20251226120000"));
        assert_eq!(found[0].amount.as_deref(), Some("-50.00"));
        assert_eq!(
            found[0].fitid,
            Some(RawFitId::Scalar("202512260".to_string()))
        );
        assert_eq!(found[0].memo.as_deref(), Some("Morning coffee"));

        assert_eq!(found[1].trn_type.as_deref(), Some("CREDIT"));
        assert_eq!(found[1].memo, None);
    }

    #[test]
    fn test_extract_credit_card_statement() {
        let found = extract_structural(SAMPLE_CARD).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].amount.as_deref(), Some("1500.00"));
    }

    #[test]
    fn test_extract_after_sanitize_of_multiline_input() {
        let raw = SAMPLE_SGML.replace(' ', "\r\n");
        let found = extract_structural(&sanitize(&raw)).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_extract_composite_fitid() {
        let content = "<OFX> <BANKMSGSRSV1> <STMTTRNRS> <STMTRS> <BANKTRANLIST> \
            <STMTTRN> <TRNAMT>-10.00 \
            <FITID> <DTPOSTED>20251226 <CHKNUM>077 <REFNUM>000123 </FITID> \
            </STMTTRN> </BANKTRANLIST> </STMTRS> </STMTTRNRS> </BANKMSGSRSV1> </OFX>";
        let found = extract_structural(content).unwrap();
        assert_eq!(
            found[0].fitid,
            Some(RawFitId::Composite(vec![
                "20251226".to_string(),
                "077".to_string(),
                "000123".to_string(),
            ]))
        );
        assert_eq!(found[0].fitid.as_ref().unwrap().flatten(), "20251226077000123");
    }

    #[test]
    fn test_missing_intermediate_node_yields_none() {
        let content = "<OFX> <BANKMSGSRSV1> <SOMETHINGELSE>1 </BANKMSGSRSV1> </OFX>";
        assert!(extract_structural(content).is_none());
    }

    #[test]
    fn test_empty_transaction_list_yields_none() {
        let content = "<OFX> <BANKMSGSRSV1> <STMTTRNRS> <STMTRS> <BANKTRANLIST> \
            <DTSTART>20251201 <DTEND>20251231 </BANKTRANLIST> </STMTRS> \
            </STMTTRNRS> </BANKMSGSRSV1> </OFX>";
        assert!(extract_structural(content).is_none());
    }

    #[test]
    fn test_partial_node_fields_stay_optional() {
        let content = "<OFX> <BANKMSGSRSV1> <STMTTRNRS> <STMTRS> <BANKTRANLIST> \
            <STMTTRN> <TRNAMT>-10.00 </STMTTRN> </BANKTRANLIST> </STMTRS> \
            </STMTTRNRS> </BANKMSGSRSV1> </OFX>";
        let found = extract_structural(content).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].amount.as_deref(), Some("-10.00"));
        assert_eq!(found[0].fitid, None);
        assert_eq!(found[0].dt_posted, None);
    }
}
