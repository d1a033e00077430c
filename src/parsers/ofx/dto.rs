/// FITID as found in the file. Most banks emit a plain scalar; a few split
/// the identifier across nested components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFitId {
    Scalar(String),
    Composite(Vec<String>),
}

impl RawFitId {
    /// One stable string regardless of the source shape: composite parts
    /// are concatenated in document order.
    pub fn flatten(&self) -> String {
        match self {
            RawFitId::Scalar(value) => value.clone(),
            RawFitId::Composite(parts) => parts.concat(),
        }
    }
}

/// Transaction node as lifted from the file, before any normalization.
/// Lives only for the duration of a single ingestion call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTransaction {
    pub trn_type: Option<String>,
    pub dt_posted: Option<String>,
    pub amount: Option<String>,
    pub fitid: Option<RawFitId>,
    pub memo: Option<String>,
}
