mod dates;
mod dto;
mod fallback;
mod parser;
mod tree;

pub use dates::parse_statement_date;
pub use dto::{RawFitId, RawTransaction};
pub use fallback::extract_by_pattern;
pub use parser::{CLOSE_MARKER, OPEN_MARKER, extract_structural, is_viable};
pub use tree::{OfxTree, parse_tree};

pub mod prelude {
    pub use super::{
        OfxTree, RawFitId, RawTransaction, extract_by_pattern, extract_structural, is_viable,
        parse_statement_date,
    };
}
