//! Text understanding
//!
//! Extracts a date range and a region of interest from free-form query
//! text. Tagging, parsing, tokenization and fuzzy matching are small
//! self-contained pieces; the two resolvers compose them into the
//! range and region policies.

pub mod date_range;
pub mod fuzzy;
pub mod parse;
pub mod region;
pub mod tagger;
pub mod tokenize;

pub use date_range::DateRangeResolver;
pub use parse::parse_natural;
pub use region::RegionResolver;
pub use tagger::{DateTagger, RegexDateTagger};
pub use tokenize::tokenize;
