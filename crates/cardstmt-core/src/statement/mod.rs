//! Statement field extraction module.

mod parser;
pub mod rules;

pub use parser::{BatchOutcome, StatementExtractor, StatementParser, extract, extract_batch};
