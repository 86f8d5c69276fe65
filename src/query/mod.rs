//! Query surface: result-set algebra, grouped proximity queries, and the
//! operator-marker query language.

pub mod group;
pub mod lexer;
pub mod ops;
pub mod parser;

pub use group::{GroupOp, GroupedQuery};
pub use lexer::{Token, tokenize};
pub use parser::{Query, QueryNode, extract_words, parse_query};
