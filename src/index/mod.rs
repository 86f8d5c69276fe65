pub mod stats;
pub mod suffix_array;
pub mod text_index;
pub mod types;

pub use stats::IndexStats;
pub use text_index::TextIndex;
pub use types::*;
