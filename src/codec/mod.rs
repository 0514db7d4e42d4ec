//! Text codecs for commands and persisted records.

pub mod achievement;
pub mod task;
pub mod timestamp;
pub mod tokenizer;
pub mod wish;

pub use task::TaskShape;
pub use tokenizer::{split_raw, tokenize};
pub use wish::WishShape;
