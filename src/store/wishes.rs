//! Wish store operations.

use super::{Record, Store};
use crate::codec::wish;
use crate::error::Result;
use crate::types::Wish;
use tracing::debug;

pub type WishStore = Store<Wish>;

impl Record for Wish {
    const KIND: &'static str = "wish";

    fn id(&self) -> &str {
        &self.id
    }

    fn decode_line(line: &str) -> Result<Self> {
        wish::decode_file_line(line)
    }

    fn encode_line(&self) -> String {
        wish::encode(self)
    }
}

impl Store<Wish> {
    /// Approve a wish and record the level it requires. Returns false when the id is unknown.
    pub fn approve(&mut self, id: &str, required_level: u32) -> Result<bool> {
        self.update(id, |wish| {
            wish.approved = true;
            wish.required_level = required_level;
        })
    }

    /// Delete every wish with `id` and rewrite the file, even when nothing matched.
    pub fn reject(&mut self, id: &str) -> Result<usize> {
        let removed = self.remove_all(id)?;
        debug!(id, removed, "Rejected wish");
        Ok(removed)
    }
}
