//! Non-empty pool of editor identifiers stamped onto seats

use rand::Rng;

use super::errors::SeatsError;
use crate::domain::types::EditorId;

/// Editor identifiers to sample from, holding at least one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPool {
    first: EditorId,
    rest: Vec<EditorId>,
}

impl EditorPool {
    pub fn new(editors: Vec<EditorId>) -> Result<Self, SeatsError> {
        let mut editors = editors.into_iter();
        let first = editors.next().ok_or(SeatsError::EmptyEditorPool)?;
        Ok(Self {
            first,
            rest: editors.collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Always false; kept alongside `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Pick one editor uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &EditorId {
        let index = rng.gen_range(0..self.len());
        index
            .checked_sub(1)
            .and_then(|offset| self.rest.get(offset))
            .unwrap_or(&self.first)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EditorId> + '_ {
        std::iter::once(&self.first).chain(self.rest.iter())
    }
}
