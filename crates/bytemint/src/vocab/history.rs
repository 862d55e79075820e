//! # Token Provenance Trees
//!
//! A [`TokenHistory`] unfolds a token into the merge tree which produced it.
//! The tree serializes as:
//!
//! ```json
//! {"name": "ab", "id": 256, "children": [{"name": "a", "id": 97}, {"name": "b", "id": 98}]}
//! ```
//!
//! Trees are unfolded, serialized and dropped recursively, so they are
//! limited to [`MAX_HISTORY_DEPTH`] merge levels.

use serde::{Deserialize, Serialize};

use crate::{
    errors::{BMResult, BytemintError},
    types::TokenId,
    vocab::Vocabulary,
};

/// The deepest merge tree [`TokenHistory::build`] will unfold.
pub const MAX_HISTORY_DEPTH: usize = 512;

/// A node in a token's provenance tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHistory {
    /// Display label.
    ///
    /// Leaves use the raw display string; merged nodes render space
    /// and newline as visible glyphs.
    pub name: String,

    /// The token id.
    pub id: TokenId,

    /// ``[left, right]`` subtrees; absent for byte tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TokenHistory>>,
}

impl TokenHistory {
    /// Build the provenance tree of `id` in `vocab`.
    ///
    /// ## Errors
    /// * [`BytemintError::UnknownTokenId`] if `id` is out of range.
    /// * [`BytemintError::HistoryTooDeep`] if the token's merge depth
    ///   exceeds [`MAX_HISTORY_DEPTH`].
    pub fn build(
        vocab: &Vocabulary,
        id: TokenId,
    ) -> BMResult<Self> {
        let depth = vocab.try_token(id)?.depth();
        if depth > MAX_HISTORY_DEPTH {
            return Err(BytemintError::HistoryTooDeep {
                id,
                depth,
                limit: MAX_HISTORY_DEPTH,
            });
        }
        Self::unfold(vocab, id)
    }

    // Recursion depth is bounded by the root's merge depth.
    fn unfold(
        vocab: &Vocabulary,
        id: TokenId,
    ) -> BMResult<Self> {
        let token = vocab.try_token(id)?;
        Ok(match token.composition() {
            None => Self {
                name: token.display().to_string(),
                id,
                children: None,
            },
            Some((left, right)) => Self {
                name: token.debug_display(),
                id,
                children: Some(vec![Self::unfold(vocab, left)?, Self::unfold(vocab, right)?]),
            },
        })
    }

    /// Is this a byte-token leaf?
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The ids of the leaves, left to right.
    pub fn leaf_ids(&self) -> Vec<TokenId> {
        let mut ids = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match &node.children {
                None => ids.push(node.id),
                Some(children) => stack.extend(children.iter().rev()),
            }
        }
        ids
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> BMResult<String> {
        serde_json::to_string(self).map_err(|e| BytemintError::Parse(e.to_string()))
    }
}
