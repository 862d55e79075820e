//! # Token Records

use crate::{
    support::strings::visible_whitespace,
    types::{Pair, TokenId},
};

/// The number of raw byte tokens minted before any merge rule.
pub const BYTE_TOKEN_COUNT: usize = 256;

/// Compute the display string for a token's bytes.
///
/// This is the UTF-8 decoding of `bytes` when valid, and ``<id>`` otherwise.
pub fn display_string(
    id: TokenId,
    bytes: &[u8],
) -> String {
    match core::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => format!("<{id}>"),
    }
}

/// A minted vocabulary entry.
///
/// Cross references are plain ids into the owning registry;
/// the parent/child links form a DAG, not a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    id: TokenId,
    bytes: Vec<u8>,
    display: String,
    composition: Option<Pair>,
    depth: usize,
    children_as_left: Vec<TokenId>,
    children_as_right: Vec<TokenId>,
}

impl Token {
    /// Mint the byte token for `byte`.
    pub fn byte(byte: u8) -> Self {
        Self::new(byte as TokenId, vec![byte], None, 0)
    }

    /// Mint a merged token.
    ///
    /// ## Arguments
    /// * `id` - the new token id.
    /// * `left` - the left constituent.
    /// * `right` - the right constituent.
    pub fn merged(
        id: TokenId,
        left: &Token,
        right: &Token,
    ) -> Self {
        let mut bytes = Vec::with_capacity(left.bytes.len() + right.bytes.len());
        bytes.extend_from_slice(&left.bytes);
        bytes.extend_from_slice(&right.bytes);
        let depth = 1 + left.depth.max(right.depth);
        Self::new(id, bytes, Some((left.id, right.id)), depth)
    }

    fn new(
        id: TokenId,
        bytes: Vec<u8>,
        composition: Option<Pair>,
        depth: usize,
    ) -> Self {
        let display = display_string(id, &bytes);
        Self {
            id,
            bytes,
            display,
            composition,
            depth,
            children_as_left: Vec::new(),
            children_as_right: Vec::new(),
        }
    }

    /// The token id.
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// The literal byte string this token represents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The display string; ``<id>`` when the bytes are not valid UTF-8.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The display string with space and newline rendered as visible glyphs.
    pub fn debug_display(&self) -> String {
        visible_whitespace(&self.display).into_owned()
    }

    /// The ``(left, right)`` constituents of a merged token.
    pub fn composition(&self) -> Option<Pair> {
        self.composition
    }

    /// The height of this token's merge tree; 0 for byte tokens.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Is this one of the 256 raw byte tokens?
    pub fn is_byte(&self) -> bool {
        self.composition.is_none()
    }

    /// Tokens minted with this token as the left operand, in mint order.
    pub fn children_as_left(&self) -> &[TokenId] {
        &self.children_as_left
    }

    /// Tokens minted with this token as the right operand, in mint order.
    pub fn children_as_right(&self) -> &[TokenId] {
        &self.children_as_right
    }

    pub(crate) fn push_child_as_left(
        &mut self,
        child: TokenId,
    ) {
        self.children_as_left.push(child);
    }

    pub(crate) fn push_child_as_right(
        &mut self,
        child: TokenId,
    ) {
        self.children_as_right.push(child);
    }
}
