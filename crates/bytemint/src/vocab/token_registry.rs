//! # Token Registry
//!
//! The append-only arena of minted [`Token`]s.

use crate::{
    errors::{BMResult, BytemintError},
    types::{BMHashMap, TokenId, hash_map_with_capacity},
    vocab::token::{BYTE_TOKEN_COUNT, Token},
};

/// Dense, append-only token storage.
///
/// A token's id is its index in the registry. Tokens are never removed.
///
/// The display index maps display strings to ids;
/// on duplicate display strings the later token shadows the earlier one.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
    display_index: BMHashMap<String, TokenId>,
    shadowed: usize,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::with_capacity(BYTE_TOKEN_COUNT)
    }
}

impl TokenRegistry {
    /// Create a registry holding the 256 byte tokens.
    ///
    /// ## Arguments
    /// * `capacity` - the expected final token count.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(BYTE_TOKEN_COUNT);
        let mut registry = Self {
            tokens: Vec::with_capacity(capacity),
            display_index: hash_map_with_capacity(capacity),
            shadowed: 0,
        };
        for b in 0..=u8::MAX {
            registry.push(Token::byte(b));
        }
        registry
    }

    fn push(
        &mut self,
        token: Token,
    ) -> TokenId {
        let id = token.id();
        debug_assert_eq!(id as usize, self.tokens.len());

        if self
            .display_index
            .insert(token.display().to_string(), id)
            .is_some()
        {
            self.shadowed += 1;
        }
        self.tokens.push(token);
        id
    }

    /// Mint a merged token from two existing tokens.
    ///
    /// The caller must have validated both operands;
    /// see [`TokenRegistry::contains`].
    pub(crate) fn mint_merged(
        &mut self,
        left: TokenId,
        right: TokenId,
    ) -> TokenId {
        let id = self.tokens.len() as TokenId;
        let token = Token::merged(id, &self.tokens[left as usize], &self.tokens[right as usize]);

        self.tokens[left as usize].push_child_as_left(id);
        self.tokens[right as usize].push_child_as_right(id);

        self.push(token)
    }

    /// The number of minted tokens.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is `id` a minted token?
    pub fn contains(
        &self,
        id: TokenId,
    ) -> bool {
        (id as usize) < self.tokens.len()
    }

    /// Get a token by id.
    pub fn get(
        &self,
        id: TokenId,
    ) -> Option<&Token> {
        self.tokens.get(id as usize)
    }

    /// Get a token by id, failing with [`BytemintError::UnknownTokenId`].
    pub fn try_get(
        &self,
        id: TokenId,
    ) -> BMResult<&Token> {
        self.get(id).ok_or(BytemintError::UnknownTokenId {
            id,
            vocab_size: self.len(),
        })
    }

    /// Look up the token most recently minted with the given display string.
    pub fn lookup_display(
        &self,
        display: &str,
    ) -> Option<&Token> {
        self.display_index
            .get(display)
            .and_then(|&id| self.get(id))
    }

    /// The number of display-index entries shadowed by later tokens.
    pub fn shadowed_displays(&self) -> usize {
        self.shadowed
    }

    /// Iterate over all tokens in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}
