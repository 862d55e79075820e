use std::sync::Arc;

use crate::{
    errors::{BMResult, BytemintError},
    tokenizer::Tokenizer,
    types::TokenId,
    vocab::Vocabulary,
};

/// The default reserved end-of-text id.
pub const DEFAULT_EOT_TOKEN: TokenId = 50256;

/// The default vocabulary capacity (model embedding slots).
pub const DEFAULT_VOCAB_CAPACITY: usize = 50304;

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// The reserved end-of-text id.
    pub eot_token: TokenId,

    /// The number of token slots available to consumers.
    pub vocab_capacity: usize,

    /// Stop decoding at the first end-of-text id.
    pub truncate_at_eot: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            eot_token: DEFAULT_EOT_TOKEN,
            vocab_capacity: DEFAULT_VOCAB_CAPACITY,
            truncate_at_eot: true,
        }
    }
}

impl TokenizerOptions {
    /// Sets the reserved end-of-text id.
    pub fn with_eot_token(
        mut self,
        eot_token: TokenId,
    ) -> Self {
        self.eot_token = eot_token;
        self
    }

    /// Sets the vocabulary capacity.
    pub fn with_vocab_capacity(
        mut self,
        vocab_capacity: usize,
    ) -> Self {
        self.vocab_capacity = vocab_capacity;
        self
    }

    /// Sets whether decoding stops at the end-of-text id.
    pub fn with_truncate_at_eot(
        mut self,
        truncate_at_eot: bool,
    ) -> Self {
        self.truncate_at_eot = truncate_at_eot;
        self
    }

    /// Check these options against a vocabulary size.
    ///
    /// ## Errors
    /// * [`BytemintError::VocabSizeOverflow`] if the vocab exceeds the capacity.
    /// * [`BytemintError::ReservedTokenConflict`] if the end-of-text id is a minted
    ///   token or is not below the capacity.
    pub fn validate(
        &self,
        vocab_size: usize,
    ) -> BMResult<()> {
        if vocab_size > self.vocab_capacity {
            return Err(BytemintError::VocabSizeOverflow {
                size: vocab_size,
                capacity: self.vocab_capacity,
            });
        }
        let eot = self.eot_token as usize;
        if eot < vocab_size || eot >= self.vocab_capacity {
            return Err(BytemintError::ReservedTokenConflict {
                token: self.eot_token,
                vocab_size,
            });
        }
        Ok(())
    }

    /// Build a [`Tokenizer`] for the given vocab.
    pub fn build(
        &self,
        vocab: Arc<Vocabulary>,
    ) -> BMResult<Arc<Tokenizer>> {
        Tokenizer::new(vocab, *self).map(Arc::new)
    }
}
