//! # Token Encoder Trait

use std::sync::Arc;

use crate::{types::TokenId, vocab::Vocabulary};

/// A trait for token encoders.
pub trait TokenEncoder: Send + Sync {
    /// Return the attached vocabulary.
    fn vocab(&self) -> &Arc<Vocabulary>;

    /// Encode a byte span, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `bytes` - The byte span to encode.
    /// * `last_rule` - When set, no rule with a higher index is applied.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_bytes(
        &self,
        bytes: &[u8],
        last_rule: Option<usize>,
        tokens: &mut Vec<TokenId>,
    );

    /// Encode text, appending to a target buffer.
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<TokenId>,
    ) {
        self.encode_append_bytes(text.as_bytes(), None, tokens)
    }

    /// Encode raw bytes into tokens.
    ///
    /// Bytes need not be valid UTF-8.
    fn encode_bytes(
        &self,
        bytes: &[u8],
    ) -> Vec<TokenId> {
        let mut tokens = Vec::with_capacity(bytes.len());
        self.encode_append_bytes(bytes, None, &mut tokens);
        tokens
    }

    /// Encode text into tokens.
    fn encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<TokenId> {
        self.encode_bytes(text.as_ref().as_bytes())
    }

    /// Encode text, applying only rules with index ``<= last_rule``.
    ///
    /// This shows the tokenization as of a given merge step.
    fn encode_until<S: AsRef<str>>(
        &self,
        text: S,
        last_rule: Option<usize>,
    ) -> Vec<TokenId> {
        let bytes = text.as_ref().as_bytes();
        let mut tokens = Vec::with_capacity(bytes.len());
        self.encode_append_bytes(bytes, last_rule, &mut tokens);
        tokens
    }

    /// Encode a batch of text into tokens.
    fn encode_batch(
        &self,
        batch: &[String],
    ) -> Vec<Vec<TokenId>> {
        batch.iter().map(|s| self.encode(s)).collect()
    }
}
