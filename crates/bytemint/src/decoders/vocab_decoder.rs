//! # Vocabulary Decoder

use std::sync::Arc;

use crate::{
    decoders::{DecodeResult, TokenDecoder},
    errors::BMResult,
    types::TokenId,
    vocab::Vocabulary,
};

/// A [`TokenDecoder`] which concatenates the stored bytes of each token.
///
/// An optional reserved end-of-text id is recognized: it contributes no
/// bytes, and when `truncate_at_eot` is set decoding stops there.
/// Ids after a truncating end-of-text are not examined, so out-of-range
/// ids in that tail are counted in `remaining` rather than reported.
#[derive(Debug, Clone)]
pub struct VocabDecoder {
    vocab: Arc<Vocabulary>,
    eot_token: Option<TokenId>,
    truncate_at_eot: bool,
}

impl VocabDecoder {
    /// Create a decoder without an end-of-text token.
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        Self {
            vocab,
            eot_token: None,
            truncate_at_eot: false,
        }
    }

    /// Recognize `eot_token` as the reserved end-of-text id.
    ///
    /// ## Arguments
    /// * `eot_token` - the reserved id.
    /// * `truncate_at_eot` - stop decoding at the first occurrence.
    pub fn with_eot(
        mut self,
        eot_token: TokenId,
        truncate_at_eot: bool,
    ) -> Self {
        self.eot_token = Some(eot_token);
        self.truncate_at_eot = truncate_at_eot;
        self
    }

    /// Return the attached vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary> {
        &self.vocab
    }

    /// The reserved end-of-text id, if any.
    pub fn eot_token(&self) -> Option<TokenId> {
        self.eot_token
    }
}

impl TokenDecoder for VocabDecoder {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    fn try_decode_to_bytes(
        &self,
        tokens: &[TokenId],
    ) -> BMResult<DecodeResult<Vec<u8>>> {
        let mut value = Vec::with_capacity(tokens.len() * 4);

        for (idx, &id) in tokens.iter().enumerate() {
            if Some(id) == self.eot_token {
                if self.truncate_at_eot {
                    return Ok(DecodeResult::new(value, Some(tokens.len() - idx - 1)));
                }
                continue;
            }
            value.extend_from_slice(self.vocab.token_bytes(id)?);
        }

        Ok(DecodeResult::new(value, None))
    }
}
