use std::{borrow::Cow, sync::Arc};

use crate::{
    decoders::{DecodeResult, TokenDecoder, VocabDecoder},
    encoders::{MergePassEncoder, TokenEncoder},
    errors::BMResult,
    support::strings::string_from_utf8_lossy,
    tokenizer::TokenizerOptions,
    types::TokenId,
    vocab::{TokenHistory, Vocabulary},
};

/// Unified Tokenizer.
///
/// Combines a [`MergePassEncoder`] and a [`VocabDecoder`] over one shared
/// [`Vocabulary`], and adds the ordering conventions consumed by models:
/// * `reverse` - the anticausal ordering; the merged sequence is reversed
///   on encode, and the input reversed again before decode.
/// * `add_eot` - append the reserved end-of-text id after merging
///   (and before any reversal).
#[derive(Debug, Clone)]
pub struct Tokenizer {
    vocab: Arc<Vocabulary>,
    encoder: MergePassEncoder,
    decoder: VocabDecoder,
    options: TokenizerOptions,
}

impl Tokenizer {
    /// Create a new tokenizer.
    ///
    /// ## Errors
    /// See [`TokenizerOptions::validate`].
    pub fn new(
        vocab: Arc<Vocabulary>,
        options: TokenizerOptions,
    ) -> BMResult<Self> {
        options.validate(vocab.len())?;
        Ok(Self {
            encoder: MergePassEncoder::new(vocab.clone()),
            decoder: VocabDecoder::new(vocab.clone())
                .with_eot(options.eot_token, options.truncate_at_eot),
            vocab,
            options,
        })
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary> {
        &self.vocab
    }

    /// Get the options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// The number of minted tokens.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// The reserved end-of-text id.
    pub fn eot_token(&self) -> TokenId {
        self.options.eot_token
    }

    /// Get the encoder.
    pub fn encoder(&self) -> &MergePassEncoder {
        &self.encoder
    }

    /// Get the decoder.
    pub fn decoder(&self) -> &VocabDecoder {
        &self.decoder
    }

    /// Encode text.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `reverse` - Emit the anticausal (reversed) ordering.
    /// * `add_eot` - Append the end-of-text id before any reversal.
    pub fn encode(
        &self,
        text: &str,
        reverse: bool,
        add_eot: bool,
    ) -> Vec<TokenId> {
        self.encode_until(text, None, reverse, add_eot)
    }

    /// Encode text, applying only rules with index ``<= last_rule``.
    pub fn encode_until(
        &self,
        text: &str,
        last_rule: Option<usize>,
        reverse: bool,
        add_eot: bool,
    ) -> Vec<TokenId> {
        self.encode_raw(text.as_bytes(), last_rule, reverse, add_eot)
    }

    /// Encode raw bytes; see [`Tokenizer::encode`].
    pub fn encode_raw(
        &self,
        bytes: &[u8],
        last_rule: Option<usize>,
        reverse: bool,
        add_eot: bool,
    ) -> Vec<TokenId> {
        let mut tokens = Vec::with_capacity(bytes.len() + 1);
        self.encoder
            .encode_append_bytes(bytes, last_rule, &mut tokens);
        if add_eot {
            tokens.push(self.options.eot_token);
        }
        if reverse {
            tokens.reverse();
        }
        tokens
    }

    /// Decode ids into bytes, reporting any ids left after an end-of-text stop.
    ///
    /// ## Errors
    /// [`crate::BytemintError::UnknownTokenId`] for any out-of-range id.
    pub fn decode_result(
        &self,
        ids: &[TokenId],
        reverse: bool,
    ) -> BMResult<DecodeResult<Vec<u8>>> {
        let ids: Cow<[TokenId]> = if reverse {
            Cow::Owned(ids.iter().rev().copied().collect())
        } else {
            Cow::Borrowed(ids)
        };
        self.decoder.try_decode_to_bytes(&ids)
    }

    /// Decode ids into bytes.
    pub fn decode(
        &self,
        ids: &[TokenId],
        reverse: bool,
    ) -> BMResult<Vec<u8>> {
        self.decode_result(ids, reverse)
            .map(DecodeResult::into_value)
    }

    /// Decode ids into text, replacing invalid UTF-8.
    pub fn decode_text(
        &self,
        ids: &[TokenId],
        reverse: bool,
    ) -> BMResult<String> {
        self.decode(ids, reverse).map(string_from_utf8_lossy)
    }

    /// Decode ids into text, failing on invalid UTF-8.
    pub fn decode_text_strict(
        &self,
        ids: &[TokenId],
        reverse: bool,
    ) -> BMResult<String> {
        Ok(String::from_utf8(self.decode(ids, reverse)?)?)
    }

    /// The byte sequence of a single token.
    pub fn token_bytes(
        &self,
        id: TokenId,
    ) -> BMResult<&[u8]> {
        self.vocab.token_bytes(id)
    }

    /// The lossy text of a single token.
    pub fn token_text(
        &self,
        id: TokenId,
    ) -> BMResult<String> {
        self.token_bytes(id)
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    /// The provenance tree of a token.
    ///
    /// ## Errors
    /// * [`crate::BytemintError::HistoryTooDeep`] past [`crate::vocab::MAX_HISTORY_DEPTH`].
    pub fn history_tree(
        &self,
        id: TokenId,
    ) -> BMResult<TokenHistory> {
        self.vocab.history_tree(id)
    }

    /// Encode a batch of texts.
    ///
    /// Batches are spread over the ``rayon`` pool when the feature is enabled;
    /// each text is still merged on a single thread.
    pub fn encode_batch(
        &self,
        batch: &[String],
        reverse: bool,
        add_eot: bool,
    ) -> Vec<Vec<TokenId>> {
        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                use rayon::prelude::*;
                batch
                    .par_iter()
                    .map(|text| self.encode(text, reverse, add_eot))
                    .collect()
            } else {
                batch
                    .iter()
                    .map(|text| self.encode(text, reverse, add_eot))
                    .collect()
            }
        }
    }

    /// Decode a batch of id sequences into lossy text.
    pub fn decode_text_batch(
        &self,
        batch: &[Vec<TokenId>],
        reverse: bool,
    ) -> BMResult<Vec<String>> {
        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                use rayon::prelude::*;
                batch
                    .par_iter()
                    .map(|ids| self.decode_text(ids, reverse))
                    .collect()
            } else {
                batch
                    .iter()
                    .map(|ids| self.decode_text(ids, reverse))
                    .collect()
            }
        }
    }
}
