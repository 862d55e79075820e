//! # Token Decoder Trait

use crate::{
    decoders::DecodeResult,
    errors::BMResult,
    support::strings::string_from_utf8_lossy,
    types::TokenId,
};

/// Trait for token decoders.
pub trait TokenDecoder: Send + Sync {
    /// Decodes tokens into bytes.
    ///
    /// ## Errors
    /// [`crate::BytemintError::UnknownTokenId`] for any out-of-range id.
    fn try_decode_to_bytes(
        &self,
        tokens: &[TokenId],
    ) -> BMResult<DecodeResult<Vec<u8>>>;

    /// Decodes a batch of tokens.
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[TokenId]],
    ) -> BMResult<Vec<DecodeResult<Vec<u8>>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_bytes(tokens))
            .collect()
    }

    /// Decodes tokens into a string.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences;
    /// token boundaries need not fall on code point boundaries.
    fn try_decode_to_string(
        &self,
        tokens: &[TokenId],
    ) -> BMResult<DecodeResult<String>> {
        self.try_decode_to_bytes(tokens)
            .map(|res| res.convert(string_from_utf8_lossy))
    }

    /// Decodes tokens into a string, failing on invalid UTF-8.
    ///
    /// ## Errors
    /// [`crate::BytemintError::InvalidUtf8`] if the bytes are not valid UTF-8.
    fn try_decode_to_string_strict(
        &self,
        tokens: &[TokenId],
    ) -> BMResult<DecodeResult<String>> {
        Ok(self
            .try_decode_to_bytes(tokens)?
            .try_convert(String::from_utf8)?)
    }

    /// Decodes a batch of tokens into strings.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[TokenId]],
    ) -> BMResult<Vec<DecodeResult<String>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
