//! # Parallel Decoder

use crate::{
    decoders::{DecodeResult, TokenDecoder},
    errors::BMResult,
    types::TokenId,
};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches.
#[derive(Debug, Clone)]
pub struct ParallelRayonDecoder<D: TokenDecoder> {
    /// Wrapped decoder.
    pub inner: D,
}

impl<D: TokenDecoder> ParallelRayonDecoder<D> {
    /// Create a new parallel token decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: TokenDecoder> TokenDecoder for ParallelRayonDecoder<D> {
    fn try_decode_to_bytes(
        &self,
        tokens: &[TokenId],
    ) -> BMResult<DecodeResult<Vec<u8>>> {
        self.inner.try_decode_to_bytes(tokens)
    }

    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[TokenId]],
    ) -> BMResult<Vec<DecodeResult<Vec<u8>>>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_bytes(tokens))
            .collect()
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[TokenId]],
    ) -> BMResult<Vec<DecodeResult<String>>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_string(tokens))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{decoders::VocabDecoder, errors::BytemintError, vocab::Vocabulary};

    #[test]
    fn test_batch_error_propagates() {
        let decoder = ParallelRayonDecoder::new(VocabDecoder::new(Arc::new(Vocabulary::default())));
        let good: &[TokenId] = &[104, 105];
        let bad: &[TokenId] = &[104, 4096];

        let res = decoder.try_decode_batch_to_bytes(&[good, good]).unwrap();
        assert_eq!(res[1].value, b"hi");

        assert!(matches!(
            decoder.try_decode_batch_to_bytes(&[good, bad]),
            Err(BytemintError::UnknownTokenId { id: 4096, .. })
        ));
    }
}
