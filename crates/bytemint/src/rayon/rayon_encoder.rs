//! # Parallel Encoder

use std::sync::Arc;

use crate::{encoders::TokenEncoder, types::TokenId, vocab::Vocabulary};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<E: TokenEncoder> {
    /// Inner encoder.
    pub inner: E,
}

impl<E: TokenEncoder> ParallelRayonEncoder<E> {
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: TokenEncoder> TokenEncoder for ParallelRayonEncoder<E> {
    fn vocab(&self) -> &Arc<Vocabulary> {
        self.inner.vocab()
    }

    fn encode_append_bytes(
        &self,
        bytes: &[u8],
        last_rule: Option<usize>,
        tokens: &mut Vec<TokenId>,
    ) {
        self.inner.encode_append_bytes(bytes, last_rule, tokens)
    }

    fn encode_batch(
        &self,
        batch: &[String],
    ) -> Vec<Vec<TokenId>> {
        use rayon::prelude::*;
        batch.par_iter().map(|text| self.encode(text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        decoders::{TokenDecoder, VocabDecoder},
        encoders::MergePassEncoder,
        rayon::ParallelRayonDecoder,
        testing::{SAMPLES, hello_world_vocab},
        types::{check_is_send, check_is_sync},
    };

    #[test]
    fn test_encoder() {
        let vocab = hello_world_vocab();

        let encoder = MergePassEncoder::new(vocab.clone());
        let serial: Vec<Vec<TokenId>> = SAMPLES.iter().map(|s| encoder.encode(s)).collect();

        let encoder = ParallelRayonEncoder::new(encoder);
        check_is_send(&encoder);
        check_is_sync(&encoder);

        let decoder = ParallelRayonDecoder::new(VocabDecoder::new(vocab));
        check_is_send(&decoder);
        check_is_sync(&decoder);

        let batch: Vec<String> = SAMPLES.iter().map(|s| s.to_string()).collect();
        let tokens = encoder.encode_batch(&batch);
        assert_eq!(tokens, serial);

        let refs: Vec<&[TokenId]> = tokens.iter().map(|v| v.as_slice()).collect();
        let strings: Vec<String> = decoder
            .try_decode_batch_to_strings(&refs)
            .unwrap()
            .into_iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(strings, batch);
    }
}
