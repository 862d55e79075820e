//! # Merge Pass Encoder
//!
//! Scans for the globally best-ranked adjacent pair, merges every
//! non-overlapping occurrence of that pair in one compaction pass,
//! and repeats until no pair matches a rule.

use std::sync::Arc;

use crate::{encoders::TokenEncoder, types::TokenId, vocab::Vocabulary};

/// A [`TokenEncoder`] applying whole-sequence merge passes.
#[derive(Debug, Clone)]
pub struct MergePassEncoder {
    vocab: Arc<Vocabulary>,
}

impl MergePassEncoder {
    /// Create a new encoder.
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        Self { vocab }
    }
}

/// Replace every non-overlapping ``(left, right)`` in `tokens[start..]` with `result`.
///
/// Matches are taken left to right; the buffer is compacted in place.
///
/// ## Returns
/// The number of merges performed.
fn merge_all(
    tokens: &mut Vec<TokenId>,
    start: usize,
    (left, right): (TokenId, TokenId),
    result: TokenId,
) -> usize {
    let end = tokens.len();
    let mut read = start;
    let mut write = start;

    while read < end {
        if read + 1 < end && tokens[read] == left && tokens[read + 1] == right {
            tokens[write] = result;
            read += 2;
        } else {
            tokens[write] = tokens[read];
            read += 1;
        }
        write += 1;
    }

    tokens.truncate(write);
    end - write
}

impl TokenEncoder for MergePassEncoder {
    fn vocab(&self) -> &Arc<Vocabulary> {
        &self.vocab
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, bytes, tokens)))]
    fn encode_append_bytes(
        &self,
        bytes: &[u8],
        last_rule: Option<usize>,
        tokens: &mut Vec<TokenId>,
    ) {
        // Reuse the output buffer as our working memory.
        let start = tokens.len();
        tokens.extend(bytes.iter().map(|&b| b as TokenId));

        let rules = self.vocab.rules();
        while tokens.len() >= start + 2 {
            // Rule indices are unique, so the minimum is unambiguous.
            let Some(rank) = tokens[start..]
                .windows(2)
                .filter_map(|w| rules.lookup_pair(&(w[0], w[1])))
                .min()
            else {
                break;
            };

            if let Some(limit) = last_rule
                && rank.rule > limit
            {
                break;
            }

            let Some(rule) = rules.get(rank.rule) else {
                break;
            };
            let merged = merge_all(tokens, start, rule.pair(), rule.result);
            debug_assert!(merged > 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{SAMPLES, chain_vocab, hello_world_vocab};

    #[test]
    fn test_hello_world() {
        let encoder = MergePassEncoder::new(hello_world_vocab());
        assert_eq!(encoder.encode("hello world"), vec![259, 264]);
        assert_eq!(
            encoder.encode("hello hello"),
            vec![259, b' ' as TokenId, 259]
        );
    }

    #[test]
    fn test_chain_scenario() {
        let encoder = MergePassEncoder::new(chain_vocab());
        assert_eq!(encoder.encode_bytes(&[0, 1, 2, 3]), vec![257, 3]);
    }

    #[test]
    fn test_merge_priority() {
        // (a, b) -> X at index 0, (b, c) -> Y at index 1.
        let a = b'a' as TokenId;
        let b = b'b' as TokenId;
        let c = b'c' as TokenId;
        let vocab = Vocabulary::from_rules([(a, b), (b, c)]).unwrap();
        let encoder = MergePassEncoder::new(Arc::new(vocab));
        assert_eq!(encoder.encode("abc"), vec![256, c]);

        // Reversed priority.
        let vocab = Vocabulary::from_rules([(b, c), (a, b)]).unwrap();
        let encoder = MergePassEncoder::new(Arc::new(vocab));
        assert_eq!(encoder.encode("abc"), vec![a, 256]);
    }

    #[test]
    fn test_non_overlapping_left_to_right() {
        let l = b'l' as TokenId;
        let vocab = Vocabulary::from_rules([(l, l)]).unwrap();
        let encoder = MergePassEncoder::new(Arc::new(vocab));

        assert_eq!(encoder.encode("lll"), vec![256, l]);
        assert_eq!(encoder.encode("llll"), vec![256, 256]);
        assert_eq!(encoder.encode("lllll"), vec![256, 256, l]);
    }

    #[test]
    fn test_all_occurrences_per_pass() {
        let encoder = MergePassEncoder::new(hello_world_vocab());
        assert_eq!(
            encoder.encode("hello world world"),
            vec![259, 264, 264]
        );
    }

    #[test]
    fn test_encode_until() {
        let encoder = MergePassEncoder::new(hello_world_vocab());
        let text = "hello world";

        let as_bytes: Vec<TokenId> = text.bytes().map(|b| b as TokenId).collect();
        assert_eq!(encoder.encode_until(text, Some(0)).len(), as_bytes.len() - 1);
        assert_eq!(encoder.encode_until(text, Some(3))[0], 259);
        assert_eq!(encoder.encode_until(text, Some(8)), encoder.encode(text));
        assert_eq!(encoder.encode_until(text, None), vec![259, 264]);
    }

    #[test]
    fn test_empty_and_single() {
        let encoder = MergePassEncoder::new(hello_world_vocab());
        assert!(encoder.encode("").is_empty());
        assert_eq!(encoder.encode("h"), vec![b'h' as TokenId]);
    }

    #[test]
    fn test_append_preserves_prefix() {
        let encoder = MergePassEncoder::new(hello_world_vocab());
        let mut tokens = vec![b'h' as TokenId];
        encoder.encode_append("ello", &mut tokens);
        // The prefix is not merged with the appended span.
        assert_eq!(tokens[0], b'h' as TokenId);
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let encoder = MergePassEncoder::new(hello_world_vocab());
        let bytes = [0xff, b'h', b'e', 0xc3];
        assert_eq!(encoder.encode_bytes(&bytes), vec![0xff, 256, 0xc3]);
    }

    #[test]
    fn test_deterministic() {
        let encoder = MergePassEncoder::new(hello_world_vocab());
        for sample in SAMPLES {
            assert_eq!(encoder.encode(sample), encoder.encode(sample));
        }
        let batch: Vec<String> = SAMPLES.iter().map(|s| s.to_string()).collect();
        let tokens = encoder.encode_batch(&batch);
        for (sample, tokens) in SAMPLES.iter().zip(tokens) {
            assert_eq!(encoder.encode(sample), tokens);
        }
    }
}
