//! # `bytemint` Byte-Pair Merge Tokenizer
//!
//! `bytemint` applies an ordered list of byte-pair merge rules to text,
//! and keeps the provenance of every minted token.
//!
//! See:
//! * [`vocab`] to build a [`Vocabulary`] from rule files, and inspect tokens.
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into bytes and text.
//! * [`tokenizer`] for the combined [`Tokenizer`], with the anticausal
//!   (reversed) ordering and end-of-text handling.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash`` / ``foldhash``
//!
//! This swaps all ``HashMap`` implementations for ``ahash`` (or ``foldhash``);
//! which is a performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::BMHashMap`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables batch parallelism wrappers using the ``rayon`` crate.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Loading A Tokenizer
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use bytemint::{
//!     TokenizerOptions,
//!     vocab::io::{RecordPolicy, load_vocabulary_path},
//! };
//!
//! fn example() -> bytemint::BMResult<()> {
//!     let vocab = load_vocabulary_path("fineweb2.vocab", None, RecordPolicy::Lenient)?;
//!     let tokenizer = TokenizerOptions::default().build(Arc::new(vocab))?;
//!
//!     let ids = tokenizer.encode("hello world", true, false);
//!     assert_eq!(tokenizer.decode_text(&ids, true)?, "hello world");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod support;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[cfg(test)]
pub(crate) mod testing;

#[doc(inline)]
pub use decoders::{DecodeResult, TokenDecoder, VocabDecoder};
#[doc(inline)]
pub use encoders::{MergePassEncoder, TokenEncoder};
#[doc(inline)]
pub use errors::{BMResult, BytemintError};
#[doc(inline)]
pub use tokenizer::{DEFAULT_EOT_TOKEN, DEFAULT_VOCAB_CAPACITY, Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::{Pair, TokenId};
#[doc(inline)]
pub use vocab::{TokenHistory, Vocabulary, VocabularyBuilder};
