//! # Vocabulary
//!
//! This module provides the vocabulary and related io mechanisms.
//!
//! A [`Vocabulary`] is built once from an ordered rule list and contains:
//! * a [`TokenRegistry`] - the dense arena of minted [`Token`]s
//!   (256 byte tokens, then one token per rule),
//! * a [`MergeRuleTable`] - the ``(left, right) -> result`` rules in priority
//!   order, with a precomputed ``pair -> rank`` lookup.
//!
//! Provenance trees for visualization are built by [`TokenHistory`].
pub mod io;

pub mod history;
pub mod merge_rules;
pub mod token;
pub mod token_registry;
pub mod vocabulary;

#[doc(inline)]
pub use history::{MAX_HISTORY_DEPTH, TokenHistory};
#[doc(inline)]
pub use merge_rules::{MergeRank, MergeRule, MergeRuleTable};
#[doc(inline)]
pub use token::{BYTE_TOKEN_COUNT, Token};
#[doc(inline)]
pub use token_registry::TokenRegistry;
#[doc(inline)]
pub use vocabulary::{Vocabulary, VocabularyBuilder};
