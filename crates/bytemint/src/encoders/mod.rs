//! # Encoders
//!
//! A [`TokenEncoder`] maps text (as UTF-8 bytes) to token ids by repeated
//! highest-priority merging.
//!
//! [`MergePassEncoder`] is the reference implementation; it never fails,
//! since every byte is a token.

mod merge_pass_encoder;
mod token_encoder;

#[doc(inline)]
pub use merge_pass_encoder::MergePassEncoder;
#[doc(inline)]
pub use token_encoder::TokenEncoder;
