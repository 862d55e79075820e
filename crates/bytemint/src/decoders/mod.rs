//! # Decoders
//!
//! A [`TokenDecoder`] maps token ids back to the bytes they represent.
//!
//! Out-of-range ids fail with [`crate::BytemintError::UnknownTokenId`];
//! invalid UTF-8 is replaced in the lossy string decoders.

mod decode_results;
mod token_decoder;
mod vocab_decoder;

#[doc(inline)]
pub use decode_results::DecodeResult;
#[doc(inline)]
pub use token_decoder::TokenDecoder;
#[doc(inline)]
pub use vocab_decoder::VocabDecoder;
