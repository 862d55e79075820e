//! # Error Types

use crate::types::TokenId;

/// Errors from bytemint operations.
///
/// Construction errors (`UnknownOperand`, `RuleIdMismatch`, `MalformedLine`, `WideTokenId`,
/// `OddLength`, `TruncatedRecord`) abort loading entirely; no partially built
/// [`crate::vocab::Vocabulary`] is ever returned alongside them.
#[derive(Debug, thiserror::Error)]
pub enum BytemintError {
    /// A merge rule references a token which has not been minted yet.
    #[error(
        "merge rule {rule} on unknown token: ({left}, {right}) with {token_count} tokens minted"
    )]
    UnknownOperand {
        /// The index of the offending rule.
        rule: usize,
        /// The left operand id.
        left: TokenId,
        /// The right operand id.
        right: TokenId,
        /// The number of tokens minted when the rule was applied.
        token_count: usize,
    },

    /// A text rule line carries a result id which is not the next sequential id.
    #[error("line {line}: expected result id {expected}, got {found}")]
    RuleIdMismatch {
        /// The 1-based line number.
        line: usize,
        /// The id the rule must mint.
        expected: TokenId,
        /// The id found in the file.
        found: TokenId,
    },

    /// A text rule line does not hold exactly three integers.
    #[error("line {line}: malformed rule line: {content:?}")]
    MalformedLine {
        /// The 1-based line number.
        line: usize,
        /// The raw line.
        content: String,
    },

    /// A strictly read text rule line holds an id which does not fit in 16 bits.
    #[error("line {line}: token id {id} exceeds 16 bits")]
    WideTokenId {
        /// The 1-based line number.
        line: usize,
        /// The offending id.
        id: TokenId,
    },

    /// Packed rule data does not decode to whole 16-bit words.
    #[error("packed rule data has odd byte length ({len})")]
    OddLength {
        /// The decoded byte count.
        len: usize,
    },

    /// Packed rule data ends with an unpaired 16-bit word.
    #[error("packed rule data has an unpaired trailing word ({words} words)")]
    TruncatedRecord {
        /// The decoded word count.
        words: usize,
    },

    /// A token id is outside ``[0, vocab_size)``.
    #[error("unknown token id {id} (vocab size {vocab_size})")]
    UnknownTokenId {
        /// The offending id.
        id: TokenId,
        /// The vocabulary size.
        vocab_size: usize,
    },

    /// Vocab size exceeds the configured capacity.
    #[error("vocab size ({size}) exceeds capacity ({capacity})")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
        /// The configured capacity.
        capacity: usize,
    },

    /// A reserved token id collides with a minted token or the capacity.
    #[error("reserved token {token} conflicts with vocab layout (vocab size {vocab_size})")]
    ReservedTokenConflict {
        /// The reserved token id.
        token: TokenId,
        /// The vocabulary size.
        vocab_size: usize,
    },

    /// A token's merge tree is too deep to unfold into a [`crate::vocab::TokenHistory`].
    #[error("token {id} has merge depth {depth}; history trees are limited to depth {limit}")]
    HistoryTooDeep {
        /// The token id.
        id: TokenId,
        /// The token's merge depth.
        depth: usize,
        /// The supported depth.
        limit: usize,
    },

    /// Decoded bytes are not valid UTF-8 (strict decode only).
    #[error("invalid UTF-8 in decoded bytes: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (base64, integer range, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for bytemint operations.
pub type BMResult<T> = core::result::Result<T, BytemintError>;
