//! # Shared Test Fixtures

use std::sync::Arc;

use crate::{types::TokenId, vocab::Vocabulary};

fn b(c: char) -> TokenId {
    c as TokenId
}

/// A small vocabulary which merges "hello" and " world".
///
/// | id  | rule            | bytes      |
/// |-----|-----------------|------------|
/// | 256 | `h` `e`         | "he"       |
/// | 257 | `l` `l`         | "ll"       |
/// | 258 | 256 257         | "hell"     |
/// | 259 | 258 `o`         | "hello"    |
/// | 260 | ` ` `w`         | " w"       |
/// | 261 | `o` `r`         | "or"       |
/// | 262 | 260 261         | " wor"     |
/// | 263 | `l` `d`         | "ld"       |
/// | 264 | 262 263         | " world"   |
pub fn hello_world_vocab() -> Arc<Vocabulary> {
    Vocabulary::from_rules([
        (b('h'), b('e')),
        (b('l'), b('l')),
        (256, 257),
        (258, b('o')),
        (b(' '), b('w')),
        (b('o'), b('r')),
        (260, 261),
        (b('l'), b('d')),
        (262, 263),
    ])
    .map(Arc::new)
    .unwrap()
}

/// The two-rule vocabulary ``0 1 256``, ``256 2 257``.
pub fn chain_vocab() -> Arc<Vocabulary> {
    Vocabulary::from_rules([(0, 1), (256, 2)]).map(Arc::new).unwrap()
}

/// Sample strings, including multi-byte UTF-8.
pub const SAMPLES: &[&str] = &[
    "",
    "hello world",
    "hello hello world world",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}",
    "emoji: \u{1f600}\u{1f680}",
    "lllllll",
];
