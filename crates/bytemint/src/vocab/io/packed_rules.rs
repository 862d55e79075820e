//! # Packed Base64 Rule Files
//!
//! The rule list as big-endian `u16` words, ``left, right`` per rule,
//! base64 encoded:
//! ```text
//! base64( [L0_hi L0_lo R0_hi R0_lo L1_hi L1_lo ...] )
//! ```

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
    str::FromStr,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{BMResult, BytemintError},
    types::{Pair, TokenId},
    vocab::MergeRuleTable,
};

/// How rule readers treat records that do not fit the 16-bit rule format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordPolicy {
    /// Fail with [`BytemintError::TruncatedRecord`] on a trailing packed word,
    /// and with [`BytemintError::WideTokenId`] on a text id above ``u16::MAX``.
    Strict,

    /// Drop a trailing packed word with a warning; accept wide text ids.
    #[default]
    Lenient,
}

impl FromStr for RecordPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(format!(
                "invalid record policy: {s:?} (expected \"strict\" or \"lenient\")"
            )),
        }
    }
}

/// Decode packed rule bytes (already base64 decoded) into pairs.
///
/// ## Errors
/// * [`BytemintError::OddLength`] if the byte count is odd.
/// * [`BytemintError::TruncatedRecord`] under [`RecordPolicy::Strict`]
///   if the word count is odd.
pub fn unpack_rule_words(
    bytes: &[u8],
    policy: RecordPolicy,
) -> BMResult<Vec<Pair>> {
    if bytes.len() % 2 != 0 {
        return Err(BytemintError::OddLength { len: bytes.len() });
    }

    let words: Vec<TokenId> = bytes
        .chunks_exact(2)
        .map(|w| u16::from_be_bytes([w[0], w[1]]) as TokenId)
        .collect();

    if words.len() % 2 != 0 {
        match policy {
            RecordPolicy::Strict => {
                return Err(BytemintError::TruncatedRecord { words: words.len() });
            }
            RecordPolicy::Lenient => {
                log::warn!(
                    "dropping unpaired trailing word {} of packed rule data",
                    words.len() - 1
                );
            }
        }
    }

    Ok(words.chunks_exact(2).map(|p| (p[0], p[1])).collect())
}

/// Decode a base64 packed rule string into pairs.
///
/// ASCII whitespace anywhere in `data` is ignored, so wrapped base64 is accepted.
pub fn decode_packed_rules(
    data: &str,
    policy: RecordPolicy,
) -> BMResult<Vec<Pair>> {
    let compact: Vec<u8> = data
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let bytes = BASE64_STANDARD
        .decode(compact)
        .map_err(|e| BytemintError::Parse(e.to_string()))?;
    unpack_rule_words(&bytes, policy)
}

/// Read the ordered ``(left, right)`` rules from a packed rule stream.
pub fn read_packed_rules<R: Read>(
    mut reader: R,
    policy: RecordPolicy,
) -> BMResult<Vec<Pair>> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;
    decode_packed_rules(&data, policy)
}

/// Load the ordered ``(left, right)`` rules from a packed rule file.
pub fn load_packed_rules_path<P: AsRef<Path>>(
    path: P,
    policy: RecordPolicy,
) -> BMResult<Vec<Pair>> {
    read_packed_rules(File::open(path)?, policy)
}

/// Encode a rule table as a base64 packed rule string.
///
/// ## Errors
/// [`BytemintError::Parse`] if an operand does not fit in 16 bits.
pub fn encode_packed_rules(rules: &MergeRuleTable) -> BMResult<String> {
    let mut bytes = Vec::with_capacity(rules.len() * 4);
    for (left, right) in rules.pairs() {
        for id in [left, right] {
            let word = u16::try_from(id)
                .map_err(|_| BytemintError::Parse(format!("token id {id} exceeds 16 bits")))?;
            bytes.extend_from_slice(&word.to_be_bytes());
        }
    }
    Ok(BASE64_STANDARD.encode(bytes))
}

/// Write a rule table as a packed rule stream.
pub fn write_packed_rules<W: Write>(
    rules: &MergeRuleTable,
    writer: &mut W,
) -> BMResult<()> {
    writer.write_all(encode_packed_rules(rules)?.as_bytes())?;
    Ok(())
}

/// Save a rule table to a packed rule file.
pub fn save_packed_rules_path<P: AsRef<Path>>(
    rules: &MergeRuleTable,
    path: P,
) -> BMResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_packed_rules(rules, &mut writer)?;
    writer.flush()?;
    Ok(())
}
