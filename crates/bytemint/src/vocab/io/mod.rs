//! # Rule Source IO
//!
//! Two interchangeable encodings of the same ordered rule list:
//! * [`text_rules`] - ``{LEFT} {RIGHT} {RESULT}`` lines.
//! * [`packed_rules`] - base64 of big-endian `u16` ``(left, right)`` pairs.
//!
//! ## Loading A Vocabulary
//!
//! ```rust,no_run
//! use bytemint::vocab::{
//!     Vocabulary,
//!     io::{RecordPolicy, load_vocabulary_path},
//! };
//!
//! fn example() -> bytemint::BMResult<Vocabulary> {
//!     load_vocabulary_path("fineweb2.vocab", None, RecordPolicy::Lenient)
//! }
//! ```

pub mod packed_rules;
pub mod text_rules;

use std::{fs, path::Path, str::FromStr};

#[doc(inline)]
pub use packed_rules::*;
#[doc(inline)]
pub use text_rules::*;

use crate::{errors::BMResult, types::Pair, vocab::Vocabulary};

/// A persisted rule format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    /// ``{LEFT} {RIGHT} {RESULT}`` lines.
    Text,

    /// Base64 packed `u16` pairs.
    Packed,
}

impl FromStr for RuleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "packed" | "base64" => Ok(Self::Packed),
            _ => Err(format!(
                "invalid rule format: {s:?} (expected \"text\" or \"packed\")"
            )),
        }
    }
}

impl RuleFormat {
    /// Guess the format of rule file contents.
    ///
    /// Text files open with a ``{LEFT} {RIGHT} {RESULT}`` line of three
    /// integers; anything else is treated as (possibly wrapped) base64.
    pub fn detect(data: &str) -> Self {
        let first = data.lines().map(str::trim).find(|line| !line.is_empty());
        match first {
            Some(line) if is_rule_triple(line) => Self::Text,
            _ => Self::Packed,
        }
    }
}

fn is_rule_triple(line: &str) -> bool {
    let fields: Vec<&str> = line.split_whitespace().collect();
    fields.len() == 3
        && fields
            .iter()
            .all(|f| f.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse rule file contents into ordered ``(left, right)`` pairs.
///
/// ## Arguments
/// * `data` - the file contents.
/// * `format` - the format; detected when `None`.
/// * `policy` - the record policy for either reader.
pub fn read_rules_str(
    data: &str,
    format: Option<RuleFormat>,
    policy: RecordPolicy,
) -> BMResult<Vec<Pair>> {
    match format.unwrap_or_else(|| RuleFormat::detect(data)) {
        RuleFormat::Text => read_text_rules(data.as_bytes(), policy),
        RuleFormat::Packed => decode_packed_rules(data, policy),
    }
}

/// Load a [`Vocabulary`] from a rule file.
///
/// ## Arguments
/// * `path` - the rule file.
/// * `format` - the format; detected when `None`.
/// * `policy` - the record policy for either reader.
pub fn load_vocabulary_path<P: AsRef<Path>>(
    path: P,
    format: Option<RuleFormat>,
    policy: RecordPolicy,
) -> BMResult<Vocabulary> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    let format = format.unwrap_or_else(|| RuleFormat::detect(&data));

    let rules = read_rules_str(&data, Some(format), policy)?;
    log::info!(
        "loaded {} merge rules ({format:?}) from {}",
        rules.len(),
        path.display()
    );

    Vocabulary::from_rules(rules)
}
