//! # Text Rule Files
//!
//! One rule per line:
//! ```text
//! {LEFT} {RIGHT} {RESULT}
//! ```
//!
//! `RESULT` must be ``256 + rule_index``; it is verified and discarded,
//! since the builder recomputes ids positionally.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{BMResult, BytemintError},
    types::{Pair, TokenId},
    vocab::{MergeRuleTable, io::RecordPolicy, token::BYTE_TOKEN_COUNT},
};

/// Parse one non-blank rule line into ``(left, right, result)``.
fn parse_rule_line(
    line_no: usize,
    line: &str,
) -> BMResult<(TokenId, TokenId, TokenId)> {
    let malformed = || BytemintError::MalformedLine {
        line: line_no,
        content: line.to_string(),
    };

    let mut parts = line.split_whitespace().map(|s| s.parse::<TokenId>());
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(left)), Some(Ok(right)), Some(Ok(result)), None) => Ok((left, right, result)),
        _ => Err(malformed()),
    }
}

/// Read the ordered ``(left, right)`` rules from a text rule stream.
///
/// Blank lines are skipped. Under [`RecordPolicy::Strict`] every id must fit
/// in 16 bits, matching what the packed format can carry.
///
/// ## Errors
/// * [`BytemintError::MalformedLine`] if a line is not exactly three integers.
/// * [`BytemintError::WideTokenId`] if a strict read meets an id above ``u16::MAX``.
/// * [`BytemintError::RuleIdMismatch`] if a result id is out of sequence.
pub fn read_text_rules<R: BufRead>(
    reader: R,
    policy: RecordPolicy,
) -> BMResult<Vec<Pair>> {
    let mut rules: Vec<Pair> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let (left, right, result) = parse_rule_line(line_no, &line)?;

        if policy == RecordPolicy::Strict
            && let Some(id) = [left, right, result]
                .into_iter()
                .find(|&id| id > u16::MAX as TokenId)
        {
            return Err(BytemintError::WideTokenId { line: line_no, id });
        }

        let expected = (BYTE_TOKEN_COUNT + rules.len()) as TokenId;
        if result != expected {
            return Err(BytemintError::RuleIdMismatch {
                line: line_no,
                expected,
                found: result,
            });
        }

        rules.push((left, right));
    }

    Ok(rules)
}

/// Load the ordered ``(left, right)`` rules from a text rule file.
pub fn load_text_rules_path<P: AsRef<Path>>(
    path: P,
    policy: RecordPolicy,
) -> BMResult<Vec<Pair>> {
    let reader = BufReader::new(File::open(path)?);
    read_text_rules(reader, policy)
}

/// Write a rule table as a text rule stream.
pub fn write_text_rules<W: Write>(
    rules: &MergeRuleTable,
    writer: &mut W,
) -> BMResult<()> {
    for rule in rules.rules() {
        writeln!(writer, "{} {} {}", rule.left, rule.right, rule.result)?;
    }
    Ok(())
}

/// Save a rule table to a text rule file.
pub fn save_text_rules_path<P: AsRef<Path>>(
    rules: &MergeRuleTable,
    path: P,
) -> BMResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_text_rules(rules, &mut writer)?;
    writer.flush()?;
    Ok(())
}
