//! # Merge Rule Table
//!
//! The ordered ``(left, right) -> result`` list; list position is priority.

use crate::{
    types::{BMHashMap, Pair, TokenId, hash_map_with_capacity},
    vocab::token::BYTE_TOKEN_COUNT,
};

/// A single ``(left, right) -> result`` merge rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRule {
    /// Left operand.
    pub left: TokenId,

    /// Right operand.
    pub right: TokenId,

    /// The minted result token; always ``256 + rule_index``.
    pub result: TokenId,
}

impl MergeRule {
    /// The operand pair.
    pub fn pair(&self) -> Pair {
        (self.left, self.right)
    }

    /// The rule's position in the table.
    pub fn index(&self) -> usize {
        self.result as usize - BYTE_TOKEN_COUNT
    }
}

/// The rank of a rule matching an operand pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MergeRank {
    /// Position in the rule table; lower is higher priority.
    pub rule: usize,

    /// The result token of the rule.
    pub result: TokenId,
}

/// Ordered merge rules plus the precomputed ``pair -> rank`` lookup.
///
/// Only the highest-priority rule for a pair is reachable through
/// [`MergeRuleTable::lookup_pair`]; later rules on the same pair stay
/// in the table but never fire.
#[derive(Debug, Clone, Default)]
pub struct MergeRuleTable {
    rules: Vec<MergeRule>,
    pair_ranks: BMHashMap<Pair, MergeRank>,
}

impl MergeRuleTable {
    /// Create an empty table sized for `capacity` rules.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rules: Vec::with_capacity(capacity),
            pair_ranks: hash_map_with_capacity(capacity),
        }
    }

    /// Append a rule.
    ///
    /// The caller guarantees ``rule.result == 256 + self.len()``.
    pub(crate) fn push(
        &mut self,
        rule: MergeRule,
    ) {
        debug_assert_eq!(rule.result as usize, BYTE_TOKEN_COUNT + self.rules.len());

        let rank = MergeRank {
            rule: self.rules.len(),
            result: rule.result,
        };
        self.pair_ranks.entry(rule.pair()).or_insert(rank);
        self.rules.push(rule);
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Get the rule at `index`.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&MergeRule> {
        self.rules.get(index)
    }

    /// The rules, in priority order.
    pub fn rules(&self) -> &[MergeRule] {
        &self.rules
    }

    /// Look up the highest-priority rule for an adjacent pair.
    pub fn lookup_pair(
        &self,
        pair: &Pair,
    ) -> Option<MergeRank> {
        self.pair_ranks.get(pair).copied()
    }

    /// Iterate over the operand pairs, in priority order.
    pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
        self.rules.iter().map(MergeRule::pair)
    }
}
