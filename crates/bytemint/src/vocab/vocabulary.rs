//! # Vocabulary
//!
//! A [`Vocabulary`] owns the [`TokenRegistry`] and the [`MergeRuleTable`].
//! It is built once by [`VocabularyBuilder`] and is immutable thereafter.

use crate::{
    errors::{BMResult, BytemintError},
    types::{Pair, TokenId},
    vocab::{
        history::TokenHistory,
        merge_rules::{MergeRank, MergeRule, MergeRuleTable},
        token::{BYTE_TOKEN_COUNT, Token},
        token_registry::TokenRegistry,
    },
};

/// Builds a [`Vocabulary`] by replaying merge rules in order.
///
/// Each pushed ``(left, right)`` pair refers to token ids minted so far.
#[derive(Debug, Clone, Default)]
pub struct VocabularyBuilder {
    registry: TokenRegistry,
    rules: MergeRuleTable,
}

impl VocabularyBuilder {
    /// Create a builder holding only the 256 byte tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder sized for `rule_count` merge rules.
    pub fn with_capacity(rule_count: usize) -> Self {
        Self {
            registry: TokenRegistry::with_capacity(BYTE_TOKEN_COUNT + rule_count),
            rules: MergeRuleTable::with_capacity(rule_count),
        }
    }

    /// The number of tokens minted so far.
    pub fn token_count(&self) -> usize {
        self.registry.len()
    }

    /// Apply the next merge rule, minting its result token.
    ///
    /// ## Returns
    /// The id of the new token.
    ///
    /// ## Errors
    /// [`BytemintError::UnknownOperand`] if either operand is not yet minted.
    pub fn push_rule(
        &mut self,
        left: TokenId,
        right: TokenId,
    ) -> BMResult<TokenId> {
        if !self.registry.contains(left) || !self.registry.contains(right) {
            return Err(BytemintError::UnknownOperand {
                rule: self.rules.len(),
                left,
                right,
                token_count: self.registry.len(),
            });
        }

        let result = self.registry.mint_merged(left, right);
        self.rules.push(MergeRule {
            left,
            right,
            result,
        });
        Ok(result)
    }

    /// Apply a sequence of merge rules.
    pub fn extend_rules<I>(
        &mut self,
        pairs: I,
    ) -> BMResult<()>
    where
        I: IntoIterator<Item = Pair>,
    {
        for (left, right) in pairs {
            self.push_rule(left, right)?;
        }
        Ok(())
    }

    /// Finish construction.
    pub fn build(self) -> Vocabulary {
        log::debug!(
            "built vocabulary: {} tokens, {} rules, {} shadowed display strings",
            self.registry.len(),
            self.rules.len(),
            self.registry.shadowed_displays(),
        );
        Vocabulary {
            registry: self.registry,
            rules: self.rules,
        }
    }
}

/// An immutable byte-pair vocabulary.
///
/// Safe to share read-only across threads; nothing mutates it after
/// [`VocabularyBuilder::build`].
#[derive(Debug, Clone)]
pub struct Vocabulary {
    registry: TokenRegistry,
    rules: MergeRuleTable,
}

impl Default for Vocabulary {
    fn default() -> Self {
        VocabularyBuilder::new().build()
    }
}

impl Vocabulary {
    /// Build a vocabulary from an ordered sequence of ``(left, right)`` rules.
    ///
    /// ## Errors
    /// [`BytemintError::UnknownOperand`]; no vocabulary is produced on error.
    pub fn from_rules<I>(pairs: I) -> BMResult<Self>
    where
        I: IntoIterator<Item = Pair>,
    {
        let pairs = pairs.into_iter();
        let mut builder = VocabularyBuilder::with_capacity(pairs.size_hint().0);
        builder.extend_rules(pairs)?;
        Ok(builder.build())
    }

    /// The number of tokens; ``256 + rule_count``.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// The token registry.
    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    /// The merge rule table.
    pub fn rules(&self) -> &MergeRuleTable {
        &self.rules
    }

    /// Get a token by id.
    pub fn token(
        &self,
        id: TokenId,
    ) -> Option<&Token> {
        self.registry.get(id)
    }

    /// Get a token by id, failing with [`BytemintError::UnknownTokenId`].
    pub fn try_token(
        &self,
        id: TokenId,
    ) -> BMResult<&Token> {
        self.registry.try_get(id)
    }

    /// The byte sequence of a token.
    pub fn token_bytes(
        &self,
        id: TokenId,
    ) -> BMResult<&[u8]> {
        self.try_token(id).map(Token::bytes)
    }

    /// Look up a token by display string (last minted wins).
    pub fn lookup_display(
        &self,
        display: &str,
    ) -> Option<&Token> {
        self.registry.lookup_display(display)
    }

    /// Look up the highest-priority rule for an adjacent pair.
    pub fn lookup_pair(
        &self,
        pair: &Pair,
    ) -> Option<MergeRank> {
        self.rules.lookup_pair(pair)
    }

    /// Build the provenance tree of a token.
    pub fn history_tree(
        &self,
        id: TokenId,
    ) -> BMResult<TokenHistory> {
        TokenHistory::build(self, id)
    }
}
