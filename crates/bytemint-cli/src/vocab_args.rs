use std::sync::Arc;

use bytemint::{
    DEFAULT_EOT_TOKEN,
    DEFAULT_VOCAB_CAPACITY,
    TokenId,
    Tokenizer,
    TokenizerOptions,
    Vocabulary,
    vocab::io::{RecordPolicy, RuleFormat, load_vocabulary_path},
};

/// Rule file selection arg group.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Merge rule file (text or base64 packed).
    #[arg(long)]
    pub vocab: String,

    /// Rule file format: "text" or "packed"; detected when omitted.
    #[arg(long)]
    pub format: Option<RuleFormat>,

    /// Reject packed files with an unpaired trailing word and text ids above 16 bits.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub strict: bool,
}

impl VocabArgs {
    /// The record policy for rule readers.
    pub fn policy(&self) -> RecordPolicy {
        if self.strict {
            RecordPolicy::Strict
        } else {
            RecordPolicy::Lenient
        }
    }

    /// Load the vocabulary.
    pub fn load_vocab(&self) -> Result<Arc<Vocabulary>, Box<dyn std::error::Error>> {
        let vocab = load_vocabulary_path(&self.vocab, self.format, self.policy())?;
        Ok(Arc::new(vocab))
    }
}

/// Tokenizer layout and ordering arg group.
#[derive(clap::Args, Debug)]
pub struct TokenizerArgs {
    /// Use the anticausal (reversed) token ordering.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub reverse: bool,

    /// Append the end-of-text token when encoding.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub eot: bool,

    /// The reserved end-of-text token id.
    #[arg(long, default_value_t = DEFAULT_EOT_TOKEN)]
    pub eot_token: TokenId,

    /// The padded vocabulary capacity.
    #[arg(long, default_value_t = DEFAULT_VOCAB_CAPACITY)]
    pub vocab_capacity: usize,

    /// Decode past the end-of-text token instead of stopping at it.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub keep_after_eot: bool,
}

impl TokenizerArgs {
    /// The tokenizer options.
    pub fn options(&self) -> TokenizerOptions {
        TokenizerOptions::default()
            .with_eot_token(self.eot_token)
            .with_vocab_capacity(self.vocab_capacity)
            .with_truncate_at_eot(!self.keep_after_eot)
    }

    /// Load a tokenizer over the selected vocabulary.
    pub fn load_tokenizer(
        &self,
        vocab: &VocabArgs,
    ) -> Result<Arc<Tokenizer>, Box<dyn std::error::Error>> {
        Ok(self.options().build(vocab.load_vocab()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(clap::Parser, Debug)]
    struct Probe {
        #[command(flatten)]
        vocab: VocabArgs,

        #[command(flatten)]
        tokenizer: TokenizerArgs,
    }

    #[test]
    fn test_defaults() {
        use clap::Parser;

        let probe = Probe::try_parse_from(["probe", "--vocab", "rules.vocab"]).unwrap();
        assert_eq!(probe.vocab.format, None);
        assert_eq!(probe.vocab.policy(), RecordPolicy::Lenient);
        assert_eq!(probe.tokenizer.options(), TokenizerOptions::default());
    }

    #[test]
    fn test_overrides() {
        use clap::Parser;

        let probe = Probe::try_parse_from([
            "probe",
            "--vocab",
            "rules.base64.txt",
            "--format",
            "packed",
            "--strict",
            "--eot-token",
            "1000",
            "--vocab-capacity",
            "1024",
            "--keep-after-eot",
        ])
        .unwrap();
        assert_eq!(probe.vocab.format, Some(RuleFormat::Packed));
        assert_eq!(probe.vocab.policy(), RecordPolicy::Strict);

        let options = probe.tokenizer.options();
        assert_eq!(options.eot_token, 1000);
        assert_eq!(options.vocab_capacity, 1024);
        assert!(!options.truncate_at_eot);
    }

    #[test]
    fn test_load_tokenizer() {
        let dir = tempdir::TempDir::new("bytemint_cli_vocab").unwrap();
        let path = dir.path().join("rules.vocab");
        std::fs::write(&path, "104 105 256\n").unwrap();

        let vocab = VocabArgs {
            vocab: path.to_string_lossy().into_owned(),
            format: None,
            strict: false,
        };
        let args = TokenizerArgs {
            reverse: false,
            eot: false,
            eot_token: DEFAULT_EOT_TOKEN,
            vocab_capacity: DEFAULT_VOCAB_CAPACITY,
            keep_after_eot: false,
        };
        let tokenizer = args.load_tokenizer(&vocab).unwrap();
        assert_eq!(tokenizer.encode("hi", false, false), vec![256]);
    }
}
