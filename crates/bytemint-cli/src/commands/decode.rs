use std::io::{BufRead, Write};

use bytemint::{TokenId, Tokenizer};

use crate::{
    input_output::{InputArgs, OutputArgs},
    vocab_args::{TokenizerArgs, VocabArgs},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// Fail on invalid UTF-8 instead of substituting U+FFFD.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    strict_utf8: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.load_tokenizer(&self.vocab)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_decode(
            &mut reader,
            &mut writer,
            &tokenizer,
            self.tokenizer.reverse,
            self.strict_utf8,
        )
    }
}

/// Decode each line of whitespace separated ids.
fn run_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer,
    reverse: bool,
    strict_utf8: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for (lineno, line) in reader.lines().enumerate() {
        let tokens = line?
            .split_whitespace()
            .map(|s| {
                s.parse::<TokenId>()
                    .map_err(|e| format!("line {}: bad token id {s:?}: {e}", lineno + 1))
            })
            .collect::<Result<Vec<TokenId>, String>>()?;

        let text = if strict_utf8 {
            tokenizer.decode_text_strict(&tokens, reverse)?
        } else {
            tokenizer.decode_text(&tokens, reverse)?
        };

        write!(writer, "{text}")?;
        writer.flush()?;
    }
    Ok(())
}
