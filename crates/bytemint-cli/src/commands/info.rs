use std::io::Write;

use bytemint::{TokenId, Tokenizer};

use crate::{
    input_output::OutputArgs,
    vocab_args::{TokenizerArgs, VocabArgs},
};

/// Args for the info command.
#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// Also describe these tokens.
    #[arg(long = "token")]
    tokens: Vec<TokenId>,

    #[command(flatten)]
    output: OutputArgs,
}

impl InfoArgs {
    /// Run the info command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.load_tokenizer(&self.vocab)?;

        let mut writer = self.output.open_writer()?;
        write_summary(&mut writer, &tokenizer)?;
        for &id in &self.tokens {
            write_token(&mut writer, &tokenizer, id)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn write_summary(
    writer: &mut dyn Write,
    tokenizer: &Tokenizer,
) -> Result<(), Box<dyn std::error::Error>> {
    let vocab = tokenizer.vocab();
    let options = tokenizer.options();

    let longest = vocab
        .registry()
        .iter()
        .map(|t| t.bytes().len())
        .max()
        .unwrap_or_default();

    writeln!(writer, "tokens:          {}", vocab.len())?;
    writeln!(writer, "merge rules:     {}", vocab.rules().len())?;
    writeln!(writer, "longest token:   {longest} bytes")?;
    writeln!(
        writer,
        "shadowed names:  {}",
        vocab.registry().shadowed_displays()
    )?;
    writeln!(writer, "eot token:       {}", options.eot_token)?;
    writeln!(writer, "vocab capacity:  {}", options.vocab_capacity)?;
    writeln!(
        writer,
        "unused slots:    {}",
        options.vocab_capacity - vocab.len() - 1
    )?;
    Ok(())
}

fn write_token(
    writer: &mut dyn Write,
    tokenizer: &Tokenizer,
    id: TokenId,
) -> Result<(), Box<dyn std::error::Error>> {
    let token = tokenizer.vocab().try_token(id)?;

    writeln!(writer)?;
    writeln!(writer, "token {id}: {:?}", token.debug_display())?;
    writeln!(writer, "  bytes:       {:?}", token.bytes())?;
    match token.composition() {
        Some((left, right)) => writeln!(writer, "  merge of:    {left} + {right}")?,
        None => writeln!(writer, "  merge of:    (byte)")?,
    }
    writeln!(
        writer,
        "  feeds rules: {} as left, {} as right",
        token.children_as_left().len(),
        token.children_as_right().len()
    )?;
    Ok(())
}
