use std::io::{BufRead, Write};

use bytemint::Tokenizer;

use crate::{
    input_output::{InputArgs, OutputArgs},
    vocab_args::{TokenizerArgs, VocabArgs},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// Only apply merge rules up to this rule index.
    #[arg(long)]
    last_rule: Option<usize>,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.load_tokenizer(&self.vocab)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_encode(
            &mut reader,
            &mut writer,
            &tokenizer,
            self.last_rule,
            self.tokenizer.reverse,
            self.tokenizer.eot,
        )
    }
}

/// Encode each input line (end-of-line included) as one line of ids.
fn run_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer,
    last_rule: Option<usize>,
    reverse: bool,
    add_eot: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut line = Vec::new();
    while reader.read_until(b'\n', &mut line)? > 0 {
        let tokens = tokenizer.encode_raw(&line, last_rule, reverse, add_eot);

        for (idx, token) in tokens.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        line.clear();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bytemint::{TokenizerOptions, Vocabulary};

    use super::*;

    fn tokenizer() -> Arc<Tokenizer> {
        let vocab = Vocabulary::from_rules([(104, 105), (256, 10)]).unwrap();
        TokenizerOptions::default().build(Arc::new(vocab)).unwrap()
    }

    #[test]
    fn test_encode_lines() {
        let tok = tokenizer();
        let mut out = Vec::new();
        run_encode(&mut &b"hi\nhi"[..], &mut out, &tok, None, false, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "257\n256\n");
    }

    #[test]
    fn test_encode_partial_reversed() {
        let tok = tokenizer();
        let mut out = Vec::new();
        run_encode(&mut &b"hi\n"[..], &mut out, &tok, Some(0), true, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "50256 10 256\n");
    }
}
