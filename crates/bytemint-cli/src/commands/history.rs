use std::io::Write;

use bytemint::{TokenHistory, TokenId};

use crate::{input_output::OutputArgs, vocab_args::VocabArgs};

/// Args for the history command.
#[derive(clap::Args, Debug)]
pub struct HistoryArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    /// The token to trace.
    id: TokenId,

    /// Pretty-print the JSON tree.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pretty: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl HistoryArgs {
    /// Run the history command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.vocab.load_vocab()?;
        let tree = vocab.history_tree(self.id)?;

        let mut writer = self.output.open_writer()?;
        writeln!(writer, "{}", render(&tree, self.pretty)?)?;
        writer.flush()?;
        Ok(())
    }
}

fn render(
    tree: &TokenHistory,
    pretty: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(if pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        tree.to_json()?
    })
}
