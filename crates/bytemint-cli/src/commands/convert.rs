use std::io::Write;

use bytemint::{
    BMResult,
    vocab::{
        MergeRuleTable,
        io::{RuleFormat, write_packed_rules, write_text_rules},
    },
};

use crate::{input_output::OutputArgs, vocab_args::VocabArgs};

/// Args for the convert command.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    /// Target format: "text" or "packed".
    #[arg(long, default_value = "packed")]
    to: RuleFormat,

    #[command(flatten)]
    output: OutputArgs,
}

impl ConvertArgs {
    /// Run the convert command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.vocab.load_vocab()?;

        let mut writer = self.output.open_writer()?;
        write_rules(vocab.rules(), self.to, &mut writer)?;
        writer.flush()?;

        log::info!("wrote {} rules as {:?}", vocab.rules().len(), self.to);
        Ok(())
    }
}

fn write_rules<W: Write>(
    rules: &MergeRuleTable,
    format: RuleFormat,
    writer: &mut W,
) -> BMResult<()> {
    match format {
        RuleFormat::Text => write_text_rules(rules, writer),
        RuleFormat::Packed => {
            write_packed_rules(rules, writer)?;
            writeln!(writer)?;
            Ok(())
        }
    }
}
