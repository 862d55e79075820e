mod convert;
mod decode;
mod encode;
mod history;
mod info;

/// Subcommands for bytemint.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode text lines into token ids.
    Encode(encode::EncodeArgs),

    /// Decode lines of token ids into text.
    Decode(decode::DecodeArgs),

    /// Print the merge history of a token as JSON.
    History(history::HistoryArgs),

    /// Convert a rule file between the text and packed formats.
    Convert(convert::ConvertArgs),

    /// Describe a vocabulary and its token layout.
    Info(info::InfoArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::History(cmd) => cmd.run(),
            Commands::Convert(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
        }
    }
}
