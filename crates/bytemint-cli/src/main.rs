mod commands;
mod input_output;
mod logging;
mod vocab_args;

use clap::Parser;
use commands::Commands;

use crate::logging::LogArgs;

/// bytemint: byte-pair merge tokenizer.
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    args.command.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode() {
        let args = Args::try_parse_from([
            "bytemint",
            "-vv",
            "encode",
            "--vocab",
            "rules.vocab",
            "--reverse",
            "--eot",
            "--last-rule",
            "12",
        ])
        .unwrap();
        assert!(matches!(args.command, Commands::Encode(_)));
    }

    #[test]
    fn test_parse_history_requires_id() {
        assert!(Args::try_parse_from(["bytemint", "history", "--vocab", "rules.vocab"]).is_err());
        assert!(
            Args::try_parse_from(["bytemint", "history", "--vocab", "rules.vocab", "300"]).is_ok()
        );
    }

    #[test]
    fn test_parse_bad_format() {
        assert!(
            Args::try_parse_from(["bytemint", "info", "--vocab", "x", "--format", "yaml"]).is_err()
        );
    }
}
