use clap::{Args, Parser, Subcommand, ValueEnum};
use shamir_sharing::ShareEncoding;
use std::path::PathBuf;

/// Split secrets into threshold shares and combine them back.
#[derive(Parser, Debug)]
#[clap(about, version)]
pub struct Cli {
    /// The command to run.
    #[clap(subcommand)]
    pub command: Command,

    /// The output format.
    #[clap(short, long, global = true, value_enum, default_value_t)]
    pub output_format: OutputFormat,

    /// Enable debug logging, `RUST_LOG` takes precedence when set.
    #[clap(short, long, global = true)]
    pub verbose: bool,
}

/// The available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a secret into shares.
    Split(SplitArgs),

    /// Combine shares into the secret behind them.
    Combine(CombineArgs),

    /// Check whether shares are well formed.
    Validate(ValidateArgs),

    /// Split a secret 3 out of 6 and recover it from two disjoint sets of shares.
    Demo(DemoArgs),
}

/// The output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text.
    #[default]
    Text,

    /// JSON.
    Json,
}

/// The arguments to the split command.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// The number of shares needed to reconstruct the secret.
    #[clap(short, long)]
    pub minimum: usize,

    /// The number of shares to generate.
    #[clap(short, long)]
    pub shares: usize,

    /// The share encoding.
    #[clap(short, long, default_value_t)]
    pub encoding: ShareEncoding,

    /// The secret input.
    #[clap(flatten)]
    pub secret: SecretInput,
}

/// Where the secret to be split comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SecretInput {
    /// The secret as a UTF-8 string.
    #[clap(long)]
    pub secret: Option<String>,

    /// A file whose raw contents are the secret.
    #[clap(long)]
    pub secret_file: Option<PathBuf>,
}

/// The arguments to the combine command.
#[derive(Args, Debug)]
pub struct CombineArgs {
    /// The shares to combine.
    pub shares: Vec<String>,

    /// The share encoding, overrides the one in the shares file.
    #[clap(short, long)]
    pub encoding: Option<ShareEncoding>,

    /// A YAML or JSON file containing the shares and optionally their encoding.
    #[clap(short = 'f', long)]
    pub shares_file: Option<PathBuf>,

    /// Print the recovered secret as hex rather than as text.
    #[clap(long)]
    pub hex: bool,
}

/// The arguments to the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// The shares to validate.
    #[clap(required = true)]
    pub shares: Vec<String>,

    /// The share encoding.
    #[clap(short, long, default_value_t)]
    pub encoding: ShareEncoding,
}

/// The arguments to the demo command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// The secret to use instead of the built in one.
    #[clap(long)]
    pub secret: Option<String>,

    /// The share encoding.
    #[clap(short, long, default_value_t)]
    pub encoding: ShareEncoding,
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_split() {
        let cli = Cli::parse_from(["sss", "split", "-m", "2", "-s", "4", "-e", "hex", "--secret", "HELLO"]);
        let Command::Split(args) = cli.command else { panic!("not a split command") };
        assert_eq!(args.minimum, 2);
        assert_eq!(args.shares, 4);
        assert_eq!(args.encoding, ShareEncoding::Hex);
        assert_eq!(args.secret.secret.as_deref(), Some("HELLO"));
        assert_eq!(cli.output_format, OutputFormat::Text);
    }

    #[test]
    fn split_requires_a_secret() {
        assert!(Cli::try_parse_from(["sss", "split", "-m", "2", "-s", "4"]).is_err());
        assert!(Cli::try_parse_from(["sss", "split", "-m", "2", "-s", "4", "--secret", "a", "--secret-file", "b"])
            .is_err());
    }

    #[test]
    fn parse_combine() {
        let cli = Cli::parse_from(["sss", "--output-format", "json", "combine", "a", "b", "--hex"]);
        let Command::Combine(args) = cli.command else { panic!("not a combine command") };
        assert_eq!(args.shares, vec!["a", "b"]);
        assert_eq!(args.encoding, None);
        assert!(args.hex);
        assert_eq!(cli.output_format, OutputFormat::Json);
    }
}
