use crate::{
    args::{CombineArgs, Command, DemoArgs, SecretInput, SplitArgs, ValidateArgs},
    config::{CombineInputs, SharesFile},
    output::{CombineOutput, DemoOutput, DemoRecovery, Output, ShareValidity, SplitOutput, ValidateOutput},
};
use anyhow::{bail, Context, Result};
use log::info;
use shamir_sharing::{combine_shares, create_shares, validate_share, ShareEncoding};
use std::fs;

/// The secret split by the demo when none is provided.
pub const DEMO_SECRET: &str =
    "threshold secret sharing demo: this text spans several 32 byte chunks so every share holds four points";

/// Runs commands.
#[derive(Default)]
pub struct Runner;

impl Runner {
    /// Runs a command and returns its output.
    pub fn run(&self, command: Command) -> Result<Output> {
        match command {
            Command::Split(args) => self.split(args).map(Output::Split),
            Command::Combine(args) => self.combine(args).map(Output::Combine),
            Command::Validate(args) => Ok(Output::Validate(self.validate(args))),
            Command::Demo(args) => self.demo(args).map(Output::Demo),
        }
    }

    fn split(&self, args: SplitArgs) -> Result<SplitOutput> {
        let SplitArgs { minimum, shares, encoding, secret } = args;
        let secret = Self::read_secret(secret)?;
        let shares = create_shares(minimum, shares, &secret, encoding).context("failed to split secret")?;
        info!("Generated {} {encoding} shares", shares.len());
        Ok(SplitOutput { minimum, share_count: shares.len(), encoding, shares })
    }

    fn read_secret(input: SecretInput) -> Result<Vec<u8>> {
        match (input.secret, input.secret_file) {
            (Some(secret), _) => Ok(secret.into_bytes()),
            (None, Some(path)) => fs::read(&path).with_context(|| format!("failed to read {}", path.display())),
            (None, None) => bail!("no secret provided"),
        }
    }

    fn combine(&self, args: CombineArgs) -> Result<CombineOutput> {
        let CombineArgs { shares, encoding, shares_file, hex } = args;
        let file = match shares_file {
            Some(path) => Some(
                SharesFile::load(&path).with_context(|| format!("failed to load shares from {}", path.display()))?,
            ),
            None => None,
        };
        let inputs = CombineInputs::merge(shares, encoding, file);
        if inputs.shares.is_empty() {
            bail!("no shares provided");
        }
        let secret = combine_shares(&inputs.shares, inputs.encoding).context("failed to combine shares")?;
        Ok(CombineOutput::new(&secret, hex))
    }

    fn validate(&self, args: ValidateArgs) -> ValidateOutput {
        let ValidateArgs { shares, encoding } = args;
        let shares = shares
            .iter()
            .enumerate()
            .map(|(index, share)| match validate_share(share, encoding) {
                Ok(chunks) => ShareValidity { index, valid: true, chunks: Some(chunks), reason: None },
                Err(e) => ShareValidity { index, valid: false, chunks: None, reason: Some(e.to_string()) },
            })
            .collect();
        ValidateOutput { encoding, shares }
    }

    fn demo(&self, args: DemoArgs) -> Result<DemoOutput> {
        const MINIMUM: usize = 3;
        const SHARES: usize = 6;

        let DemoArgs { secret, encoding } = args;
        let secret = secret.unwrap_or_else(|| DEMO_SECRET.to_string());
        let shares = create_shares(MINIMUM, SHARES, secret.as_bytes(), encoding).context("failed to split secret")?;

        let mut recoveries = Vec::new();
        for share_indexes in [(0..MINIMUM).collect::<Vec<_>>(), (SHARES - MINIMUM..SHARES).collect()] {
            let subset: Vec<&String> = share_indexes.iter().filter_map(|index| shares.get(*index)).collect();
            let recovered = Self::recover(&subset, encoding)?;
            recoveries.push(DemoRecovery { share_indexes, secret: recovered });
        }
        let split = SplitOutput { minimum: MINIMUM, share_count: shares.len(), encoding, shares };
        Ok(DemoOutput { secret, split, recoveries })
    }

    fn recover(shares: &[&String], encoding: ShareEncoding) -> Result<String> {
        let secret = combine_shares(shares, encoding).context("failed to combine shares")?;
        Ok(String::from_utf8_lossy(&secret).into_owned())
    }
}
