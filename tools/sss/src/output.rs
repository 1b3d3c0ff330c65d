use crate::args::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use shamir_sharing::ShareEncoding;
use std::fmt;

/// The shares generated by a split.
#[derive(Debug, Serialize)]
pub struct SplitOutput {
    /// The number of shares needed to reconstruct the secret.
    pub minimum: usize,

    /// The number of shares generated.
    pub share_count: usize,

    /// The share encoding.
    pub encoding: ShareEncoding,

    /// The shares.
    pub shares: Vec<String>,
}

impl fmt::Display for SplitOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for share in &self.shares {
            writeln!(f, "{share}")?;
        }
        Ok(())
    }
}

/// A recovered secret.
#[derive(Debug, Serialize)]
pub struct CombineOutput {
    /// The secret decoded as UTF-8, lossily.
    pub secret: String,

    /// The secret's bytes as hex.
    pub secret_hex: String,

    /// Whether text output should use the hex form.
    #[serde(skip)]
    pub prefer_hex: bool,
}

impl CombineOutput {
    /// Builds the output for a recovered secret.
    pub fn new(secret: &[u8], prefer_hex: bool) -> Self {
        Self { secret: String::from_utf8_lossy(secret).into_owned(), secret_hex: hex::encode(secret), prefer_hex }
    }
}

impl fmt::Display for CombineOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefer_hex {
            true => writeln!(f, "{}", self.secret_hex),
            false => writeln!(f, "{}", self.secret),
        }
    }
}

/// The validation result of a single share.
#[derive(Debug, Serialize)]
pub struct ShareValidity {
    /// The position of the share in the input.
    pub index: usize,

    /// Whether the share is valid.
    pub valid: bool,

    /// The number of chunks in the share, if it's valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<usize>,

    /// Why the share is invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The validation results for a set of shares.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    /// The share encoding.
    pub encoding: ShareEncoding,

    /// The result for every share.
    pub shares: Vec<ShareValidity>,
}

impl ValidateOutput {
    /// Whether every share is valid.
    pub fn all_valid(&self) -> bool {
        self.shares.iter().all(|share| share.valid)
    }
}

impl fmt::Display for ValidateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for share in &self.shares {
            match (&share.chunks, &share.reason) {
                (Some(chunks), _) => writeln!(f, "share {}: valid ({chunks} chunks)", share.index)?,
                (None, Some(reason)) => writeln!(f, "share {}: invalid, {reason}", share.index)?,
                (None, None) => writeln!(f, "share {}: invalid", share.index)?,
            }
        }
        Ok(())
    }
}

/// A secret recovered from one subset of the demo shares.
#[derive(Debug, Serialize)]
pub struct DemoRecovery {
    /// The indexes of the shares used.
    pub share_indexes: Vec<usize>,

    /// The recovered secret.
    pub secret: String,
}

/// The outcome of the demo.
#[derive(Debug, Serialize)]
pub struct DemoOutput {
    /// The secret that was split.
    pub secret: String,

    /// The generated shares.
    #[serde(flatten)]
    pub split: SplitOutput,

    /// The recoveries performed.
    pub recoveries: Vec<DemoRecovery>,
}

impl fmt::Display for DemoOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "shares: {}", self.split.shares.len())?;
        for (index, share) in self.split.shares.iter().enumerate() {
            writeln!(f, "shares[{index}]: {share}")?;
        }
        writeln!(f)?;
        writeln!(f, "secret: {}", self.secret)?;
        for recovery in &self.recoveries {
            writeln!(f, "combining shares {:?}", recovery.share_indexes)?;
            writeln!(f, "secret: {}", recovery.secret)?;
        }
        Ok(())
    }
}

/// The output of any command.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// See [SplitOutput].
    Split(SplitOutput),

    /// See [CombineOutput].
    Combine(CombineOutput),

    /// See [ValidateOutput].
    Validate(ValidateOutput),

    /// See [DemoOutput].
    Demo(DemoOutput),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Split(output) => fmt::Display::fmt(output, f),
            Output::Combine(output) => fmt::Display::fmt(output, f),
            Output::Validate(output) => fmt::Display::fmt(output, f),
            Output::Demo(output) => fmt::Display::fmt(output, f),
        }
    }
}

#[derive(Serialize)]
struct ErrorOutput {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    causes: Vec<String>,
}

/// Renders a command's output in the requested format.
pub fn serialize_output(format: OutputFormat, output: &Output) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(output.to_string().trim_end().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
    }
}

/// Renders an error in the requested format.
pub fn serialize_error(format: OutputFormat, e: &anyhow::Error) -> String {
    match format {
        OutputFormat::Text => format!("error: {e:#}"),
        OutputFormat::Json => {
            let error = e.to_string();
            let causes: Vec<String> = e.chain().skip(1).map(|cause| cause.to_string()).collect();
            serde_json::to_string_pretty(&ErrorOutput { error, causes }).unwrap_or_else(|_| format!("{e:#}"))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::anyhow;

    fn split() -> SplitOutput {
        SplitOutput {
            minimum: 2,
            share_count: 2,
            encoding: ShareEncoding::Hex,
            shares: vec!["aa".to_string(), "bb".to_string()],
        }
    }

    #[test]
    fn split_as_text() {
        let text = serialize_output(OutputFormat::Text, &Output::Split(split())).unwrap();
        assert_eq!(text, "aa\nbb");
    }

    #[test]
    fn split_as_json() {
        let json = serialize_output(OutputFormat::Json, &Output::Split(split())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "minimum": 2, "share_count": 2, "encoding": "hex", "shares": ["aa", "bb"] })
        );
    }

    #[test]
    fn combine_output() {
        let output = CombineOutput::new(b"HELLO", false);
        assert_eq!(output.to_string(), "HELLO\n");
        let output = CombineOutput::new(b"HELLO", true);
        assert_eq!(output.to_string(), "48454c4c4f\n");
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json, serde_json::json!({ "secret": "HELLO", "secret_hex": "48454c4c4f" }));
    }

    #[test]
    fn error_with_causes() {
        let e = anyhow!("inner").context("outer");
        let json = serialize_error(OutputFormat::Json, &e);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({ "error": "outer", "causes": ["inner"] }));
        assert_eq!(serialize_error(OutputFormat::Text, &e), "error: outer: inner");
    }
}
