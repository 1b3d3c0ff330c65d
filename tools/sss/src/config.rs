use serde::Deserialize;
use shamir_sharing::ShareEncoding;
use std::path::Path;

/// A file holding the shares to be combined.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SharesFile {
    /// The encoding of the shares.
    #[serde(default)]
    pub encoding: Option<ShareEncoding>,

    /// The shares.
    #[serde(default)]
    pub shares: Vec<String>,
}

impl SharesFile {
    /// Loads the shares from a YAML or JSON file, the format is picked based on the extension.
    pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        builder = builder.add_source(config::File::from(path));
        builder.build()?.try_deserialize()
    }
}

/// The inputs to a combine operation after merging the command line and the shares file.
#[derive(Clone, Debug, PartialEq)]
pub struct CombineInputs {
    /// The shares to combine.
    pub shares: Vec<String>,

    /// The shares' encoding.
    pub encoding: ShareEncoding,
}

impl CombineInputs {
    /// Merges explicit command line values with an optional shares file.
    ///
    /// Shares given on the command line replace the ones in the file and an explicit encoding
    /// takes precedence over the file's one.
    pub fn merge(shares: Vec<String>, encoding: Option<ShareEncoding>, file: Option<SharesFile>) -> Self {
        let file = file.unwrap_or_default();
        let shares = if shares.is_empty() { file.shares } else { shares };
        let encoding = encoding.or(file.encoding).unwrap_or_default();
        Self { shares, encoding }
    }
}
