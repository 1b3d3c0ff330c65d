//! Secret Sharing Scheme errors.

use crate::encoding::{DecodeError, ShareValidationError};
use math_lib::errors::InterpolationError;
use thiserror::Error;

/// Share creation failure.
#[derive(Error, Debug)]
pub enum CreateSharesError {
    /// Either the threshold or the number of shares is zero.
    #[error("the threshold and the number of shares must be positive")]
    InvalidThreshold,

    /// The threshold is larger than the number of shares.
    #[error("threshold {minimum} exceeds the number of shares {shares}")]
    ThresholdExceedsShareCount {
        /// The requested threshold.
        minimum: usize,

        /// The requested number of shares.
        shares: usize,
    },

    /// The secret is empty.
    #[error("the secret is empty")]
    EmptySecret,

    /// A 32 byte window of the secret is not representable in the field.
    #[error("secret chunk {chunk} is not representable in the field")]
    SecretChunkOverflow {
        /// The index of the offending chunk.
        chunk: usize,
    },

    /// The random number generator failed.
    #[error("randomness source failed: {0}")]
    Randomness(#[from] rand::Error),
}

/// Share combination failure.
#[derive(Error, Debug, PartialEq)]
pub enum CombineSharesError {
    /// No shares were provided.
    #[error("no shares provided")]
    EmptyShareList,

    /// A share contains a block that can't be decoded.
    #[error("share {index} is malformed: {source}")]
    MalformedShare {
        /// The position of the share in the input.
        index: usize,

        /// The decoding error.
        source: DecodeError,
    },

    /// A share is not valid for the encoding.
    #[error("share {index} is invalid: {source}")]
    InvalidShare {
        /// The position of the share in the input.
        index: usize,

        /// The validation error.
        source: ShareValidationError,
    },

    /// A share holds a different number of chunks than the first one.
    #[error("share {index} holds {found} chunks but {expected} were expected")]
    InconsistentShareFormat {
        /// The position of the share in the input.
        index: usize,

        /// The number of chunks in the first share.
        expected: usize,

        /// The number of chunks in this share.
        found: usize,
    },

    /// The shares could not be interpolated.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

impl CombineSharesError {
    /// Classifies a validation failure for the share at `index`.
    pub(crate) fn from_validation(index: usize, error: ShareValidationError) -> Self {
        match error {
            ShareValidationError::Malformed { source, .. } => Self::MalformedShare { index, source },
            source => Self::InvalidShare { index, source },
        }
    }
}
