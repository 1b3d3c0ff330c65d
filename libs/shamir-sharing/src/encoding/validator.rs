//! Share validation.

use super::{DecodeError, ShareEncoding};
use crate::FieldElement;
use num_traits::Zero;

/// A share failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareValidationError {
    /// The share's length is zero or not a multiple of the pair width.
    #[error("share length {length} is not a positive multiple of {pair_width}")]
    Length {
        /// The share's length.
        length: usize,

        /// The width of an encoded `(x, y)` pair.
        pair_width: usize,
    },

    /// A block in the share could not be decoded.
    #[error("block {block} is malformed: {source}")]
    Malformed {
        /// The index of the offending block.
        block: usize,

        /// The decoding error.
        source: DecodeError,
    },

    /// A block decodes to zero or to a value that is not below the prime.
    #[error("block {block} is out of range")]
    OutOfRange {
        /// The index of the offending block.
        block: usize,
    },
}

/// Validates a candidate share and returns the number of chunks it holds.
///
/// A share is valid when its length is a positive multiple of the encoding's pair width and every
/// fixed width block in it decodes to a value strictly between zero and the prime. Zero is
/// reserved as the interpolation target so it's never a valid coordinate.
pub fn validate_share(candidate: &str, encoding: ShareEncoding) -> Result<usize, ShareValidationError> {
    let elements = validated_elements(candidate, encoding)?;
    Ok(elements.len() / 2)
}

/// Checks whether a candidate share is valid, see [validate_share].
pub fn is_valid_share(candidate: &str, encoding: ShareEncoding) -> bool {
    validate_share(candidate, encoding).is_ok()
}

/// Validates a candidate share and decodes every block in it.
pub(crate) fn validated_elements(
    candidate: &str,
    encoding: ShareEncoding,
) -> Result<Vec<FieldElement>, ShareValidationError> {
    let length = candidate.len();
    let pair_width = encoding.pair_width();
    if length == 0 || length % pair_width != 0 {
        return Err(ShareValidationError::Length { length, pair_width });
    }
    candidate
        .as_bytes()
        .chunks_exact(encoding.element_width())
        .enumerate()
        .map(|(block, raw)| {
            let value =
                encoding.decode_block(raw).map_err(|source| ShareValidationError::Malformed { block, source })?;
            if value.is_zero() {
                return Err(ShareValidationError::OutOfRange { block });
            }
            FieldElement::try_from(&value).map_err(|_| ShareValidationError::OutOfRange { block })
        })
        .collect()
}
