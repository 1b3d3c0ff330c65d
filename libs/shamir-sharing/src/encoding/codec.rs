//! Share codec.

use super::{validator::validated_elements, ShareEncoding, ShareValidationError};
use crate::{chunks::CHUNK_BYTES, FieldElement, SharePoint};
use base64::{engine::general_purpose::URL_SAFE, Engine};
use num_bigint::BigUint;

/// An error when decoding a single encoded field element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input contains characters outside the encoding's alphabet.
    #[error("invalid characters for the encoding")]
    Alphabet,

    /// The input doesn't have the width of a single encoded element.
    #[error("expected {expected} characters, found {found}")]
    Width {
        /// The expected number of characters.
        expected: usize,

        /// The number of characters found.
        found: usize,
    },

    /// The input decodes into the wrong number of bytes.
    #[error("invalid value length")]
    ValueLength,

    /// The decoded value is not below the prime.
    #[error("value is not a field element")]
    OutOfField,
}

impl ShareEncoding {
    /// Encode a field element into exactly [ShareEncoding::element_width] characters.
    pub fn encode_element(&self, element: &FieldElement) -> String {
        let bytes = element.to_be_bytes();
        match self {
            ShareEncoding::Base64 => URL_SAFE.encode(bytes),
            ShareEncoding::Hex => hex::encode(bytes),
        }
    }

    /// Decode a field element encoded with [ShareEncoding::encode_element].
    pub fn decode_element(&self, encoded: &str) -> Result<FieldElement, DecodeError> {
        let value = self.decode_block(encoded.as_bytes())?;
        FieldElement::try_from(&value).map_err(|_| DecodeError::OutOfField)
    }

    /// Decode a single fixed width block into the integer it represents, without any range check.
    pub(crate) fn decode_block(&self, block: &[u8]) -> Result<BigUint, DecodeError> {
        let expected = self.element_width();
        if block.len() != expected {
            return Err(DecodeError::Width { expected, found: block.len() });
        }
        let bytes = match self {
            ShareEncoding::Base64 => URL_SAFE.decode(block).map_err(|_| DecodeError::Alphabet)?,
            ShareEncoding::Hex => hex::decode(block).map_err(|_| DecodeError::Alphabet)?,
        };
        if bytes.len() != CHUNK_BYTES {
            return Err(DecodeError::ValueLength);
        }
        Ok(BigUint::from_bytes_be(&bytes))
    }

    /// Encode a point as its `x` block immediately followed by its `y` block.
    pub fn encode_point(&self, point: &SharePoint) -> String {
        let mut encoded = self.encode_element(point.x());
        encoded.push_str(&self.encode_element(point.y()));
        encoded
    }

    /// Encode a share, that is one point per chunk in chunk order with no separator.
    pub fn encode_share<'a, I>(&self, points: I) -> String
    where
        I: IntoIterator<Item = &'a SharePoint>,
    {
        points.into_iter().map(|point| self.encode_point(point)).collect()
    }

    /// Decode a share into its points.
    ///
    /// The share is validated first, see [validate_share](super::validate_share).
    pub fn decode_share(&self, share: &str) -> Result<DecodedShare, ShareValidationError> {
        let mut elements = validated_elements(share, *self)?.into_iter();
        let mut points = Vec::new();
        while let (Some(x), Some(y)) = (elements.next(), elements.next()) {
            points.push(SharePoint::new(x, y));
        }
        Ok(DecodedShare { points })
    }
}

/// A decoded share: one point per chunk of the secret, in chunk order.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedShare {
    points: Vec<SharePoint>,
}

impl DecodedShare {
    /// The number of chunks in this share.
    pub fn chunk_count(&self) -> usize {
        self.points.len()
    }

    /// The points in this share.
    pub fn points(&self) -> &[SharePoint] {
        &self.points
    }

    /// Consume the share and return its points.
    pub fn into_points(self) -> Vec<SharePoint> {
        self.points
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::SharePrime;
    use math_lib::modular::Modular;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    fn maximum() -> FieldElement {
        FieldElement::new(SharePrime::modulo().clone() - 1u32)
    }

    #[rstest]
    fn element_round_trip(
        #[values(ShareEncoding::Base64, ShareEncoding::Hex)] encoding: ShareEncoding,
        #[values(FieldElement::zero(), FieldElement::one(), FieldElement::from_u64(u64::MAX), maximum())]
        element: FieldElement,
    ) {
        let encoded = encoding.encode_element(&element);
        assert_eq!(encoded.len(), encoding.element_width());
        assert_eq!(encoding.decode_element(&encoded).unwrap(), element);
    }

    #[rstest]
    fn random_element_round_trip(#[values(ShareEncoding::Base64, ShareEncoding::Hex)] encoding: ShareEncoding) {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let element = FieldElement::gen_random_with_rng(&mut rng).unwrap();
            let encoded = encoding.encode_element(&element);
            assert_eq!(encoded.len(), encoding.element_width());
            assert_eq!(encoding.decode_element(&encoded).unwrap(), element);
        }
    }

    #[test]
    fn known_encodings() {
        let one = FieldElement::one();
        assert_eq!(ShareEncoding::Hex.encode_element(&one), format!("{}1", "0".repeat(63)));
        assert_eq!(ShareEncoding::Base64.encode_element(&one), "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAE=");
        assert_eq!(ShareEncoding::Hex.encode_element(&maximum()), format!("{}ff42", "f".repeat(60)));
    }

    #[test]
    fn base64_uses_url_safe_alphabet() {
        // 0xfbff... encodes to characters that differ between the standard and url safe alphabets.
        let mut bytes = vec![0xfb, 0xff];
        bytes.resize(32, 0);
        let element = FieldElement::try_from_be_bytes(&bytes).unwrap();
        let encoded = ShareEncoding::Base64.encode_element(&element);
        assert!(encoded.starts_with("-_"), "{encoded}");
        assert!(!encoded.contains('+') && !encoded.contains('/'));
    }

    #[rstest]
    #[case::hex_alphabet(ShareEncoding::Hex, format!("{}zz", "0".repeat(62)), DecodeError::Alphabet)]
    #[case::base64_alphabet(ShareEncoding::Base64, format!("{}*=", "A".repeat(42)), DecodeError::Alphabet)]
    #[case::standard_alphabet(ShareEncoding::Base64, format!("+{}=", "A".repeat(42)), DecodeError::Alphabet)]
    #[case::short(ShareEncoding::Hex, "00".to_string(), DecodeError::Width { expected: 64, found: 2 })]
    #[case::overflow(ShareEncoding::Hex, "f".repeat(64), DecodeError::OutOfField)]
    #[case::value_length(ShareEncoding::Base64, "A".repeat(44), DecodeError::ValueLength)]
    fn invalid_elements(#[case] encoding: ShareEncoding, #[case] encoded: String, #[case] expected: DecodeError) {
        assert_eq!(encoding.decode_element(&encoded), Err(expected));
    }

    #[rstest]
    fn share_round_trip(#[values(ShareEncoding::Base64, ShareEncoding::Hex)] encoding: ShareEncoding) {
        let points: Vec<_> = (1..=3)
            .map(|chunk| SharePoint::new(FieldElement::from_u32(chunk), FieldElement::from_u32(chunk * 100)))
            .collect();
        let share = encoding.encode_share(&points);
        assert_eq!(share.len(), 3 * encoding.pair_width());

        let decoded = encoding.decode_share(&share).unwrap();
        assert_eq!(decoded.chunk_count(), 3);
        assert_eq!(decoded.into_points(), points);
    }
}
