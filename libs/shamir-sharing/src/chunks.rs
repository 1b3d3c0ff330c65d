//! Conversion between secrets and the field elements they are shared as.
//!
//! A secret is cut into 32 byte windows and each window is read as a big endian integer. The last
//! window is padded with zero bytes on its trailing side, which means merging the chunks back
//! can't tell padding apart from zero bytes that were part of the secret: those are stripped too.

use crate::FieldElement;

/// The number of secret bytes held by each chunk.
pub const CHUNK_BYTES: usize = 32;

/// A secret window doesn't fit in the field.
///
/// This happens when a 32 byte window reads as an integer that is not below the prime, which
/// requires its leading 31 bytes to be `0xff`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("secret chunk {chunk} is not representable in the field")]
pub struct ChunkOverflow {
    /// The index of the offending chunk.
    pub chunk: usize,
}

/// The number of chunks a secret of the given length is split into.
pub fn chunk_count(secret_length: usize) -> usize {
    secret_length.div_ceil(CHUNK_BYTES)
}

/// Splits a secret into field elements, one per 32 byte window.
pub fn split_secret(secret: &[u8]) -> Result<Vec<FieldElement>, ChunkOverflow> {
    secret
        .chunks(CHUNK_BYTES)
        .enumerate()
        .map(|(chunk, window)| {
            let mut bytes = window.to_vec();
            bytes.resize(CHUNK_BYTES, 0);
            FieldElement::try_from_be_bytes(&bytes).map_err(|_| ChunkOverflow { chunk })
        })
        .collect()
}

/// Merges field elements back into the secret they were split from.
///
/// Every chunk is restored to its full 32 byte width and trailing zero bytes are stripped from the
/// result.
pub fn merge_chunks(chunks: &[FieldElement]) -> Vec<u8> {
    let mut secret = Vec::with_capacity(chunks.len().saturating_mul(CHUNK_BYTES));
    for chunk in chunks {
        secret.extend(chunk.to_be_bytes());
    }
    while secret.last() == Some(&0) {
        secret.pop();
    }
    secret
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigUint;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1)]
    #[case(31, 1)]
    #[case(32, 1)]
    #[case(33, 2)]
    #[case(64, 2)]
    #[case(111, 4)]
    fn chunk_counts(#[case] length: usize, #[case] expected: usize) {
        assert_eq!(chunk_count(length), expected);
        assert_eq!(split_secret(&vec![b'n'; length]).unwrap().len(), expected);
    }

    #[test]
    fn last_chunk_is_padded_on_trailing_side() {
        let chunks = split_secret(b"HELLO").unwrap();
        let mut expected = b"HELLO".to_vec();
        expected.resize(32, 0);
        assert_eq!(chunks, vec![FieldElement::new(BigUint::from_bytes_be(&expected))]);
    }

    #[test]
    fn full_chunk_is_read_big_endian() {
        let mut secret = vec![0u8; 31];
        secret.push(7);
        let chunks = split_secret(&secret).unwrap();
        assert_eq!(chunks, vec![FieldElement::from_u32(7)]);
    }

    #[rstest]
    #[case::short(b"HELLO".to_vec())]
    #[case::exact(vec![b'x'; 32])]
    #[case::multiple(vec![b'n'; 111])]
    #[case::leading_zeros(vec![0, 0, 0, 1, 2, 3])]
    #[case::zeros_between_chunks({ let mut secret = vec![b'a'; 32]; secret.extend([0; 40]); secret.push(b'b'); secret })]
    fn round_trip(#[case] secret: Vec<u8>) {
        let chunks = split_secret(&secret).unwrap();
        assert_eq!(merge_chunks(&chunks), secret);
    }

    #[test]
    fn trailing_zeros_are_lost() {
        let chunks = split_secret(b"abc\0\0").unwrap();
        assert_eq!(merge_chunks(&chunks), b"abc");
    }

    #[test]
    fn small_chunk_keeps_full_width() {
        // A chunk whose value has leading zero bytes must still take 32 bytes once merged.
        let chunks = vec![FieldElement::from_u32(1), FieldElement::from_u32(2)];
        let secret = merge_chunks(&chunks);
        assert_eq!(secret.len(), 64);
        assert_eq!(secret.get(31), Some(&1));
        assert_eq!(secret.get(63), Some(&2));
    }

    #[test]
    fn overflowing_chunk() {
        let mut secret = vec![b'a'; 32];
        secret.extend([0xff; 32]);
        assert_eq!(split_secret(&secret), Err(ChunkOverflow { chunk: 1 }));
    }
}
