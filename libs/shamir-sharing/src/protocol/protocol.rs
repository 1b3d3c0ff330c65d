//! Shamir Secret Sharing Protocol

use crate::{
    chunks::{chunk_count, merge_chunks, split_secret},
    encoding::ShareEncoding,
    protocol::{CombineSharesError, CreateSharesError, UsedNumbers},
    FieldElement, SharePoint, SharePrime,
};
use log::{debug, warn};
use math_lib::polynomial::{point_sequence::PointSequence, Polynomial};
use rand::{CryptoRng, RngCore};

/// Shamir Secret Sharing Protocol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shamir {
    /// The number of shares needed to reconstruct a secret.
    minimum: usize,

    /// The number of shares generated for every secret.
    shares: usize,
}

impl Shamir {
    /// Creates a new Shamir Secret Sharing Protocol.
    pub fn new(minimum: usize, shares: usize) -> Result<Self, CreateSharesError> {
        if minimum == 0 || shares == 0 {
            return Err(CreateSharesError::InvalidThreshold);
        }
        if minimum > shares {
            return Err(CreateSharesError::ThresholdExceedsShareCount { minimum, shares });
        }
        Ok(Self { minimum, shares })
    }

    /// The number of shares needed to reconstruct a secret.
    pub fn minimum(&self) -> usize {
        self.minimum
    }

    /// The number of shares generated for every secret.
    pub fn shares(&self) -> usize {
        self.shares
    }

    /// Builds a polynomial of degree `minimum - 1` whose constant term is the given chunk.
    fn build_polynomial<R: CryptoRng + RngCore>(
        &self,
        chunk: FieldElement,
        used: &mut UsedNumbers,
        rng: &mut R,
    ) -> Result<Polynomial<SharePrime>, CreateSharesError> {
        let mut polynomial = Polynomial::new(Vec::with_capacity(self.minimum));
        polynomial.add_coefficient(chunk);
        for _ in 1..self.minimum {
            polynomial.add_coefficient(used.draw_unique(rng)?);
        }
        Ok(polynomial)
    }

    /// Generate the shares for a secret.
    ///
    /// Every coefficient and every abscissa is drawn from a single pool of unique non zero field
    /// elements, so no two points in any share, or across shares, have the same `x`.
    pub fn generate_shares<R: CryptoRng + RngCore>(
        &self,
        secret: &[u8],
        encoding: ShareEncoding,
        rng: &mut R,
    ) -> Result<Vec<String>, CreateSharesError> {
        if secret.is_empty() {
            return Err(CreateSharesError::EmptySecret);
        }
        let chunks =
            split_secret(secret).map_err(|e| CreateSharesError::SecretChunkOverflow { chunk: e.chunk })?;
        debug!(
            "Splitting secret of {} chunks into {} {encoding} shares with threshold {}",
            chunks.len(),
            self.shares,
            self.minimum
        );

        let mut used = UsedNumbers::new();
        let mut polynomials = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            polynomials.push(self.build_polynomial(chunk, &mut used, rng)?);
        }

        let mut shares = Vec::with_capacity(self.shares);
        for _ in 0..self.shares {
            let mut points = Vec::with_capacity(polynomials.len());
            for polynomial in &polynomials {
                let x = used.draw_unique(rng)?;
                let y = polynomial.eval(&x);
                points.push(SharePoint::new(x, y));
            }
            shares.push(encoding.encode_share(&points));
        }
        debug!("Drew {} unique field elements", used.len().saturating_sub(1));
        Ok(shares)
    }

    /// Recover a secret from the given shares.
    ///
    /// Every share takes part in the interpolation. The threshold is not known here so fewer than
    /// `minimum` shares reconstruct a wrong secret rather than failing.
    pub fn recover_secret<S: AsRef<str>>(
        shares: &[S],
        encoding: ShareEncoding,
    ) -> Result<Vec<u8>, CombineSharesError> {
        if shares.is_empty() {
            return Err(CombineSharesError::EmptyShareList);
        }

        let mut sequences: Vec<PointSequence<SharePrime>> = Vec::new();
        for (index, share) in shares.iter().enumerate() {
            let decoded = encoding.decode_share(share.as_ref()).map_err(|e| {
                warn!("Rejecting {encoding} share {index}: {e}");
                CombineSharesError::from_validation(index, e)
            })?;
            if index == 0 {
                sequences = (0..decoded.chunk_count()).map(|_| PointSequence::default()).collect();
            } else if decoded.chunk_count() != sequences.len() {
                return Err(CombineSharesError::InconsistentShareFormat {
                    index,
                    expected: sequences.len(),
                    found: decoded.chunk_count(),
                });
            }
            for (sequence, point) in sequences.iter_mut().zip(decoded.into_points()) {
                sequence.push(point);
            }
        }
        debug!("Combining {} {encoding} shares of {} chunks", shares.len(), sequences.len());

        let mut chunks = Vec::with_capacity(sequences.len());
        for sequence in &sequences {
            chunks.push(sequence.lagrange_interpolate()?);
        }
        Ok(merge_chunks(&chunks))
    }

    /// The number of characters every share for a secret of the given length is encoded into.
    pub fn share_length(secret_length: usize, encoding: ShareEncoding) -> usize {
        chunk_count(secret_length).saturating_mul(encoding.pair_width())
    }
}
