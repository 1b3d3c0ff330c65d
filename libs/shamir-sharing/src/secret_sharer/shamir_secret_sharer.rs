//! Shamir secret sharer.

use super::SecretSharer;
use crate::{
    encoding::ShareEncoding,
    protocol::{CombineSharesError, CreateSharesError, Shamir},
};
use rand::{CryptoRng, RngCore};

/// A secret sharer bound to a threshold configuration and a share encoding.
#[derive(Clone, Copy, Debug)]
pub struct ShamirSecretSharer {
    shamir: Shamir,
    encoding: ShareEncoding,
}

impl ShamirSecretSharer {
    /// Constructs a new secret sharer.
    ///
    /// # Arguments
    /// * `minimum` - The number of shares needed to reconstruct a secret.
    /// * `shares` - The number of shares generated for every secret.
    /// * `encoding` - The textual encoding used for the shares.
    pub fn new(minimum: usize, shares: usize, encoding: ShareEncoding) -> Result<Self, CreateSharesError> {
        let shamir = Shamir::new(minimum, shares)?;
        Ok(Self { shamir, encoding })
    }

    /// The number of shares needed to reconstruct a secret.
    pub fn minimum(&self) -> usize {
        self.shamir.minimum()
    }

    /// The number of shares generated for every secret.
    pub fn share_count(&self) -> usize {
        self.shamir.shares()
    }

    /// The encoding used for the shares.
    pub fn encoding(&self) -> ShareEncoding {
        self.encoding
    }
}

impl SecretSharer for ShamirSecretSharer {
    fn generate_shares_with_rng<R: CryptoRng + RngCore>(
        &self,
        secret: &[u8],
        rng: &mut R,
    ) -> Result<Vec<String>, CreateSharesError> {
        self.shamir.generate_shares(secret, self.encoding, rng)
    }

    fn recover<S: AsRef<str>>(&self, shares: &[S]) -> Result<Vec<u8>, CombineSharesError> {
        if shares.len() < self.minimum() {
            log::warn!("Recovering with {} shares out of the {} required", shares.len(), self.minimum());
        }
        Shamir::recover_secret(shares, self.encoding)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generate_and_recover() {
        let sharer = ShamirSecretSharer::new(2, 3, ShareEncoding::Base64).unwrap();
        assert_eq!(sharer.minimum(), 2);
        assert_eq!(sharer.share_count(), 3);
        let shares = sharer.generate_shares(b"sharer").unwrap();
        assert_eq!(shares.len(), 3);
        assert_eq!(sharer.recover(&shares[1..]).unwrap(), b"sharer");
    }

    #[test]
    fn seeded_generation() {
        let sharer = ShamirSecretSharer::new(3, 4, ShareEncoding::Hex).unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        let shares = sharer.generate_shares_with_rng(&[b'w'; 70], &mut rng).unwrap();
        assert_eq!(shares.len(), 4);
        assert_eq!(sharer.recover(&shares[..3]).unwrap(), vec![b'w'; 70]);
    }

    #[test]
    fn invalid_configuration() {
        assert!(matches!(
            ShamirSecretSharer::new(0, 2, ShareEncoding::Hex),
            Err(CreateSharesError::InvalidThreshold)
        ));
    }
}
