//! Secret sharer implementation.

use super::ShamirSecretSharer;
use crate::{
    encoding::ShareEncoding,
    protocol::{CombineSharesError, CreateSharesError, Shamir},
};
use rand::{rngs::OsRng, CryptoRng, RngCore};

/// A type that can perform secret sharing, turning secrets into shares and shares into secrets.
pub trait SecretSharer {
    /// Generates shares for the given secret using the provided randomness source.
    fn generate_shares_with_rng<R: CryptoRng + RngCore>(
        &self,
        secret: &[u8],
        rng: &mut R,
    ) -> Result<Vec<String>, CreateSharesError>;

    /// Generates shares for the given secret using the operating system's randomness source.
    fn generate_shares(&self, secret: &[u8]) -> Result<Vec<String>, CreateSharesError> {
        self.generate_shares_with_rng(secret, &mut OsRng)
    }

    /// Recovers the secret behind the provided shares.
    fn recover<S: AsRef<str>>(&self, shares: &[S]) -> Result<Vec<u8>, CombineSharesError>;
}

/// Splits a secret into `shares` shares, any `minimum` of which reconstruct it.
///
/// Randomness is taken from the operating system. Every returned share has the same length, that
/// is the number of 32 byte chunks in the secret times the encoding's pair width.
pub fn create_shares(
    minimum: usize,
    shares: usize,
    secret: &[u8],
    encoding: ShareEncoding,
) -> Result<Vec<String>, CreateSharesError> {
    create_shares_with_rng(minimum, shares, secret, encoding, &mut OsRng)
}

/// Same as [create_shares] but takes the randomness source explicitly.
pub fn create_shares_with_rng<R: CryptoRng + RngCore>(
    minimum: usize,
    shares: usize,
    secret: &[u8],
    encoding: ShareEncoding,
    rng: &mut R,
) -> Result<Vec<String>, CreateSharesError> {
    ShamirSecretSharer::new(minimum, shares, encoding)?.generate_shares_with_rng(secret, rng)
}

/// Reconstructs a secret from shares produced by [create_shares] with the same encoding.
///
/// This can't tell whether enough shares were supplied: fewer than `minimum` well formed shares
/// produce a wrong secret rather than an error.
pub fn combine_shares<S: AsRef<str>>(shares: &[S], encoding: ShareEncoding) -> Result<Vec<u8>, CombineSharesError> {
    Shamir::recover_secret(shares, encoding)
}
