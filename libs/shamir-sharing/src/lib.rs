//! Threshold secret sharing of arbitrary byte strings.
//!
//! A secret is split into `shares` textual shares such that any `minimum` of them reconstruct it
//! exactly while fewer reveal nothing about it. The secret is cut into 32 byte chunks, each chunk
//! becomes the constant term of its own random polynomial over the prime field `2^256 - 189` and
//! every share carries one `(x, y)` point per chunk.
//!
//! ```
//! use shamir_sharing::{combine_shares, create_shares, ShareEncoding};
//!
//! # fn test() -> Result<(), Box<dyn std::error::Error>> {
//! let shares = create_shares(2, 4, b"HELLO", ShareEncoding::Hex)?;
//! let secret = combine_shares(&shares[1..3], ShareEncoding::Hex)?;
//! assert_eq!(secret, b"HELLO");
//! # Ok(())
//! # }
//! ```
//!
//! # Combining fewer than `minimum` shares
//!
//! Shares carry no metadata: the threshold, the encoding and the chunk count are never embedded in
//! them, so callers must keep track of `minimum` and the encoding themselves.
//!
//! As a consequence [combine_shares] cannot know how many shares are needed. **Supplying fewer
//! than `minimum` well formed shares does not fail: it returns a secret of the right shape that is
//! simply wrong.** Callers must make sure at least `minimum` shares are provided.
//!
//! # Trailing zero bytes
//!
//! The last chunk is padded with zero bytes and padding is stripped after reconstruction, so
//! secrets that end in `0x00` bytes lose them.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod chunks;
pub mod encoding;
pub mod protocol;
pub mod secret_sharer;

use math_lib::{
    modular::{ModularNumber, U256SharePrime},
    polynomial::point::Point,
};

pub use encoding::{is_valid_share, validate_share, ShareEncoding};
pub use protocol::{CombineSharesError, CreateSharesError};
pub use secret_sharer::{combine_shares, create_shares, create_shares_with_rng, SecretSharer, ShamirSecretSharer};

/// The prime all shares are computed over.
pub type SharePrime = U256SharePrime;

/// An element of the field shares are computed over.
pub type FieldElement = ModularNumber<SharePrime>;

/// A single `(x, y)` point in a share.
pub type SharePoint = Point<SharePrime>;
