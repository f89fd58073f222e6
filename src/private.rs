//! SSH private key support.

mod rsa;

pub use self::rsa::{RsaKeypair, RsaPrivateKey};

use crate::{public::KeyData, Algorithm};
use subtle::{Choice, ConstantTimeEq};

/// Private key data: algorithm-tagged union over the keypair types this
/// crate understands.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum KeypairData {
    /// RSA keypair.
    Rsa(RsaKeypair),
}

impl KeypairData {
    /// Get the [`Algorithm`] for this private key.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Rsa(_) => Algorithm::Rsa,
        }
    }

    /// Get RSA keypair if this key is the correct type.
    pub fn rsa(&self) -> Option<&RsaKeypair> {
        match self {
            Self::Rsa(keypair) => Some(keypair),
        }
    }

    /// Is this key an RSA key?
    pub fn is_rsa(&self) -> bool {
        matches!(self, Self::Rsa(_))
    }

    /// Compute [`KeyData`] for the public half of this private key.
    pub fn public_key(&self) -> KeyData {
        match self {
            Self::Rsa(keypair) => KeyData::Rsa(keypair.public().clone()),
        }
    }
}

impl ConstantTimeEq for KeypairData {
    fn ct_eq(&self, other: &Self) -> Choice {
        match (self, other) {
            (Self::Rsa(a), Self::Rsa(b)) => a.ct_eq(b),
        }
    }
}

impl From<RsaKeypair> for KeypairData {
    fn from(keypair: RsaKeypair) -> KeypairData {
        KeypairData::Rsa(keypair)
    }
}
