//! SSH public key support.

mod rsa;

pub use self::rsa::RsaPublicKey;

use crate::{Algorithm, Error, Result};
use encoding::{CheckedSum, Decode, Encode, Reader, Writer};

/// Public key data: algorithm-tagged union over the public key formats this
/// crate understands.
///
/// The wire encoding is the algorithm name string followed by the
/// algorithm-specific body, i.e. for RSA the blob described in
/// [RFC4253 § 6.6](https://datatracker.ietf.org/doc/html/rfc4253#section-6.6):
///
/// ```text
/// string "ssh-rsa"
/// mpint  e
/// mpint  n
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum KeyData {
    /// RSA public key data.
    Rsa(RsaPublicKey),
}

impl KeyData {
    /// Get the [`Algorithm`] for this public key.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Rsa(_) => Algorithm::Rsa,
        }
    }

    /// Get RSA public key data if this key is the correct type.
    pub fn rsa(&self) -> Option<&RsaPublicKey> {
        match self {
            Self::Rsa(key) => Some(key),
        }
    }

    /// Is this key an RSA key?
    pub fn is_rsa(&self) -> bool {
        matches!(self, Self::Rsa(_))
    }
}

impl Decode for KeyData {
    type Error = Error;

    fn decode(reader: &mut impl Reader) -> Result<Self> {
        match Algorithm::decode(reader)? {
            Algorithm::Rsa => RsaPublicKey::decode(reader).map(Self::Rsa),
        }
    }
}

impl Encode for KeyData {
    fn encoded_len(&self) -> encoding::Result<usize> {
        let key_len = match self {
            Self::Rsa(key) => key.encoded_len()?,
        };

        [self.algorithm().encoded_len()?, key_len].checked_sum()
    }

    fn encode(&self, writer: &mut impl Writer) -> encoding::Result<()> {
        self.algorithm().encode(writer)?;

        match self {
            Self::Rsa(key) => key.encode(writer),
        }
    }
}

impl From<RsaPublicKey> for KeyData {
    fn from(key: RsaPublicKey) -> KeyData {
        KeyData::Rsa(key)
    }
}
