//! Rivest–Shamir–Adleman (RSA) public keys.

use crate::{Error, Mpint, Result};
use core::hash::{Hash, Hasher};
use encoding::{CheckedSum, Decode, Encode, Reader, Writer};
use rsa::pkcs1v15;
use sha1::{digest::const_oid::AssociatedOid, Digest};

/// RSA public key: the modulus `n` and public exponent `e`.
///
/// The SSH wire encoding is described in
/// [RFC4253 § 6.6](https://datatracker.ietf.org/doc/html/rfc4253#section-6.6):
/// `e` comes first, then `n`, both as `mpint`.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct RsaPublicKey {
    /// RSA public exponent.
    e: Mpint,

    /// RSA modulus.
    n: Mpint,
}

impl RsaPublicKey {
    /// Create a new [`RsaPublicKey`] with the given components:
    ///
    /// - `e`: RSA public exponent.
    /// - `n`: RSA modulus.
    ///
    /// Both must be positive. No magnitude policy is applied: undersized or
    /// oversized moduli are representable, and are only rejected if the
    /// `rsa` crate refuses them when a key is used for signing/verification.
    pub fn new(e: Mpint, n: Mpint) -> Result<Self> {
        if !e.is_positive() || !n.is_positive() {
            return Err(Error::FormatEncoding);
        }

        Ok(Self { e, n })
    }

    /// Get the RSA public exponent.
    pub fn e(&self) -> &Mpint {
        &self.e
    }

    /// Get the RSA modulus.
    pub fn n(&self) -> &Mpint {
        &self.n
    }

    /// Get the size of the RSA modulus in bits.
    pub fn key_size(&self) -> u32 {
        self.n
            .as_positive_bytes()
            .and_then(|bytes| bytes.len().checked_mul(8))
            .and_then(|bits| u32::try_from(bits).ok())
            .unwrap_or(0)
    }
}

impl Decode for RsaPublicKey {
    type Error = Error;

    fn decode(reader: &mut impl Reader) -> Result<Self> {
        let e = Mpint::decode(reader)?;
        let n = Mpint::decode(reader)?;
        Self::new(e, n)
    }
}

impl Encode for RsaPublicKey {
    fn encoded_len(&self) -> encoding::Result<usize> {
        [self.e.encoded_len()?, self.n.encoded_len()?].checked_sum()
    }

    fn encode(&self, writer: &mut impl Writer) -> encoding::Result<()> {
        self.e.encode(writer)?;
        self.n.encode(writer)
    }
}

impl Hash for RsaPublicKey {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.e.as_bytes().hash(state);
        self.n.as_bytes().hash(state);
    }
}

impl TryFrom<RsaPublicKey> for rsa::RsaPublicKey {
    type Error = Error;

    fn try_from(key: RsaPublicKey) -> Result<rsa::RsaPublicKey> {
        rsa::RsaPublicKey::try_from(&key)
    }
}

impl TryFrom<&RsaPublicKey> for rsa::RsaPublicKey {
    type Error = Error;

    fn try_from(key: &RsaPublicKey) -> Result<rsa::RsaPublicKey> {
        let n = bigint::BigUint::try_from(&key.n)?;
        let e = bigint::BigUint::try_from(&key.e)?;
        rsa::RsaPublicKey::new(n, e).map_err(|_| Error::Crypto)
    }
}

impl TryFrom<rsa::RsaPublicKey> for RsaPublicKey {
    type Error = Error;

    fn try_from(key: rsa::RsaPublicKey) -> Result<RsaPublicKey> {
        RsaPublicKey::try_from(&key)
    }
}

impl TryFrom<&rsa::RsaPublicKey> for RsaPublicKey {
    type Error = Error;

    fn try_from(key: &rsa::RsaPublicKey) -> Result<RsaPublicKey> {
        use rsa::traits::PublicKeyParts;
        let e = Mpint::try_from(key.e())?;
        let n = Mpint::try_from(key.n())?;
        RsaPublicKey::new(e, n)
    }
}

impl<D> TryFrom<&RsaPublicKey> for pkcs1v15::VerifyingKey<D>
where
    D: Digest + AssociatedOid,
{
    type Error = Error;

    fn try_from(key: &RsaPublicKey) -> Result<pkcs1v15::VerifyingKey<D>> {
        Ok(pkcs1v15::VerifyingKey::new(key.try_into()?))
    }
}

#[cfg(test)]
mod tests {
    use super::RsaPublicKey;
    use crate::Mpint;
    use hex_literal::hex;

    #[test]
    fn reject_negative_components() {
        let e = Mpint::from_bytes(&hex!("ed cc")).unwrap();
        let n = Mpint::from_positive_bytes(&hex!("11")).unwrap();
        assert!(RsaPublicKey::new(e, n).is_err());
    }

    #[test]
    fn key_size_in_bits() {
        let e = Mpint::from_positive_bytes(&hex!("010001")).unwrap();
        let n = Mpint::from_positive_bytes(&hex!("baadf00dcafe4b1d")).unwrap();
        let key = RsaPublicKey::new(e, n).unwrap();
        assert_eq!(key.key_size(), 64);
    }
}
