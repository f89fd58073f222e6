//! SSH signature blobs and signing/verification.
//!
//! The wire format, from [RFC4253 § 6.6](https://datatracker.ietf.org/doc/html/rfc4253#section-6.6):
//!
//! ```text
//! string "ssh-rsa"
//! string rsa_signature_blob
//! ```
//!
//! where `rsa_signature_blob` is the raw RSASSA-PKCS1-v1_5 value `S`,
//! computed over SHA-1 of the signed data.

use crate::{private::KeypairData, public::KeyData, Algorithm, Error, Result};
use alloc::{string::String, vec::Vec};
use encoding::{CheckedSum, Decode, Encode, Reader, Writer};
use rsa::pkcs1v15;
use sha1::Sha1;
use signature::{SignatureEncoding, Signer, Verifier};

/// Algorithm-tagged signature: the decoded form of the two-string SSH
/// signature blob.
///
/// For `ssh-rsa`, the data is the raw RSASSA-PKCS1-v1_5 signature value,
/// whose length equals the length of the signing key's modulus.
///
/// # `Ord`/`PartialOrd`
///
/// Note that the [`Ord`] and [`PartialOrd`] impls on this type are defined
/// purely for the purposes of using this type as a key in `BTreeMap`-like
/// datastructures, and have no cryptographic or protocol-level meaning.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Signature {
    /// Signature algorithm.
    algorithm: Algorithm,

    /// Raw signature serialized as algorithm-specific byte encoding.
    data: Vec<u8>,
}

impl Signature {
    /// Create a new signature with the given algorithm and raw signature data.
    pub fn new(algorithm: Algorithm, data: impl Into<Vec<u8>>) -> Result<Self> {
        let data = data.into();

        if data.is_empty() {
            return Err(Error::FormatEncoding);
        }

        Ok(Self { algorithm, data })
    }

    /// Get the [`Algorithm`] associated with this signature.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Get the raw signature as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Decode for Signature {
    type Error = Error;

    /// Decode the two-string signature blob.
    ///
    /// The algorithm name is read as a plain string first so that a
    /// well-formed blob carrying an unsupported name
    /// ([`Error::AlgorithmUnknown`]) is distinguishable from a truncated or
    /// otherwise malformed one ([`Error::Encoding`]).
    fn decode(reader: &mut impl Reader) -> Result<Self> {
        let id = String::decode(reader)?;
        let algorithm = id.parse::<Algorithm>().map_err(|_| Error::AlgorithmUnknown)?;
        let data = Vec::decode(reader)?;
        Self::new(algorithm, data)
    }
}

impl Encode for Signature {
    fn encoded_len(&self) -> encoding::Result<usize> {
        [
            self.algorithm().encoded_len()?,
            self.as_bytes().encoded_len()?,
        ]
        .checked_sum()
    }

    fn encode(&self, writer: &mut impl Writer) -> encoding::Result<()> {
        self.algorithm().encode(writer)?;
        self.as_bytes().encode(writer)
    }
}

impl SignatureEncoding for Signature {
    type Repr = Vec<u8>;
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(mut bytes: &[u8]) -> Result<Self> {
        let reader = &mut bytes;
        let signature = Signature::decode(reader)?;
        Ok(reader.finish(signature)?)
    }
}

impl From<Signature> for Vec<u8> {
    fn from(signature: Signature) -> Vec<u8> {
        signature.data
    }
}

impl Signer<Signature> for KeypairData {
    fn try_sign(&self, message: &[u8]) -> signature::Result<Signature> {
        match self {
            Self::Rsa(keypair) => keypair.try_sign(message),
        }
    }
}

impl Signer<Signature> for crate::private::RsaKeypair {
    fn try_sign(&self, message: &[u8]) -> signature::Result<Signature> {
        let signing_key = pkcs1v15::SigningKey::<Sha1>::try_from(self)?;
        let signature: pkcs1v15::Signature = signing_key.try_sign(message)?;

        Ok(Signature {
            algorithm: Algorithm::Rsa,
            data: signature.to_vec(),
        })
    }
}

impl Verifier<Signature> for KeyData {
    fn verify(&self, message: &[u8], signature: &Signature) -> signature::Result<()> {
        match self {
            Self::Rsa(key) => key.verify(message, signature),
        }
    }
}

impl Verifier<Signature> for crate::public::RsaPublicKey {
    fn verify(&self, message: &[u8], signature: &Signature) -> signature::Result<()> {
        match signature.algorithm {
            Algorithm::Rsa => {
                let signature = pkcs1v15::Signature::try_from(signature.data.as_slice())?;
                let verifying_key = pkcs1v15::VerifyingKey::<Sha1>::try_from(self)?;
                verifying_key.verify(message, &signature)
            }
        }
    }
}
