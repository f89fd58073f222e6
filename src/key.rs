//! Key handles composing the PKCS#1, PKCS#8 and SSH wire codecs.

use crate::{
    private::{KeypairData, RsaKeypair},
    public::{KeyData, RsaPublicKey},
    Algorithm, Error, ImportCause, Result, Signature,
};
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};
use encoding::{Decode, Encode, Reader};
use pkcs8::{der::Document, SecretDocument};
use signature::{Signer, Verifier};
use zeroize::Zeroizing;

/// Key material held by a [`Key`]: either just the public components or a
/// full keypair.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum KeyMaterial {
    /// Public components only.
    Public(KeyData),

    /// Full private/public keypair.
    Private(KeypairData),
}

impl KeyMaterial {
    /// Get the [`Algorithm`] for this key material.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Public(key_data) => key_data.algorithm(),
            Self::Private(keypair_data) => keypair_data.algorithm(),
        }
    }

    /// Compute [`KeyData`] for the public components.
    pub fn public_key(&self) -> KeyData {
        match self {
            Self::Public(key_data) => key_data.clone(),
            Self::Private(keypair_data) => keypair_data.public_key(),
        }
    }
}

impl From<KeyData> for KeyMaterial {
    fn from(key_data: KeyData) -> KeyMaterial {
        KeyMaterial::Public(key_data)
    }
}

impl From<KeypairData> for KeyMaterial {
    fn from(keypair_data: KeypairData) -> KeyMaterial {
        KeyMaterial::Private(keypair_data)
    }
}

/// RSA key handle: key material plus the codec and identity operations.
///
/// A key handle is either public-only or carries the full keypair; which of
/// the two it is participates in the equality and hash contract (see
/// [`Key::eq`]) so that a private key and its public projection never
/// collide in a map or set.
#[derive(Clone, Debug)]
pub struct Key {
    /// Public or private key material.
    material: KeyMaterial,

    /// Does this handle carry private components?
    is_private: bool,
}

impl Key {
    /// Create a new key handle from the given material.
    pub fn new(material: impl Into<KeyMaterial>) -> Self {
        let material = material.into();
        let is_private = matches!(material, KeyMaterial::Private(_));
        Self {
            material,
            is_private,
        }
    }

    /// Get the [`Algorithm`] for this key.
    pub fn algorithm(&self) -> Algorithm {
        self.material.algorithm()
    }

    /// Does this handle carry private components?
    pub fn is_private(&self) -> bool {
        self.is_private
    }

    /// Borrow the underlying key material.
    pub fn key_material(&self) -> &KeyMaterial {
        &self.material
    }

    /// Compute [`KeyData`] for the public components of this key.
    pub fn public_key(&self) -> KeyData {
        self.material.public_key()
    }

    /// Decode a PKCS#1 `RSAPrivateKey` structure from DER.
    pub fn from_pkcs1_private_der(der_bytes: &[u8]) -> Result<Self> {
        let keypair = crate::pkcs1::decode_private(der_bytes)?;
        Ok(Self::new(KeypairData::from(keypair)))
    }

    /// Decode a PKCS#1 `RSAPublicKey` structure from DER.
    pub fn from_pkcs1_public_der(der_bytes: &[u8]) -> Result<Self> {
        let public = crate::pkcs1::decode_public(der_bytes)?;
        Ok(Self::new(KeyData::from(public)))
    }

    /// Decode a PKCS#8 `PrivateKeyInfo` structure from DER.
    pub fn from_pkcs8_der(der_bytes: &[u8]) -> Result<Self> {
        let keypair = crate::pkcs8::decode_private(der_bytes)?;
        Ok(Self::new(KeypairData::from(keypair)))
    }

    /// Decode an X.509 `SubjectPublicKeyInfo` structure from DER.
    pub fn from_public_key_der(der_bytes: &[u8]) -> Result<Self> {
        let public = crate::pkcs8::decode_public(der_bytes)?;
        Ok(Self::new(KeyData::from(public)))
    }

    /// Decode an SSH public key blob, e.g. the base64-decoded middle column
    /// of an `authorized_keys` line:
    ///
    /// ```text
    /// string "ssh-rsa"
    /// mpint  e
    /// mpint  n
    /// ```
    ///
    /// Trailing data after the blob is rejected. All failures are reported
    /// as [`Error::PublicKeyImport`].
    pub fn from_bytes(mut bytes: &[u8]) -> Result<Self> {
        let reader = &mut bytes;
        let key_data = KeyData::decode(reader)
            .and_then(|key_data| Ok(reader.finish(key_data)?))
            .map_err(|err| Error::PublicKeyImport {
                cause: wire_cause(err),
            })?;

        Ok(Self::new(key_data))
    }

    /// Encode the private components as a PKCS#1 `RSAPrivateKey` structure.
    ///
    /// Returns [`Error::KeyExport`] for a public-only handle.
    pub fn to_pkcs1_private_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        crate::pkcs1::encode_private(self.keypair()?)
    }

    /// Encode the public components as a PKCS#1 `RSAPublicKey` structure.
    pub fn to_pkcs1_public_der(&self) -> Result<Vec<u8>> {
        match self.public_key() {
            KeyData::Rsa(public) => crate::pkcs1::encode_public(&public),
        }
    }

    /// Encode the private components as a PKCS#8 `PrivateKeyInfo` structure.
    ///
    /// Returns [`Error::KeyExport`] for a public-only handle.
    pub fn to_pkcs8_der(&self) -> Result<SecretDocument> {
        crate::pkcs8::encode_private(self.keypair()?)
    }

    /// Encode the public components as an X.509 `SubjectPublicKeyInfo`
    /// structure.
    pub fn to_public_key_der(&self) -> Result<Document> {
        match self.public_key() {
            KeyData::Rsa(public) => crate::pkcs8::encode_public(&public),
        }
    }

    /// Encode the SSH public key blob.
    ///
    /// Always available: for a private handle this encodes the public
    /// projection.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let key_data = self.public_key();
        let mut out = Vec::with_capacity(key_data.encoded_len()?);
        key_data.encode(&mut out)?;
        Ok(out)
    }

    /// Sign the given message, returning the SSH signature blob contents.
    ///
    /// Returns [`Error::MissingPrivateKey`] for a public-only handle.
    pub fn sign(&self, message: &[u8]) -> Result<Signature> {
        match &self.material {
            KeyMaterial::Private(keypair_data) => Ok(keypair_data.try_sign(message)?),
            KeyMaterial::Public(_) => Err(Error::MissingPrivateKey),
        }
    }

    /// Verify an SSH signature blob over the given message.
    ///
    /// Returns `Ok(false)` when the blob names a different algorithm than
    /// this key (without running any cryptography) and when the
    /// cryptographic check itself fails. Only a malformed blob is an error.
    pub fn verify(&self, message: &[u8], signature_bytes: &[u8]) -> Result<bool> {
        let signature = match Signature::try_from(signature_bytes) {
            Ok(signature) => signature,
            // well-formed blob naming an algorithm this key doesn't speak
            Err(Error::AlgorithmUnknown) => return Ok(false),
            Err(err) => return Err(err),
        };

        if signature.algorithm() != self.algorithm() {
            return Ok(false);
        }

        Ok(self.public_key().verify(message, &signature).is_ok())
    }

    /// Borrow the keypair, or report that this handle is public-only.
    fn keypair(&self) -> Result<&RsaKeypair> {
        match &self.material {
            KeyMaterial::Private(KeypairData::Rsa(keypair)) => Ok(keypair),
            KeyMaterial::Public(_) => Err(Error::KeyExport),
        }
    }

    /// Borrow the public components regardless of handle kind.
    fn public_parts(&self) -> &RsaPublicKey {
        match &self.material {
            KeyMaterial::Public(KeyData::Rsa(public)) => public,
            KeyMaterial::Private(KeypairData::Rsa(keypair)) => keypair.public(),
        }
    }
}

impl Eq for Key {}

/// Two key handles are equal when their public components (`n`, `e`) match
/// *and* both sides agree on whether private components are present.
///
/// A private key and its own public projection are therefore *not* equal:
/// they are different credentials for access-control purposes even though
/// they verify the same signatures.
impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.public_parts() == other.public_parts() && self.is_private == other.is_private
    }
}

/// Hashes `n`, `e` and the `Option`-wrapped private components so the
/// digest input arity is identical for public and private handles,
/// consistent with [`Key::eq`].
impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.public_parts().hash(state);

        match &self.material {
            KeyMaterial::Public(KeyData::Rsa(_)) => {
                for _ in 0..3 {
                    Option::<&crate::Mpint>::None.hash(state);
                }
            }
            KeyMaterial::Private(KeypairData::Rsa(keypair)) => {
                let private = keypair.private();
                Some(private.d()).hash(state);
                Some(private.p()).hash(state);
                Some(private.q()).hash(state);
            }
        }
    }
}

impl From<KeyData> for Key {
    fn from(key_data: KeyData) -> Key {
        Key::new(key_data)
    }
}

impl From<KeypairData> for Key {
    fn from(keypair_data: KeypairData) -> Key {
        Key::new(keypair_data)
    }
}

impl From<RsaPublicKey> for Key {
    fn from(public: RsaPublicKey) -> Key {
        Key::new(KeyData::Rsa(public))
    }
}

impl From<RsaKeypair> for Key {
    fn from(keypair: RsaKeypair) -> Key {
        Key::new(KeypairData::Rsa(keypair))
    }
}

impl Signer<Signature> for Key {
    fn try_sign(&self, message: &[u8]) -> signature::Result<Signature> {
        self.sign(message).map_err(signature::Error::from)
    }
}

impl Verifier<Signature> for Key {
    fn verify(&self, message: &[u8], signature: &Signature) -> signature::Result<()> {
        self.public_key().verify(message, signature)
    }
}

fn wire_cause(err: Error) -> ImportCause {
    match err {
        Error::Encoding(err) => ImportCause::Encoding(err),
        _ => ImportCause::Malformed,
    }
}
