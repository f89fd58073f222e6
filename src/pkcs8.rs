//! PKCS#8 and SPKI envelopes around the PKCS#1 payloads: `PrivateKeyInfo`
//! ([RFC5208](https://datatracker.ietf.org/doc/html/rfc5208)) and X.509
//! `SubjectPublicKeyInfo`.
//!
//! Both envelopes are gated on the `rsaEncryption` OID
//! (`1.2.840.113549.1.1.1`). Its `parameters` field is either absent or an
//! explicit ASN.1 NULL on decode; encoding always emits the explicit NULL.

use crate::{private::RsaKeypair, public::RsaPublicKey, Error, ImportCause, Result};
use pkcs8::{
    der::{asn1::AnyRef, asn1::BitStringRef, Decode as _, Document},
    spki::{self, SubjectPublicKeyInfoRef},
    AlgorithmIdentifierRef, PrivateKeyInfo, SecretDocument,
};

/// `AlgorithmIdentifier` for `rsaEncryption` with explicit NULL parameters.
const ALGORITHM_ID: AlgorithmIdentifierRef<'static> = AlgorithmIdentifierRef {
    oid: pkcs1::ALGORITHM_OID,
    parameters: Some(AnyRef::NULL),
};

/// Decode a PKCS#8 `PrivateKeyInfo` structure from DER.
pub fn decode_private(der_bytes: &[u8]) -> Result<RsaKeypair> {
    let info = PrivateKeyInfo::from_der(der_bytes).map_err(|err| Error::PrivateKeyImport {
        cause: ImportCause::Asn1(err),
    })?;

    validate_algorithm(&info.algorithm).map_err(|cause| Error::PrivateKeyImport { cause })?;
    crate::pkcs1::decode_private(info.private_key)
}

/// Decode an X.509 `SubjectPublicKeyInfo` structure from DER.
pub fn decode_public(der_bytes: &[u8]) -> Result<RsaPublicKey> {
    let spki = SubjectPublicKeyInfoRef::from_der(der_bytes).map_err(|err| {
        Error::PublicKeyImport {
            cause: ImportCause::Asn1(err),
        }
    })?;

    validate_algorithm(&spki.algorithm).map_err(|cause| Error::PublicKeyImport { cause })?;

    let key_bytes = spki
        .subject_public_key
        .as_bytes()
        .ok_or(Error::PublicKeyImport {
            cause: ImportCause::Malformed,
        })?;

    crate::pkcs1::decode_public(key_bytes)
}

/// Encode a keypair as a PKCS#8 `PrivateKeyInfo` structure.
pub fn encode_private(keypair: &RsaKeypair) -> Result<SecretDocument> {
    let private_key = crate::pkcs1::encode_private(keypair)?;
    SecretDocument::try_from(PrivateKeyInfo::new(ALGORITHM_ID, &private_key))
        .map_err(pkcs8_export_err)
}

/// Encode a public key as an X.509 `SubjectPublicKeyInfo` structure.
pub fn encode_public(public: &RsaPublicKey) -> Result<Document> {
    let key_bytes = crate::pkcs1::encode_public(public)?;

    Document::try_from(SubjectPublicKeyInfoRef {
        algorithm: ALGORITHM_ID,
        subject_public_key: BitStringRef::new(0, &key_bytes)?,
    })
    .map_err(spki_export_err)
}

/// Check that an `AlgorithmIdentifier` names `rsaEncryption` with absent or
/// NULL parameters.
fn validate_algorithm(
    algorithm: &AlgorithmIdentifierRef<'_>,
) -> core::result::Result<(), ImportCause> {
    if algorithm.oid != pkcs1::ALGORITHM_OID {
        return Err(ImportCause::Malformed);
    }

    match algorithm.parameters {
        None => Ok(()),
        Some(params) if params == AnyRef::NULL => Ok(()),
        Some(_) => Err(ImportCause::Malformed),
    }
}

fn pkcs8_export_err(err: pkcs8::Error) -> Error {
    match err {
        pkcs8::Error::Asn1(err) => Error::Asn1(err),
        _ => Error::Crypto,
    }
}

fn spki_export_err(err: spki::Error) -> Error {
    match err {
        spki::Error::Asn1(err) => Error::Asn1(err),
        _ => Error::Crypto,
    }
}
