//! PKCS#1 encoding: the raw `RSAPrivateKey` and `RSAPublicKey` ASN.1
//! structures from [RFC8017 Appendix A.1](https://datatracker.ietf.org/doc/html/rfc8017#appendix-A.1.2).
//!
//! Decoding trusts only `(n, e)` and `(n, e, d, p, q)`; the CRT fields of
//! `RSAPrivateKey` (`exponent1`, `exponent2`, `coefficient`) are ignored and
//! recomputed from `(d, p, q)` on every encode, so output is internally
//! consistent even when the input carried stale values.
//!
//! All parse failures are surfaced as [`Error::PrivateKeyImport`] or
//! [`Error::PublicKeyImport`] with the proximate cause attached.

use crate::{
    private::{RsaKeypair, RsaPrivateKey},
    public::RsaPublicKey,
    Error, ImportCause, Mpint, Result,
};
use alloc::vec::Vec;
use bigint::{BigUint, IntoBigUint, ModInverse};
use num_traits::One;
use pkcs1::{der::Encode as _, UintRef, Version};
use zeroize::Zeroizing;

/// Decode a PKCS#1 `RSAPrivateKey` structure from DER.
pub fn decode_private(der_bytes: &[u8]) -> Result<RsaKeypair> {
    let pkcs1_key = pkcs1::RsaPrivateKey::try_from(der_bytes)
        .map_err(|err| Error::PrivateKeyImport {
            cause: import_cause(err),
        })?;

    keypair_from_pkcs1(&pkcs1_key).map_err(|_| Error::PrivateKeyImport {
        cause: ImportCause::Malformed,
    })
}

/// Decode a PKCS#1 `RSAPublicKey` structure from DER.
pub fn decode_public(der_bytes: &[u8]) -> Result<RsaPublicKey> {
    let pkcs1_key = pkcs1::RsaPublicKey::try_from(der_bytes)
        .map_err(|err| Error::PublicKeyImport {
            cause: import_cause(err),
        })?;

    public_from_pkcs1(&pkcs1_key).map_err(|_| Error::PublicKeyImport {
        cause: ImportCause::Malformed,
    })
}

/// Encode a keypair as a PKCS#1 `RSAPrivateKey` structure.
///
/// `exponent1`/`exponent2`/`coefficient` are derived from `(d, p, q)` here;
/// whatever the keypair was decoded from plays no part.
pub fn encode_private(keypair: &RsaKeypair) -> Result<Zeroizing<Vec<u8>>> {
    let n = BigUint::try_from(keypair.public().n())?;
    let e = BigUint::try_from(keypair.public().e())?;
    let d = Zeroizing::new(BigUint::try_from(keypair.private().d())?);
    let p = Zeroizing::new(BigUint::try_from(keypair.private().p())?);
    let q = Zeroizing::new(BigUint::try_from(keypair.private().q())?);
    let (dp, dq, qinv) = crt_parameters(&d, &p, &q)?;

    let modulus = n.to_bytes_be();
    let public_exponent = e.to_bytes_be();
    let private_exponent = Zeroizing::new(d.to_bytes_be());
    let prime1 = Zeroizing::new(p.to_bytes_be());
    let prime2 = Zeroizing::new(q.to_bytes_be());
    let exponent1 = Zeroizing::new(dp.to_bytes_be());
    let exponent2 = Zeroizing::new(dq.to_bytes_be());
    let coefficient = Zeroizing::new(qinv.to_bytes_be());

    let der = pkcs1::RsaPrivateKey {
        modulus: UintRef::new(&modulus)?,
        public_exponent: UintRef::new(&public_exponent)?,
        private_exponent: UintRef::new(&private_exponent)?,
        prime1: UintRef::new(&prime1)?,
        prime2: UintRef::new(&prime2)?,
        exponent1: UintRef::new(&exponent1)?,
        exponent2: UintRef::new(&exponent2)?,
        coefficient: UintRef::new(&coefficient)?,
        other_prime_infos: None,
    }
    .to_der()?;

    Ok(Zeroizing::new(der))
}

/// Encode a public key as a PKCS#1 `RSAPublicKey` structure.
pub fn encode_public(public: &RsaPublicKey) -> Result<Vec<u8>> {
    let n = BigUint::try_from(public.n())?.to_bytes_be();
    let e = BigUint::try_from(public.e())?.to_bytes_be();

    Ok(pkcs1::RsaPublicKey {
        modulus: UintRef::new(&n)?,
        public_exponent: UintRef::new(&e)?,
    }
    .to_der()?)
}

/// Compute the CRT parameters `(dP, dQ, qInv)` from `(d, p, q)`:
///
/// ```text
/// dP   = d mod (p - 1)
/// dQ   = d mod (q - 1)
/// qInv = q^-1 mod p
/// ```
#[allow(clippy::arithmetic_side_effects)] // `p > 1` and `q > 1` checked below
pub(crate) fn crt_parameters(
    d: &BigUint,
    p: &BigUint,
    q: &BigUint,
) -> Result<(BigUint, BigUint, BigUint)> {
    let one = BigUint::one();

    // p or q of 1 would divide by zero below; no inverse exists either way
    if *p <= one || *q <= one {
        return Err(Error::Crypto);
    }

    let dp = d % (p - &one);
    let dq = d % (q - &one);
    let qinv = q
        .clone()
        .mod_inverse(p)
        .and_then(|qinv| qinv.into_biguint())
        .ok_or(Error::Crypto)?;

    Ok((dp, dq, qinv))
}

fn keypair_from_pkcs1(pkcs1_key: &pkcs1::RsaPrivateKey<'_>) -> Result<RsaKeypair> {
    // otherPrimeInfos (multi-prime RSA) is unsupported
    if pkcs1_key.version() != Version::TwoPrime {
        return Err(Error::FormatEncoding);
    }

    let public = RsaPublicKey::new(
        Mpint::from_positive_bytes(pkcs1_key.public_exponent.as_bytes())?,
        Mpint::from_positive_bytes(pkcs1_key.modulus.as_bytes())?,
    )?;

    let private = RsaPrivateKey::new(
        Mpint::from_positive_bytes(pkcs1_key.private_exponent.as_bytes())?,
        Mpint::from_positive_bytes(pkcs1_key.prime1.as_bytes())?,
        Mpint::from_positive_bytes(pkcs1_key.prime2.as_bytes())?,
    )?;

    RsaKeypair::new(public, private)
}

fn public_from_pkcs1(pkcs1_key: &pkcs1::RsaPublicKey<'_>) -> Result<RsaPublicKey> {
    RsaPublicKey::new(
        Mpint::from_positive_bytes(pkcs1_key.public_exponent.as_bytes())?,
        Mpint::from_positive_bytes(pkcs1_key.modulus.as_bytes())?,
    )
}

fn import_cause(err: pkcs1::Error) -> ImportCause {
    match err {
        pkcs1::Error::Asn1(err) => ImportCause::Asn1(err),
        _ => ImportCause::Malformed,
    }
}
