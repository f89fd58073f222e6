//! Error types.

use core::fmt;
use pkcs8::der;

/// Result type with `ssh-rsa-key`'s [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Unknown or unsupported algorithm name.
    AlgorithmUnknown,

    /// ASN.1 DER-related errors.
    Asn1(der::Error),

    /// Cryptographic errors.
    Crypto,

    /// SSH wire format encoding errors.
    Encoding(encoding::Error),

    /// Numeric value with an invalid encoding (e.g. non-canonical or
    /// non-positive `mpint`).
    FormatEncoding,

    /// Private key material was requested from a key which only carries a
    /// public part.
    KeyExport,

    /// Signing was attempted with a key which has no private part.
    MissingPrivateKey,

    /// Couldn't import an RSA private key.
    PrivateKeyImport {
        /// Proximate cause of the failure.
        cause: ImportCause,
    },

    /// Couldn't import an RSA public key.
    PublicKeyImport {
        /// Proximate cause of the failure.
        cause: ImportCause,
    },
}

/// Proximate cause of a key import failure.
///
/// Import failures are always surfaced as [`Error::PrivateKeyImport`] or
/// [`Error::PublicKeyImport`] so callers can match on one variant per key
/// kind, with the underlying decoder error preserved here.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ImportCause {
    /// ASN.1 DER parsing failed.
    Asn1(der::Error),

    /// SSH wire format decoding failed.
    Encoding(encoding::Error),

    /// Input parsed but doesn't have the expected shape (wrong OID,
    /// non-NULL parameters, multi-prime version, non-positive integer).
    Malformed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlgorithmUnknown => write!(f, "unknown or unsupported algorithm"),
            Error::Asn1(err) => write!(f, "ASN.1 encoding error: {err}"),
            Error::Crypto => write!(f, "cryptographic error"),
            Error::Encoding(err) => write!(f, "{err}"),
            Error::FormatEncoding => write!(f, "format encoding error"),
            Error::KeyExport => write!(f, "key is not private"),
            Error::MissingPrivateKey => write!(f, "private key needed for signing"),
            Error::PrivateKeyImport { cause } => {
                write!(f, "invalid RSA private key: {cause}")
            }
            Error::PublicKeyImport { cause } => {
                write!(f, "invalid RSA public key: {cause}")
            }
        }
    }
}

impl fmt::Display for ImportCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportCause::Asn1(err) => write!(f, "{err}"),
            ImportCause::Encoding(err) => write!(f, "{err}"),
            ImportCause::Malformed => write!(f, "malformed key structure"),
        }
    }
}

impl core::error::Error for Error {}

impl From<encoding::Error> for Error {
    fn from(err: encoding::Error) -> Error {
        Error::Encoding(err)
    }
}

impl From<encoding::LabelError> for Error {
    fn from(_: encoding::LabelError) -> Error {
        Error::AlgorithmUnknown
    }
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Error {
        Error::Asn1(err)
    }
}

impl From<rsa::errors::Error> for Error {
    fn from(_: rsa::errors::Error) -> Error {
        Error::Crypto
    }
}

impl From<signature::Error> for Error {
    fn from(_: signature::Error) -> Error {
        Error::Crypto
    }
}

impl From<Error> for signature::Error {
    fn from(err: Error) -> signature::Error {
        signature::Error::from_source(err)
    }
}
