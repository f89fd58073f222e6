//! Multiple precision integer

use crate::{Error, Result};
use alloc::vec::Vec;
use core::{fmt, hash};
use encoding::{CheckedSum, Decode, Encode, Reader, Writer};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

/// Multiple precision integer, a.k.a. "mpint": the big-endian
/// two's-complement integer encoding used for the components of RSA keys.
///
/// Described in [RFC4251 § 5](https://datatracker.ietf.org/doc/html/rfc4251#section-5):
///
/// > Represents multiple precision integers in two's complement format,
/// > stored as a string, 8 bits per byte, MSB first.  Negative numbers
/// > have the value 1 as the most significant bit of the first byte of
/// > the data partition.  If the most significant bit would be set for
/// > a positive number, the number MUST be preceded by a zero byte.
/// > Unnecessary leading bytes with the value 0 or 255 MUST NOT be
/// > included.  The value zero MUST be stored as a string with zero
/// > bytes of data.
///
/// ## Examples
///
/// | value (hex)     | representation (hex) |
/// |-----------------|----------------------|
/// | 0               | `00 00 00 00`
/// | 9a378f9b2e332a7 | `00 00 00 08 09 a3 78 f9 b2 e3 32 a7`
/// | 80              | `00 00 00 02 00 80`
/// | 10001           | `00 00 00 03 01 00 01`
#[derive(Clone, PartialOrd, Ord)]
pub struct Mpint {
    /// Inner big endian-serialized integer value
    inner: Vec<u8>,
}

impl Mpint {
    /// Create a new multiple precision integer from the given
    /// big endian-encoded byte slice.
    ///
    /// Note that this method expects a leading zero on positive integers whose
    /// MSB is set, but does *NOT* expect a 4-byte length prefix.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bytes.try_into()
    }

    /// Create a new multiple precision integer from the given big endian
    /// encoded byte slice representing a positive integer.
    ///
    /// The integer should not start with any leading zeroes. The leading zero
    /// pad byte is inserted when the MSB of the input is set.
    pub fn from_positive_bytes(bytes: &[u8]) -> Result<Self> {
        let mut inner = Vec::with_capacity(bytes.len());

        match bytes.first().cloned() {
            Some(0) => return Err(Error::FormatEncoding),
            Some(n) if n >= 0x80 => inner.push(0),
            _ => (),
        }

        inner.extend_from_slice(bytes);
        inner.try_into()
    }

    /// Get the big integer data encoded as big endian bytes.
    ///
    /// This slice will contain a leading zero if the value is positive but the
    /// MSB is also set. Use [`Mpint::as_positive_bytes`] to ensure the number
    /// is positive and strip the leading zero byte if it exists.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Get the bytes of a positive integer.
    ///
    /// # Returns
    /// - `Some(bytes)` if the number is positive. The leading zero byte will be stripped.
    /// - `None` if the value is negative
    pub fn as_positive_bytes(&self) -> Option<&[u8]> {
        match self.as_bytes() {
            [0x00, rest @ ..] => Some(rest),
            [byte, ..] if *byte < 0x80 => Some(self.as_bytes()),
            _ => None,
        }
    }

    /// Is this a positive integer?
    pub fn is_positive(&self) -> bool {
        self.as_positive_bytes().is_some()
    }
}

impl AsRef<[u8]> for Mpint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ConstantTimeEq for Mpint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_ref().ct_eq(other.as_ref())
    }
}

impl Eq for Mpint {}

impl PartialEq for Mpint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl hash::Hash for Mpint {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl Decode for Mpint {
    type Error = Error;

    fn decode(reader: &mut impl Reader) -> Result<Self> {
        Vec::decode(reader)?.try_into()
    }
}

impl Encode for Mpint {
    fn encoded_len(&self) -> encoding::Result<usize> {
        [4, self.as_bytes().len()].checked_sum()
    }

    fn encode(&self, writer: &mut impl Writer) -> encoding::Result<()> {
        self.as_bytes().encode(writer)?;
        Ok(())
    }
}

impl TryFrom<&[u8]> for Mpint {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Vec::from(bytes).try_into()
    }
}

impl TryFrom<Vec<u8>> for Mpint {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        match bytes.as_slice() {
            // Unnecessary leading 0
            [0x00] => Err(Error::FormatEncoding),
            // Unnecessary leading 0
            [0x00, n, ..] if *n < 0x80 => Err(Error::FormatEncoding),
            _ => Ok(Self { inner: bytes }),
        }
    }
}

impl TryFrom<bigint::BigUint> for Mpint {
    type Error = Error;

    fn try_from(uint: bigint::BigUint) -> Result<Mpint> {
        Mpint::try_from(&uint)
    }
}

impl TryFrom<&bigint::BigUint> for Mpint {
    type Error = Error;

    fn try_from(uint: &bigint::BigUint) -> Result<Mpint> {
        let bytes = Zeroizing::new(uint.to_bytes_be());
        Mpint::from_positive_bytes(bytes.as_slice())
    }
}

impl TryFrom<Mpint> for bigint::BigUint {
    type Error = Error;

    fn try_from(mpint: Mpint) -> Result<bigint::BigUint> {
        bigint::BigUint::try_from(&mpint)
    }
}

impl TryFrom<&Mpint> for bigint::BigUint {
    type Error = Error;

    fn try_from(mpint: &Mpint) -> Result<bigint::BigUint> {
        mpint
            .as_positive_bytes()
            .map(bigint::BigUint::from_bytes_be)
            .ok_or(Error::Crypto)
    }
}

impl Zeroize for Mpint {
    fn zeroize(&mut self) {
        self.inner.zeroize();
    }
}

impl fmt::Debug for Mpint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mpint({self:X})")
    }
}

impl fmt::Display for Mpint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:X}")
    }
}

impl fmt::LowerHex for Mpint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Mpint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Mpint;
    use encoding::{Decode, Encode};
    use hex_literal::hex;

    #[test]
    fn decode_0() {
        let n = Mpint::from_bytes(b"").unwrap();
        assert_eq!(b"", n.as_bytes());

        let mut out = alloc::vec::Vec::new();
        n.encode(&mut out).unwrap();
        assert_eq!(&hex!("00000000"), out.as_slice());
    }

    #[test]
    fn reject_extra_leading_zeroes() {
        assert!(Mpint::from_bytes(&hex!("00")).is_err());
        assert!(Mpint::from_bytes(&hex!("00 00")).is_err());
        assert!(Mpint::from_bytes(&hex!("00 01")).is_err());
    }

    #[test]
    fn decode_9a378f9b2e332a7() {
        assert!(Mpint::from_bytes(&hex!("09 a3 78 f9 b2 e3 32 a7")).is_ok());
    }

    #[test]
    fn decode_80() {
        let n = Mpint::from_bytes(&hex!("00 80")).unwrap();

        // Leading zero stripped
        assert_eq!(&hex!("80"), n.as_positive_bytes().unwrap());
    }

    #[test]
    fn negative_not_positive() {
        let n = Mpint::from_bytes(&hex!("ed cc")).unwrap();
        assert!(!n.is_positive());
        assert!(n.as_positive_bytes().is_none());
    }

    #[test]
    fn encode_f7() {
        // 0xF7 needs a zero pad byte to stay positive
        let n = Mpint::from_positive_bytes(&hex!("f7")).unwrap();
        assert_eq!(&hex!("00 f7"), n.as_bytes());

        let mut out = alloc::vec::Vec::new();
        n.encode(&mut out).unwrap();
        assert_eq!(&hex!("00000002 00f7"), out.as_slice());
    }

    #[test]
    fn encode_65537() {
        let e = Mpint::from_positive_bytes(&hex!("010001")).unwrap();
        assert_eq!(&hex!("010001"), e.as_bytes());
        assert_eq!(e.encoded_len().unwrap(), 7);

        let mut out = alloc::vec::Vec::new();
        e.encode(&mut out).unwrap();
        assert_eq!(&hex!("00000003 010001"), out.as_slice());
    }

    #[test]
    fn biguint_round_trip() {
        let uint = bigint::BigUint::from(65537u32);
        let mpint = Mpint::try_from(&uint).unwrap();
        assert_eq!(uint, bigint::BigUint::try_from(&mpint).unwrap());
    }

    #[test]
    fn decode_rejects_leading_zeroes() {
        let mut blob: &[u8] = &hex!("00000002 0001");
        assert!(Mpint::decode(&mut blob).is_err());
    }
}
