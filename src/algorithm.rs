//! Algorithm support.

use core::{fmt, str};
use encoding::{Label, LabelError};

/// RSA
const SSH_RSA: &str = "ssh-rsa";

/// SSH public key algorithms: wire name strings tied to the key types this
/// crate understands.
///
/// Currently RSA only. Support for another algorithm is added by introducing
/// a variant here along with matching arms in [`KeyData`] and
/// [`KeypairData`].
///
/// [`KeyData`]: crate::public::KeyData
/// [`KeypairData`]: crate::private::KeypairData
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Algorithm {
    /// RSA with SHA-1 as described in [RFC4253 § 6.6](https://datatracker.ietf.org/doc/html/rfc4253#section-6.6)
    #[default]
    Rsa,
}

impl Algorithm {
    /// Decode algorithm from the given string identifier.
    ///
    /// # Supported algorithms
    /// - `ssh-rsa`
    pub fn new(id: &str) -> Result<Self, LabelError> {
        match id {
            SSH_RSA => Ok(Algorithm::Rsa),
            _ => Err(LabelError::new(id)),
        }
    }

    /// Get the string identifier which corresponds to this algorithm.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Rsa => SSH_RSA,
        }
    }

    /// Is the algorithm RSA?
    pub fn is_rsa(self) -> bool {
        self == Algorithm::Rsa
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Label for Algorithm {}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for Algorithm {
    type Err = LabelError;

    fn from_str(id: &str) -> Result<Self, LabelError> {
        Algorithm::new(id)
    }
}
