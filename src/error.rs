use core::fmt;

/// Errors surfaced by the core. Decapsulation never produces one of these for
/// a malformed or tampered ciphertext of the right length — that case is
/// handled by implicit rejection (see [`crate::kem`]), not by `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A byte buffer had the wrong length, an unknown parameter set was
    /// requested, or two operands had mismatched vector lengths.
    InvalidArgument(&'static str),
    /// The randomness port failed to deliver the requested number of bytes.
    RandomnessFailure,
    /// An invariant that should be unreachable in a correct implementation
    /// was violated.
    Internal(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Error::RandomnessFailure => write!(f, "randomness port failed to deliver bytes"),
            Error::Internal(msg) => write!(f, "internal invariant violated: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
