use std::fmt;

/// Discriminated result codes for every fallible operation in this crate.
///
/// Mirrors the `C_KZG_RET` taxonomy of the reference implementation: callers
/// distinguish "the input was malformed" (`BadArgs`) from "the library itself
/// is in a state it should never be in" (`Internal`), and I/O failures while
/// loading a trusted setup get their own kind so they aren't mistaken for bad
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed encoding, wrong length, out-of-range scalar, a point not on
    /// the curve or not in the prime-order subgroup, a non-power-of-two FFT
    /// size, or an unrecognized trusted-setup preset.
    BadArgs(String),
    /// Allocation failure. The caller may retry.
    Malloc(String),
    /// Reading the trusted-setup file failed.
    Io(String),
    /// An invariant the library relies on was violated. This indicates a bug
    /// in this crate, not bad caller input.
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadArgs(msg) => write!(f, "bad arguments: {msg}"),
            Error::Malloc(msg) => write!(f, "allocation failure: {msg}"),
            Error::Io(msg) => write!(f, "i/o error: {msg}"),
            Error::Internal(msg) => write!(f, "internal invariant violated: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

pub(crate) fn bad_args(msg: impl Into<String>) -> Error {
    Error::BadArgs(msg.into())
}

pub(crate) fn internal(msg: impl Into<String>) -> Error {
    Error::Internal(msg.into())
}
