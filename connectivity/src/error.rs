use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectivityError {
    #[error("element id {id} is out of range for {len} elements")]
    OutOfRange { id: usize, len: usize },
}

/// Errors from parsing a pair stream (`N` header followed by `p q` lines).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("missing element count header")]
    MissingHeader,

    #[error("invalid integer '{0}' on line {1}")]
    InvalidInteger(String, usize),

    #[error("expected 2 ids on line {line}, found {found}")]
    WrongFieldCount { line: usize, found: usize },

    #[error("line {line}: {source}")]
    OutOfRange {
        line: usize,
        #[source]
        source: ConnectivityError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected quick-find, quick-union or weighted-quick-union)")]
pub struct UnknownAlgorithm(pub String);
