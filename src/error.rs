use thiserror::Error;

/// Errors raised while building parameters or decoding caller input.
///
/// The permutation itself is total; every variant here is either a
/// configuration defect detected before any hash is computed, or input that
/// does not encode a canonical field element.
#[derive(Debug, Error)]
pub enum Error {
    #[error("expected {expected} full round constant triples, got {got}")]
    FullConstantsLength { expected: usize, got: usize },

    #[error("expected {expected} partial round constants, got {got}")]
    PartialConstantsLength { expected: usize, got: usize },

    #[error("full round constant row {index} has {got} elements, expected {expected}")]
    ConstantWidth {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("linear layer must be a {expected}x{expected} matrix, got {rows} rows with a row of {cols}")]
    MatrixShape {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("linear layer is not an MDS matrix")]
    NotMds,

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("`{0}` is not a canonical field element")]
    NonCanonical(String),

    #[error("merkle tree needs at least one leaf")]
    EmptyTree,

    #[error("leaf index {index} out of range for {leaves} leaves")]
    LeafIndex { index: usize, leaves: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
