//! Oracle access errors.

/// Errors raised when a required oracle is missing from the environment.
///
/// These are fatal: the turn engine cannot resolve actions without the
/// world data the oracle would have provided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("MapOracle not available")]
    MapNotAvailable,

    #[error("VisionOracle not available")]
    VisionNotAvailable,

    #[error("PathOracle not available")]
    PathsNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,
}
