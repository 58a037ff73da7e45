//! Provides the error type used throughout this crate.

use std::collections::TryReserveError;
use thiserror::Error;

/// The error type of all fallible tree operations. Generic over the payload
/// so that the value that could not be found travels with the error.
#[derive(Error, Debug)]
pub enum BinaryTreeError<Load> {
    #[error("Value not in tree: {0:?}")]
    UnknownValue(Load),
    #[error("No root node set")]
    RootNotSet,
    #[error("Node allocation failed: {0}")]
    AllocationFailed(#[from] TryReserveError),
}
