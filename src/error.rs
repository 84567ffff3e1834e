//! Errors surfaced by key generation, import and agreement.
//!
//! Arithmetic never fails: a missing square root is reported as a `u32`
//! status mask by the field code and handled as a normal outcome.
use thiserror::Error;

use crate::params::{FieldId, Role};

#[derive(Debug, Error)]
pub enum Error {
    #[error("mismatched parameters: private key is {own_field}/{own_role}, public key is {peer_field}/{peer_role}")]
    MismatchedParameters {
        own_field: FieldId,
        own_role: Role,
        peer_field: FieldId,
        peer_role: Role,
    },

    #[error("invalid encoding for {context}: expected {expected} bytes, got {got}")]
    InvalidEncoding {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("random source failure: {0}")]
    RandomSourceFailure(#[from] rand_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
