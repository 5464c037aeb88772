/*!
Profile claim errors.
*/
use crate::Claim;
use thiserror::Error;

pub use serde_json::Error as Json;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Json(#[from] Json),
    #[error("Claim list has no claim matching '{0}'")]
    MissingClaim(Claim),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
