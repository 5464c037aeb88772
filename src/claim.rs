use crate::ClaimType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed identity attribute as kept by a claim store.
///
/// Claims compare equal by type and value. The type is kept as a plain string
/// because stored claim lists may carry types outside of [`ClaimType`].
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq, Hash)]
pub struct Claim {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Claim {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }

    /// Whether this claim is of the given profile claim type.
    pub fn is(&self, claim_type: ClaimType) -> bool {
        self.claim_type == claim_type.as_str()
    }
}

impl From<ClaimType> for String {
    fn from(claim_type: ClaimType) -> Self {
        claim_type.as_str().to_owned()
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.claim_type, self.value)
    }
}

/// First claim of the given type, in list order.
pub(crate) fn first_of_type(claims: &[Claim], claim_type: ClaimType) -> Option<&Claim> {
    claims.iter().find(|claim| claim.is(claim_type))
}

/// Absent, empty and whitespace-only values all count as "no value".
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !is_blank(value))
}
