/// Optional settings for applying claim changes.
/// Derives Default, so remember to ..Default::default() after you specify what you want.
#[derive(Debug, Default, Clone)]
pub struct Options {
    pub missing_claim: MissingClaimPolicy,
}

/// What to do when a claim to remove or replace is not in the claim list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MissingClaimPolicy {
    /// Stop with [`Error::MissingClaim`](crate::error::Error::MissingClaim).
    #[default]
    Fail,
    /// Log a warning and carry on with the remaining changes.
    Skip,
}
