/*!
Claim set reconciliation.

Moving a user from one [`OpenIdProfile`] to another is expressed as three
lists of claim operations, the way claim stores that index claims by type
expect them: claims to add, claims to remove and claims to replace. Every
profile field falls into exactly one [`FieldChange`]:

- empty to value: add,
- value to empty: remove,
- value to a different value: replace,
- anything else: nothing to do.

The address fields form a single `address` claim, so a change to any of them
adds, removes or replaces the whole claim.
*/
use crate::claim::{first_of_type, non_blank};
use crate::error::{Error, Result};
use crate::options::MissingClaimPolicy;
use crate::{Address, Claim, ClaimType, OpenIdProfile, Options};
use log::warn;

/// How a single profile field changes between two profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Unchanged,
    Add(String),
    Remove(String),
    Replace { old: String, new: String },
}

/// Classifies the transition of one field value. Blank values count as empty.
pub fn classify(old: Option<&str>, new: Option<&str>) -> FieldChange {
    match (non_blank(old), non_blank(new)) {
        (None, None) => FieldChange::Unchanged,
        (None, Some(new)) => FieldChange::Add(new.to_owned()),
        (Some(old), None) => FieldChange::Remove(old.to_owned()),
        (Some(old), Some(new)) if old == new => FieldChange::Unchanged,
        (Some(old), Some(new)) => FieldChange::Replace {
            old: old.to_owned(),
            new: new.to_owned(),
        },
    }
}

/// Per claim type changes between two profiles, in [`ClaimType::ALL`] order.
pub fn field_changes(old: &OpenIdProfile, new: &OpenIdProfile) -> Vec<(ClaimType, FieldChange)> {
    ClaimType::ALL
        .iter()
        .map(|&claim_type| {
            let old_claim = old.claim(claim_type);
            let new_claim = new.claim(claim_type);
            let change = classify(
                old_claim.as_ref().map(|claim| claim.value.as_str()),
                new_claim.as_ref().map(|claim| claim.value.as_str()),
            );
            (claim_type, change)
        })
        .collect()
}

/// A stored claim and the claim that takes its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimReplacement {
    pub old: Claim,
    pub new: Claim,
}

/// Claims to remove, carrying the old values.
pub fn claims_to_remove(old: &OpenIdProfile, new: &OpenIdProfile) -> Vec<Claim> {
    field_changes(old, new)
        .into_iter()
        .filter_map(|(claim_type, change)| match change {
            FieldChange::Remove(value) => Some(Claim::new(claim_type, value)),
            _ => None,
        })
        .collect()
}

/// Claims to add, carrying the new values.
pub fn claims_to_add(old: &OpenIdProfile, new: &OpenIdProfile) -> Vec<Claim> {
    field_changes(old, new)
        .into_iter()
        .filter_map(|(claim_type, change)| match change {
            FieldChange::Add(value) => Some(Claim::new(claim_type, value)),
            _ => None,
        })
        .collect()
}

/// Claims to replace. Each old claim is the first stored claim of its type.
///
/// The old profile is extracted from `old_claims` with the same first match
/// lookup, so every field with an old value has a stored claim to replace.
pub fn claims_to_replace(old_claims: &[Claim], new: &OpenIdProfile) -> Vec<ClaimReplacement> {
    let old = OpenIdProfile::from_claims(old_claims);

    field_changes(&old, new)
        .into_iter()
        .filter_map(|(claim_type, change)| match change {
            FieldChange::Replace { new: value, .. } => {
                first_of_type(old_claims, claim_type).map(|old| ClaimReplacement {
                    old: old.clone(),
                    new: Claim::new(claim_type, value),
                })
            }
            _ => None,
        })
        .collect()
}

/// All changes needed to bring a stored claim list in line with a profile.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClaimChanges {
    pub to_add: Vec<Claim>,
    pub to_remove: Vec<Claim>,
    pub to_replace: Vec<ClaimReplacement>,
}

impl ClaimChanges {
    pub fn compute(old_claims: &[Claim], new: &OpenIdProfile) -> Self {
        let old = OpenIdProfile::from_claims(old_claims);

        ClaimChanges {
            to_add: claims_to_add(&old, new),
            to_remove: claims_to_remove(&old, new),
            to_replace: claims_to_replace(old_claims, new),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty() && self.to_replace.is_empty()
    }

    /// Applies the changes to a claim list the way a claim store would.
    ///
    /// Replacements keep the position of the old claim. A removal drops the
    /// first equal claim; an `address` removal also matches a stored address
    /// that is spelled differently but holds the same members. Additions are
    /// appended. Changes without a matching claim follow
    /// [`Options::missing_claim`].
    ///
    /// Only the first claim of each type is changed. Further claims of the
    /// same type stay in the list, so after removing the first `name` claim
    /// a second one becomes the profile's full name.
    pub fn apply(&self, claims: &[Claim], options: &Options) -> Result<Vec<Claim>> {
        let mut claims = claims.to_vec();

        for replacement in &self.to_replace {
            match claims.iter().position(|claim| claim == &replacement.old) {
                Some(index) => claims[index] = replacement.new.clone(),
                None => missing(&replacement.old, options)?,
            }
        }

        for removal in &self.to_remove {
            let index = claims
                .iter()
                .position(|claim| claim == removal)
                .or_else(|| same_address_position(&claims, removal));
            match index {
                Some(index) => {
                    claims.remove(index);
                }
                None => missing(removal, options)?,
            }
        }

        claims.extend(self.to_add.iter().cloned());

        Ok(claims)
    }
}

// Address values are compared by their members, not by their text.
fn same_address_position(claims: &[Claim], removal: &Claim) -> Option<usize> {
    if !removal.is(ClaimType::Address) {
        return None;
    }
    let address = Address::from_claim_value(&removal.value);
    claims.iter().position(|claim| {
        claim.is(ClaimType::Address) && Address::from_claim_value(&claim.value) == address
    })
}

fn missing(claim: &Claim, options: &Options) -> Result<()> {
    match options.missing_claim {
        MissingClaimPolicy::Fail => Err(Error::MissingClaim(claim.clone())),
        MissingClaimPolicy::Skip => {
            warn!("skipping change of claim not in the list: {}", claim);
            Ok(())
        }
    }
}
