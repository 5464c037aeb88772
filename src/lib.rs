/*!
# OpenID Connect profile claims

## Legal

Dual-licensed under `MIT` or the [UNLICENSE](http://unlicense.org/).

## Features

Maps the profile related [Standard Claims](https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims)
of a user (`name`, `website`, `profile` and the composite `address` claim) to an
editable [`OpenIdProfile`] and back.

When a profile is edited, the stored claims are reconciled with the new values
as three lists of operations: claims to add, claims to remove and claims to
replace. Unchanged fields produce no operations at all, which suits claim
stores that index claims by type and have no upsert.

The crate does no I/O. Storing the claims is up to the caller.

## Usage

```rust
use openid_profile::{Claim, ClaimChanges, ClaimType, OpenIdProfile, Options};

let stored = vec![
    Claim::new(ClaimType::Name, "Alice"),
    Claim::new(ClaimType::Address, r#"{"locality":"Prague"}"#),
];

let mut profile = OpenIdProfile::from_claims(&stored);
assert_eq!(Some("Prague"), profile.locality.as_deref());

profile.full_name = Some("Alice Smith".into());
profile.country = Some("CZ".into());
profile.website = Some("https://alice.example.com".into());

let changes = ClaimChanges::compute(&stored, &profile);
assert_eq!(
    vec![Claim::new(ClaimType::Website, "https://alice.example.com")],
    changes.to_add
);
assert!(changes.to_remove.is_empty());
assert_eq!(2, changes.to_replace.len());
assert_eq!(
    r#"{"locality":"Prague","country":"CZ"}"#,
    changes.to_replace[1].new.value
);

let claims = changes.apply(&stored, &Options::default())?;
assert_eq!(OpenIdProfile::from_claims(&claims), profile);
# Ok::<(), openid_profile::error::Error>(())
```
*/
mod address;
mod claim;
mod claim_type;
pub mod combobox;
pub mod error;
mod options;
mod profile;
pub mod reconcile;

pub use address::Address;
pub use claim::Claim;
pub use claim_type::ClaimType;
pub use options::{MissingClaimPolicy, Options};
pub use profile::OpenIdProfile;
pub use reconcile::{
    claims_to_add, claims_to_remove, claims_to_replace, ClaimChanges, ClaimReplacement,
    FieldChange,
};
