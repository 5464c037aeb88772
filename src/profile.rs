use crate::claim::{first_of_type, is_blank};
use crate::{Address, Claim, ClaimType};
use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

/// Structured view of the profile claims of a user, as edited in a form.
///
/// Every field is optional. An empty or whitespace-only string is the same as
/// a missing one.
#[derive(Debug, Default, Deserialize, Serialize, Validate, Clone, Eq, PartialEq)]
pub struct OpenIdProfile {
    #[serde(default)]
    /// Full name, the `name` claim.
    pub full_name: Option<String>,
    #[serde(default)]
    #[validate(custom = "validate_url")]
    /// URL of the user's Web page or blog, the `website` claim.
    pub website: Option<String>,
    #[serde(default)]
    #[validate(custom = "validate_url")]
    /// URL of the user's profile page, the `profile` claim.
    pub profile: Option<String>,
    #[serde(default)]
    /// Street address component of the `address` claim.
    pub street_address: Option<String>,
    #[serde(default)]
    /// City or locality component of the `address` claim.
    pub locality: Option<String>,
    #[serde(default)]
    /// State, province, prefecture, or region component of the `address` claim.
    pub region: Option<String>,
    #[serde(default)]
    /// Zip code or postal code component of the `address` claim.
    pub postal_code: Option<String>,
    #[serde(default)]
    /// Country name component of the `address` claim.
    pub country: Option<String>,
}

impl OpenIdProfile {
    /// Maps a stored claim list to a profile.
    ///
    /// For every claim type the first matching claim wins. The `address` claim
    /// is read leniently: a value that cannot be parsed leaves all address
    /// fields absent.
    pub fn from_claims(claims: &[Claim]) -> Self {
        let value = |claim_type| first_of_type(claims, claim_type).map(|claim| claim.value.clone());

        let mut profile = OpenIdProfile {
            full_name: value(ClaimType::Name),
            website: value(ClaimType::Website),
            profile: value(ClaimType::Profile),
            ..Default::default()
        };

        if let Some(address) = first_of_type(claims, ClaimType::Address) {
            profile.set_address(Address::from_claim_value(&address.value));
        }

        profile
    }

    /// The address fields of this profile.
    pub fn address(&self) -> Address {
        Address {
            street_address: self.street_address.clone(),
            locality: self.locality.clone(),
            region: self.region.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
        }
    }

    pub fn set_address(&mut self, address: Address) {
        self.street_address = address.street_address;
        self.locality = address.locality;
        self.region = address.region;
        self.postal_code = address.postal_code;
        self.country = address.country;
    }

    /// The composite `address` claim. Its value is empty when no address field is set.
    pub fn address_claim(&self) -> Claim {
        Claim::new(ClaimType::Address, self.address().to_claim_value())
    }

    /// The claim this profile holds for `claim_type`, if the field has a value.
    pub fn claim(&self, claim_type: ClaimType) -> Option<Claim> {
        let value = match claim_type {
            ClaimType::Name => self.full_name.clone(),
            ClaimType::Website => self.website.clone(),
            ClaimType::Profile => self.profile.clone(),
            ClaimType::Address => Some(self.address().to_claim_value()),
        };

        value
            .filter(|value| !is_blank(value))
            .map(|value| Claim::new(claim_type, value))
    }

    /// All claims this profile holds.
    pub fn to_claims(&self) -> Vec<Claim> {
        ClaimType::ALL
            .iter()
            .filter_map(|claim_type| self.claim(*claim_type))
            .collect()
    }
}

fn validate_url(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Ok(());
    }
    match Url::parse(value) {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("url")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_claims_takes_first_match() {
        let claims = vec![
            Claim::new("sub", "42"),
            Claim::new(ClaimType::Name, "Alice"),
            Claim::new(ClaimType::Website, "https://alice.example.com"),
            Claim::new(ClaimType::Name, "Alicia"),
            Claim::new(ClaimType::Profile, "https://example.com/alice"),
        ];
        let profile = OpenIdProfile::from_claims(&claims);
        assert_eq!(Some("Alice".to_string()), profile.full_name);
        assert_eq!(
            Some("https://alice.example.com".to_string()),
            profile.website
        );
        assert_eq!(
            Some("https://example.com/alice".to_string()),
            profile.profile
        );
        assert_eq!(Address::default(), profile.address());
    }

    #[test]
    fn from_claims_reads_address() {
        let claims = vec![
            Claim::new(ClaimType::Address, r#"{"locality":"Prague"}"#),
            Claim::new(ClaimType::Address, r#"{"locality":"Brno"}"#),
        ];
        let profile = OpenIdProfile::from_claims(&claims);
        assert_eq!(Some("Prague".to_string()), profile.locality);
        assert_eq!(None, profile.country);
        assert_eq!(None, profile.full_name);
    }

    #[test]
    fn from_claims_survives_malformed_address() {
        let claims = vec![
            Claim::new(ClaimType::Name, "Alice"),
            Claim::new(ClaimType::Address, "{not json"),
        ];
        let profile = OpenIdProfile::from_claims(&claims);
        assert_eq!(Some("Alice".to_string()), profile.full_name);
        assert_eq!(Address::default(), profile.address());
    }

    #[test]
    fn empty_profile_has_no_claims() {
        let profile = OpenIdProfile::default();
        assert!(profile.to_claims().is_empty());
        assert_eq!(Claim::new(ClaimType::Address, ""), profile.address_claim());
    }

    #[test]
    fn blank_fields_have_no_claims() {
        let profile = OpenIdProfile {
            full_name: Some("   ".into()),
            website: Some(String::new()),
            locality: Some("\t".into()),
            ..Default::default()
        };
        assert!(profile.to_claims().is_empty());
        assert_eq!(None, profile.claim(ClaimType::Address));
    }

    #[test]
    fn to_claims_in_type_order() {
        let profile = OpenIdProfile {
            full_name: Some("Alice".into()),
            profile: Some("https://example.com/alice".into()),
            country: Some("CZ".into()),
            ..Default::default()
        };
        assert_eq!(
            vec![
                Claim::new(ClaimType::Name, "Alice"),
                Claim::new(ClaimType::Profile, "https://example.com/alice"),
                Claim::new(ClaimType::Address, r#"{"country":"CZ"}"#),
            ],
            profile.to_claims()
        );
    }

    #[test]
    fn address_claim_is_stable() {
        let profile = OpenIdProfile {
            street_address: Some("Main Street 1".into()),
            postal_code: Some("12345".into()),
            ..Default::default()
        };
        assert_eq!(profile.address_claim(), profile.clone().address_claim());
        assert_eq!(
            r#"{"street_address":"Main Street 1","postal_code":"12345"}"#,
            profile.address_claim().value
        );
    }

    #[test]
    fn validates_urls() {
        let profile = OpenIdProfile {
            website: Some("https://alice.example.com".into()),
            profile: Some(" ".into()),
            ..Default::default()
        };
        assert!(profile.validate().is_ok());

        let profile = OpenIdProfile {
            website: Some("alice.example.com".into()),
            ..Default::default()
        };
        let errors = profile.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("website"));
    }

    #[test]
    fn deserializes_from_form_json() {
        let json = r#"
            {
                "full_name": "Alice",
                "locality": "Prague"
            }
        "#;
        let profile: OpenIdProfile = serde_json::from_str(json).unwrap();
        assert_eq!(Some("Alice".to_string()), profile.full_name);
        assert_eq!(Some("Prague".to_string()), profile.locality);
        assert_eq!(None, profile.website);
    }
}
