use crate::claim::non_blank;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const STREET_ADDRESS: &str = "street_address";
const LOCALITY: &str = "locality";
const REGION: &str = "region";
const POSTAL_CODE: &str = "postal_code";
const COUNTRY: &str = "country";

/// Address Claim struct, the value of the `address` claim.
///
/// See [Address Claim](https://openid.net/specs/openid-connect-core-1_0.html#AddressClaim).
#[derive(Debug, Default, Deserialize, Serialize, Clone, Eq, PartialEq)]
pub struct Address {
    #[serde(default)]
    /// Full street address component, which MAY include house number, street
    /// name, Post Office Box, and multi-line extended street address
    /// information. This field MAY contain multiple lines, separated by
    /// newlines. Newlines can be represented either as a carriage return/line
    /// feed pair ("\r\n") or as a single line feed character ("\n").
    pub street_address: Option<String>,
    #[serde(default)]
    /// City or locality component.
    pub locality: Option<String>,
    #[serde(default)]
    /// State, province, prefecture, or region component.
    pub region: Option<String>,
    // Countries like the UK use alphanumeric postal codes, so you can't just use a number here
    #[serde(default)]
    /// Zip code or postal code component.
    pub postal_code: Option<String>,
    #[serde(default)]
    /// Country name component.
    pub country: Option<String>,
}

impl Address {
    fn members(&self) -> [(&'static str, Option<&str>); 5] {
        [
            (STREET_ADDRESS, self.street_address.as_deref()),
            (LOCALITY, self.locality.as_deref()),
            (REGION, self.region.as_deref()),
            (POSTAL_CODE, self.postal_code.as_deref()),
            (COUNTRY, self.country.as_deref()),
        ]
    }

    /// True when no component carries a value.
    pub fn is_empty(&self) -> bool {
        self.members()
            .iter()
            .all(|(_, value)| non_blank(*value).is_none())
    }

    /// Serializes the non-empty components as a JSON object.
    ///
    /// Members are always written in the same order, so equal addresses give
    /// byte-identical text. An empty address gives an empty string.
    ///
    /// The text is compact and keeps non-ASCII characters as UTF-8. Writers
    /// that escape them as `\uXXXX` produce a different text for the same
    /// object, so compare stored values with [`Address::from_claim_value`]
    /// rather than by text.
    pub fn to_claim_value(&self) -> String {
        let members: Map<String, Value> = self
            .members()
            .iter()
            .filter_map(|(key, value)| {
                non_blank(*value).map(|value| (key.to_string(), Value::from(value)))
            })
            .collect();

        if members.is_empty() {
            String::new()
        } else {
            Value::Object(members).to_string()
        }
    }

    /// Reads an `address` claim value.
    ///
    /// Never fails: a value that is not a JSON object gives an empty address,
    /// and a missing member leaves its component absent.
    pub fn from_claim_value(value: &str) -> Self {
        let members = match serde_json::from_str::<Value>(value) {
            Ok(Value::Object(members)) => members,
            Ok(other) => {
                debug!("address claim is not a JSON object: {}", other);
                return Address::default();
            }
            Err(err) => {
                debug!("address claim is not valid JSON: {}", err);
                return Address::default();
            }
        };

        Address {
            street_address: member(&members, STREET_ADDRESS),
            locality: member(&members, LOCALITY),
            region: member(&members, REGION),
            postal_code: member(&members, POSTAL_CODE),
            country: member(&members, COUNTRY),
        }
    }
}

// Non-string members are kept as their JSON text, null counts as missing.
fn member(members: &Map<String, Value>, key: &str) -> Option<String> {
    match members.get(key)? {
        Value::Null => None,
        Value::String(value) => Some(value.clone()),
        other => Some(other.to_string()),
    }
}
