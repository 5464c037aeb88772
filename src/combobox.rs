/*!
Combobox values, stored as JSON and bound to form lists.
*/
use crate::error::Result;

/// Appends the strings of a JSON array to `list`.
///
/// Missing or empty input and a JSON `null` leave the list untouched. Anything
/// that is not an array of strings is a [`Json`](crate::error::Error::Json) error.
pub fn populate_values_to_list(json_values: Option<&str>, list: &mut Vec<String>) -> Result<()> {
    let json_values = match json_values {
        Some(json_values) if !json_values.is_empty() => json_values,
        _ => return Ok(()),
    };

    let values: Option<Vec<String>> = serde_json::from_str(json_values)?;
    if let Some(values) = values {
        list.extend(values);
    }

    Ok(())
}

/// Reads a single selected value stored as a JSON string.
pub fn populate_value(json_value: Option<&str>) -> Result<Option<String>> {
    match json_value {
        Some(json_value) if !json_value.is_empty() => Ok(serde_json::from_str(json_value)?),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn appends_values() {
        let mut list = vec!["openid".to_string()];
        populate_values_to_list(Some(r#"["profile", "email"]"#), &mut list).unwrap();
        assert_eq!(vec!["openid", "profile", "email"], list);
    }

    #[test]
    fn empty_input_is_noop() {
        let mut list = vec!["openid".to_string()];
        populate_values_to_list(None, &mut list).unwrap();
        populate_values_to_list(Some(""), &mut list).unwrap();
        populate_values_to_list(Some("null"), &mut list).unwrap();
        populate_values_to_list(Some("[]"), &mut list).unwrap();
        assert_eq!(vec!["openid"], list);
    }

    #[test]
    fn malformed_input_fails() {
        let mut list = Vec::new();
        let err = populate_values_to_list(Some(r#"["profile""#), &mut list).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(populate_values_to_list(Some("[1, 2]"), &mut list).is_err());
        assert!(populate_values_to_list(Some(r#""profile""#), &mut list).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn reads_single_value() {
        assert_eq!(
            Some("profile".to_string()),
            populate_value(Some(r#""profile""#)).unwrap()
        );
        assert_eq!(None, populate_value(Some("null")).unwrap());
        assert_eq!(None, populate_value(None).unwrap());
        assert!(populate_value(Some("[]")).is_err());
    }
}
