use super::ApiError;

/// Parses an optional integer query value, treating anything unparseable as
/// absent so the caller's default applies.
#[must_use]
pub fn lenient_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// Recipe ids are matched exactly, so the value is passed through untouched.
pub fn validate_recipe_id(id: &str) -> Result<&str, ApiError> {
    if id.is_empty() {
        return Err(ApiError::validation("Recipe ID cannot be empty"));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int(Some("4")), Some(4));
        assert_eq!(lenient_int(Some(" 20 ")), Some(20));
        assert_eq!(lenient_int(Some("-1")), Some(-1));
        assert_eq!(lenient_int(Some("abc")), None);
        assert_eq!(lenient_int(Some("")), None);
        assert_eq!(lenient_int(None), None);
    }

    #[test]
    fn test_validate_recipe_id() {
        assert_eq!(validate_recipe_id("AB12CD3").unwrap(), "AB12CD3");
        assert_eq!(validate_recipe_id(" AB12CD3").unwrap(), " AB12CD3");
        assert!(validate_recipe_id("").is_err());
    }
}
