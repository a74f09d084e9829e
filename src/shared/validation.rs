use validator::ValidationError;

/// Reject values that are empty once surrounding whitespace is stripped.
/// Length constraints alone let "   " through, which services would then
/// trim down to an empty string before storing.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_whitespace_only() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
    }

    #[test]
    fn test_accepts_padded_content() {
        assert!(not_blank("x").is_ok());
        assert!(not_blank("  Weekly sync  ").is_ok());
    }
}
