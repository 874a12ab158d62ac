//! Task field limits and validation functions.
//!
//! Lengths are measured in characters, not bytes, so multi-byte titles get
//! the same budget as ASCII ones.

/// Minimum length of a task title in characters.
pub const MIN_TITLE_LENGTH: u64 = 1;

/// Maximum length of a task title in characters.
pub const MAX_TITLE_LENGTH: u64 = 200;

/// Maximum length of a task description in characters.
pub const MAX_DESCRIPTION_LENGTH: u64 = 1000;

/// Validate a task title: non-empty and within the length limit.
pub fn validate_title(title: &str) -> Result<(), String> {
    let len = title.chars().count() as u64;
    if len < MIN_TITLE_LENGTH {
        return Err("Task title cannot be empty".to_string());
    }
    if len > MAX_TITLE_LENGTH {
        return Err(format!(
            "Task title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a task description against the length limit.
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.chars().count() as u64 > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "Task description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bounds() {
        assert!(validate_title("").is_err());
        assert!(validate_title("a").is_ok());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH as usize)).is_ok());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH as usize + 1)).is_err());
    }

    #[test]
    fn title_counts_characters_not_bytes() {
        // 200 two-byte characters is 400 bytes but still a valid title.
        assert!(validate_title(&"é".repeat(MAX_TITLE_LENGTH as usize)).is_ok());
    }

    #[test]
    fn description_bounds() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"d".repeat(MAX_DESCRIPTION_LENGTH as usize)).is_ok());
        let err = validate_description(&"d".repeat(MAX_DESCRIPTION_LENGTH as usize + 1)).unwrap_err();
        assert!(err.contains("1000"));
    }
}
