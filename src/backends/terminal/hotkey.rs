//! Profile-menu position lookup.

use crate::error::HotkeyError;

/// 1-based slot of `target` in the profile menu ordering.
///
/// The terminal's "Change Profile" menu numbers entries from 1.
pub fn profile_position(order: &[String], target: &str) -> Result<usize, HotkeyError> {
    order
        .iter()
        .position(|id| id == target)
        .map(|idx| idx + 1)
        .ok_or_else(|| HotkeyError::NotFound(target.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Vec<String> {
        vec![
            "b1dcc9dd-5262-4d8d-a863-c897e6d979b9".to_string(),
            "b0682302-667e-4ceb-b714-c05924ab92fc".to_string(),
        ]
    }

    #[test]
    fn first_entry_is_position_one() {
        assert_eq!(
            profile_position(&order(), "b1dcc9dd-5262-4d8d-a863-c897e6d979b9"),
            Ok(1)
        );
    }

    #[test]
    fn second_entry_is_position_two() {
        assert_eq!(
            profile_position(&order(), "b0682302-667e-4ceb-b714-c05924ab92fc"),
            Ok(2)
        );
    }

    #[test]
    fn absent_identifier_is_not_found() {
        let missing = "00000000-0000-0000-0000-000000000000";
        assert_eq!(
            profile_position(&order(), missing),
            Err(HotkeyError::NotFound(missing.to_string()))
        );
    }
}
