//! Write-conflict detection.

use crate::error::DomainError;

/// Compare the version token currently stored against the one the caller
/// captured when it last read the record. A mismatch means another writer
/// got there first.
///
/// Detection only: the caller decides how to surface the conflict, and
/// nothing here retries.
pub fn check_conflict(current: i64, expected: i64) -> Result<(), DomainError> {
    if current == expected {
        Ok(())
    } else {
        Err(DomainError::Conflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_tokens_pass() {
        assert!(check_conflict(3, 3).is_ok());
    }

    #[test]
    fn stale_token_is_a_conflict() {
        assert!(matches!(
            check_conflict(4, 3),
            Err(DomainError::Conflict)
        ));
    }
}
