//! Presence checks on incoming post data.

use crate::error::DomainError;

use super::post::PostDraft;

/// Reject a draft whose title, author or content is empty or
/// whitespace-only. Every failing field is named in the error.
pub fn validate_draft(draft: &PostDraft) -> Result<(), DomainError> {
    let mut missing = Vec::new();

    if draft.title.trim().is_empty() {
        missing.push("title is required".to_owned());
    }
    if draft.author.trim().is_empty() {
        missing.push("author is required".to_owned());
    }
    if draft.content.trim().is_empty() {
        missing.push("content is required".to_owned());
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(missing))
    }
}

/// Updates must target the same id in the URL and the body. A body without
/// an id is accepted; the URL id wins.
pub fn check_id_match(path_id: i64, body_id: Option<i64>) -> Result<(), DomainError> {
    match body_id {
        Some(body) if body != path_id => Err(DomainError::IdMismatch {
            path: path_id,
            body,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_passes() {
        let draft = PostDraft::new("Title", "Author", "Content");
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn every_blank_field_is_reported() {
        let draft = PostDraft::new("", "   ", "c");
        let err = validate_draft(&draft).unwrap_err();
        match err {
            DomainError::Validation(reasons) => {
                assert_eq!(reasons.len(), 2);
                assert!(reasons[0].contains("title"));
                assert!(reasons[1].contains("author"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_content_is_rejected() {
        let draft = PostDraft::new("t", "a", "\t\n ");
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn id_mismatch_is_rejected() {
        assert!(check_id_match(1, Some(1)).is_ok());
        assert!(check_id_match(1, None).is_ok());
        let err = check_id_match(1, Some(2)).unwrap_err();
        assert!(matches!(err, DomainError::IdMismatch { path: 1, body: 2 }));
    }
}
