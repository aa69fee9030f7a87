//! Presence and pattern checks for site creation.
//!
//! Validation runs before any store call and reports field-scoped issues so
//! the caller can annotate individual form fields.

use crate::error::StoreError;
use crate::model::NewSite;
use regex::Regex;
use std::sync::LazyLock;

static DOMAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z0-9-]+$").expect("domain pattern is valid"));

/// One failed check, scoped to a creation field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: &'static str,
}

/// Check every site-creation field, returning all issues found
pub fn validate_new_site(site: &NewSite) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if site.name.trim().is_empty() {
        issues.push(FieldIssue {
            field: "name",
            message: "Site name is required",
        });
    }

    if site.domain.trim().is_empty() {
        issues.push(FieldIssue {
            field: "domain",
            message: "Domain is required",
        });
    } else if !DOMAIN_PATTERN.is_match(&site.domain) {
        issues.push(FieldIssue {
            field: "domain",
            message: "Domain can only contain letters, numbers, and hyphens",
        });
    }

    if site.ai_prompt.trim().is_empty() {
        issues.push(FieldIssue {
            field: "aiPrompt",
            message: "AI prompt is required",
        });
    }

    issues
}

/// Fail with the first validation issue, if any
pub fn ensure_valid_new_site(site: &NewSite) -> Result<(), StoreError> {
    match validate_new_site(site).into_iter().next() {
        Some(issue) => Err(StoreError::validation(issue.field, issue.message)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Theme;

    fn valid_site() -> NewSite {
        NewSite {
            name: "Acme".to_string(),
            domain: "acme-1".to_string(),
            ai_prompt: "You are a helpful site assistant.".to_string(),
            ai_context: String::new(),
            theme: Theme::default(),
        }
    }

    #[test]
    fn valid_input_has_no_issues() {
        assert!(validate_new_site(&valid_site()).is_empty());
        assert!(ensure_valid_new_site(&valid_site()).is_ok());
    }

    #[test]
    fn missing_fields_are_reported_per_field() {
        let site = NewSite {
            name: "  ".to_string(),
            domain: String::new(),
            ai_prompt: String::new(),
            ..valid_site()
        };
        let issues = validate_new_site(&site);
        let fields: Vec<&str> = issues.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["name", "domain", "aiPrompt"]);
    }

    #[test]
    fn domain_pattern_rejects_invalid_characters() {
        let site = NewSite {
            domain: "bad domain!".to_string(),
            ..valid_site()
        };
        let issues = validate_new_site(&site);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "domain");
    }

    #[test]
    fn ensure_fails_before_any_store_call() {
        let site = NewSite {
            name: String::new(),
            ..valid_site()
        };
        let err = ensure_valid_new_site(&site).unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }
}
