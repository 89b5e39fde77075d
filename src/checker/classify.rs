// src/checker/classify.rs
// =============================================================================
// Compares a response against a Rule. No I/O happens here, which keeps the
// classification rules easy to test.
//
// Two independent questions are asked of every response:
// 1. Does it match the rule? (status first, then Location) -> maybe a Mismatch
// 2. Is the status in the error class? -> Fatal, even if (1) found a Mismatch
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::error::CheckError;
use crate::rules::{resolve, Rule};

/// Reason recorded whenever the status code differs from the expected one.
pub const STATUS_MISMATCH_REASON: &str = "Different status code returned";

/// One divergence between the expected and the actual redirect.
///
/// Field order is the column order of the report file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mismatch {
    /// Old path, as written in the rules file (trimmed)
    pub old: String,
    /// New path, as written in the rules file (trimmed)
    pub new: String,
    /// Status code the server actually returned
    pub status_code: u16,
    /// Actual Location value, or STATUS_MISMATCH_REASON
    pub reason: String,
}

/// What a single check reports back to the pool.
#[derive(Debug)]
pub enum Outcome {
    /// Status and Location both matched
    Clean,
    Mismatch(Mismatch),
    /// Ends the run. A response in the error class can carry its Mismatch too.
    Fatal {
        error: CheckError,
        mismatch: Option<Mismatch>,
    },
}

impl Outcome {
    pub fn fatal(error: CheckError) -> Self {
        Outcome::Fatal {
            error,
            mismatch: None,
        }
    }
}

/// True for statuses that abort the run.
///
/// Matches `4[0-9][0-3|5-9]|5[0-9][0-9]` on the three digits: every 5xx, and
/// every 4xx whose last digit is not 4. So 404 (and 414, 424, ...) is NOT
/// fatal while 400-403 and 405-409 are.
pub fn is_error_class(status: u16) -> bool {
    match status {
        400..=499 => status % 10 != 4,
        500..=599 => true,
        _ => false,
    }
}

/// Classifies a response with `status` and optional `location` header.
///
/// A missing Location header compares as the empty string.
pub fn classify(rule: &Rule, status: u16, location: Option<&str>, site_url: &str) -> Outcome {
    let mismatch = if rule.expected_status == Some(status) {
        let target = resolve(&rule.new_path, site_url);
        let actual = location.unwrap_or("");
        if actual != target {
            Some(mismatch(rule, status, actual))
        } else {
            None
        }
    } else {
        Some(mismatch(rule, status, STATUS_MISMATCH_REASON))
    };

    if is_error_class(status) {
        return Outcome::Fatal {
            error: CheckError::ServerErrorClass { status },
            mismatch,
        };
    }

    match mismatch {
        Some(m) => Outcome::Mismatch(m),
        None => Outcome::Clean,
    }
}

fn mismatch(rule: &Rule, status: u16, reason: &str) -> Mismatch {
    Mismatch {
        old: rule.old_path.clone(),
        new: rule.new_path.clone(),
        status_code: status,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://ex.com";

    fn rule(old: &str, new: &str, expected: u16) -> Rule {
        Rule {
            row: 1,
            old_path: old.to_string(),
            new_path: new.to_string(),
            expected_status: Some(expected),
        }
    }

    #[test]
    fn test_matching_redirect_is_clean() {
        let outcome = classify(&rule("/old", "/new", 301), 301, Some("https://ex.com/new"), SITE);
        assert!(matches!(outcome, Outcome::Clean));
    }

    #[test]
    fn test_absolute_new_path_is_compared_verbatim() {
        let r = rule("/old", "https://other.com/new", 302);
        let outcome = classify(&r, 302, Some("https://other.com/new"), SITE);
        assert!(matches!(outcome, Outcome::Clean));
    }

    #[test]
    fn test_different_status_uses_fixed_reason_and_actual_code() {
        // A non-fatal code, so this is a plain Mismatch
        let outcome = classify(&rule("/old", "/new", 301), 200, None, SITE);
        match outcome {
            Outcome::Mismatch(m) => {
                assert_eq!(m.status_code, 200);
                assert_eq!(m.reason, STATUS_MISMATCH_REASON);
                assert_eq!(m.old, "/old");
                assert_eq!(m.new, "/new");
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_404_is_a_mismatch_but_not_fatal() {
        // Known divergence point: 404 sits outside the error class
        let outcome = classify(&rule("/old", "/new", 301), 404, None, SITE);
        match outcome {
            Outcome::Mismatch(m) => {
                assert_eq!(m.status_code, 404);
                assert_eq!(m.reason, "Different status code returned");
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_expected_status_is_a_status_mismatch() {
        // Rule written as "/old,/new,3O1"
        let r = Rule {
            expected_status: None,
            ..rule("/old", "/new", 301)
        };
        match classify(&r, 301, Some("https://ex.com/new"), SITE) {
            Outcome::Mismatch(m) => {
                assert_eq!(m.status_code, 301);
                assert_eq!(m.reason, STATUS_MISMATCH_REASON);
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_location_reason_is_actual_header() {
        let outcome = classify(&rule("/old", "/new", 301), 301, Some("/other"), SITE);
        match outcome {
            Outcome::Mismatch(m) => {
                assert_eq!(m.status_code, 301);
                assert_eq!(m.reason, "/other");
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_location_is_empty_reason() {
        let outcome = classify(&rule("/old", "/new", 301), 301, None, SITE);
        match outcome {
            Outcome::Mismatch(m) => assert_eq!(m.reason, ""),
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_error_class_is_fatal_with_mismatch() {
        let outcome = classify(&rule("/old", "/new", 301), 500, None, SITE);
        match outcome {
            Outcome::Fatal { error, mismatch } => {
                assert!(matches!(error, CheckError::ServerErrorClass { status: 500 }));
                assert_eq!(mismatch.unwrap().reason, STATUS_MISMATCH_REASON);
            }
            other => panic!("expected fatal, got {:?}", other),
        }
    }

    #[test]
    fn test_expected_error_status_is_still_fatal() {
        // Matching an expected 403 doesn't save the run
        let outcome = classify(&rule("/old", "/new", 403), 403, Some("https://ex.com/new"), SITE);
        match outcome {
            Outcome::Fatal { mismatch, .. } => assert!(mismatch.is_none()),
            other => panic!("expected fatal, got {:?}", other),
        }
    }

    #[test]
    fn test_error_class_ranges() {
        for status in (400..=403).chain(405..=409).chain(500..=599) {
            assert!(is_error_class(status), "{} should be fatal", status);
        }
        for status in [200, 301, 302, 307, 308, 404, 414, 494] {
            assert!(!is_error_class(status), "{} should not be fatal", status);
        }
        assert!(is_error_class(410));
        assert!(!is_error_class(600));
    }
}
