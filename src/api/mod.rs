//! Adapter-facing request shapes and validation.
//!
//! The HTTP adapter owns JSON shaping and status-code mapping; these types
//! own the request-shape checks that must pass before the core is called:
//! the allowed-field whitelist (unknown fields are a deserialization
//! error), length bounds, the status enum, and search truncation. The
//! store still re-validates title non-emptiness on its own.

use serde::{Deserialize, Serialize};

use crate::core::{CoreError, Limits, Patch, TodoPatch};
use crate::query::StatusFilter;

/// Raw create request as parsed off the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A create request with bounds checked and fields trimmed.
#[derive(Debug, Clone)]
pub struct ValidatedCreate {
    pub title: String,
    pub description: String,
}

impl CreateRequest {
    pub fn validate(self, limits: &Limits) -> Result<ValidatedCreate, CoreError> {
        let title = checked_title(self.title, limits)?;
        let description = checked_description(self.description.unwrap_or_default(), limits)?;
        Ok(ValidatedCreate { title, description })
    }
}

/// Raw partial-update request.
///
/// Absent fields mean "keep", null means "clear"; anything outside the
/// field whitelist fails deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateRequest {
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub title: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub description: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub completed: Patch<bool>,
}

impl UpdateRequest {
    pub fn validate(self, limits: &Limits) -> Result<TodoPatch, CoreError> {
        let title = match self.title {
            Patch::Keep => Patch::Keep,
            Patch::Clear => {
                return Err(CoreError::ValidationFailed {
                    field: "title".into(),
                    reason: "cannot clear required field".into(),
                });
            }
            Patch::Set(raw) => Patch::Set(checked_title(raw, limits)?),
        };
        let description = match self.description {
            Patch::Keep => Patch::Keep,
            Patch::Clear => Patch::Clear,
            Patch::Set(raw) => Patch::Set(checked_description(raw, limits)?),
        };
        let completed = match self.completed {
            Patch::Keep => Patch::Keep,
            Patch::Clear => {
                return Err(CoreError::ValidationFailed {
                    field: "completed".into(),
                    reason: "cannot clear required field".into(),
                });
            }
            Patch::Set(value) => Patch::Set(value),
        };
        Ok(TodoPatch {
            title,
            description,
            completed,
        })
    }
}

/// Raw list request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub include_stats: bool,
}

/// A list request with the status enum parsed and the search truncated.
#[derive(Debug, Clone)]
pub struct ValidatedList {
    pub status: StatusFilter,
    pub search: String,
    pub include_stats: bool,
}

impl ListRequest {
    pub fn validate(self, limits: &Limits) -> Result<ValidatedList, CoreError> {
        let status = match self.status.as_deref() {
            None | Some("") => StatusFilter::All,
            Some(raw) => raw.parse()?,
        };
        let mut search = self.search.unwrap_or_default();
        if search.chars().count() > limits.max_search_chars {
            search = search.chars().take(limits.max_search_chars).collect();
        }
        Ok(ValidatedList {
            status,
            search,
            include_stats: self.include_stats,
        })
    }
}

fn checked_title(raw: String, limits: &Limits) -> Result<String, CoreError> {
    let trimmed = raw.trim().to_string();
    if trimmed.is_empty() {
        return Err(CoreError::ValidationFailed {
            field: "title".into(),
            reason: "must not be empty".into(),
        });
    }
    if trimmed.chars().count() > limits.max_title_chars {
        return Err(CoreError::ValidationFailed {
            field: "title".into(),
            reason: format!("exceeds {} characters", limits.max_title_chars),
        });
    }
    Ok(trimmed)
}

fn checked_description(raw: String, limits: &Limits) -> Result<String, CoreError> {
    let trimmed = raw.trim().to_string();
    if trimmed.chars().count() > limits.max_description_chars {
        return Err(CoreError::ValidationFailed {
            field: "description".into(),
            reason: format!("exceeds {} characters", limits.max_description_chars),
        });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_trims_and_bounds() {
        let limits = Limits::default();
        let ok = CreateRequest {
            title: "  Buy milk  ".into(),
            description: Some("  two liters  ".into()),
        }
        .validate(&limits)
        .expect("valid request");
        assert_eq!(ok.title, "Buy milk");
        assert_eq!(ok.description, "two liters");

        let blank = CreateRequest {
            title: "   ".into(),
            description: None,
        };
        assert!(blank.validate(&limits).is_err());

        let long = CreateRequest {
            title: "x".repeat(limits.max_title_chars + 1),
            description: None,
        };
        assert!(long.validate(&limits).is_err());
    }

    #[test]
    fn create_request_rejects_unknown_fields() {
        let raw = r#"{"title": "a", "owner": "mallory"}"#;
        assert!(serde_json::from_str::<CreateRequest>(raw).is_err());
    }

    #[test]
    fn update_request_maps_null_to_clear() {
        let limits = Limits::default();
        let raw = r#"{"description": null}"#;
        let request: UpdateRequest = serde_json::from_str(raw).expect("valid shape");
        let patch = request.validate(&limits).expect("clearable field");
        assert_eq!(patch.description, Patch::Clear);

        let raw = r#"{"title": null}"#;
        let request: UpdateRequest = serde_json::from_str(raw).expect("valid shape");
        assert!(request.validate(&limits).is_err());
    }

    #[test]
    fn update_request_bounds_set_values() {
        let limits = Limits::default();
        let over = UpdateRequest {
            description: Patch::Set("x".repeat(limits.max_description_chars + 1)),
            ..UpdateRequest::default()
        };
        assert!(over.validate(&limits).is_err());
    }

    #[test]
    fn list_request_parses_status_and_truncates_search() {
        let limits = Limits::default();
        let ok = ListRequest {
            status: Some("active".into()),
            search: Some("milk".into()),
            include_stats: true,
        }
        .validate(&limits)
        .expect("valid request");
        assert_eq!(ok.status, StatusFilter::Active);
        assert_eq!(ok.search, "milk");
        assert!(ok.include_stats);

        let defaulted = ListRequest::default().validate(&limits).expect("valid");
        assert_eq!(defaulted.status, StatusFilter::All);
        assert_eq!(defaulted.search, "");

        let bad = ListRequest {
            status: Some("done".into()),
            ..ListRequest::default()
        };
        assert!(bad.validate(&limits).is_err());
    }

    #[test]
    fn search_truncation_respects_char_boundaries() {
        let limits = Limits {
            max_search_chars: 3,
            ..Limits::default()
        };
        let validated = ListRequest {
            search: Some("héllo".into()),
            ..ListRequest::default()
        }
        .validate(&limits)
        .expect("valid request");
        assert_eq!(validated.search, "hél");
    }
}
