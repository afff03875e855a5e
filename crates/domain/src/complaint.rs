// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The complaint aggregate and intake validation.
//!
//! A `ComplaintDraft` is the unvalidated intake payload. `Complaint::from_draft`
//! validates incident fields and enforces the anonymity invariant: an
//! anonymous complaint never carries `user_id`, `full_name`, or
//! `submitter_email`, so no later read path can expose them.

use crate::complaint_id::ComplaintId;
use crate::error::DomainError;
use crate::incident::{EmotionalState, IncidentType};
use crate::priority::Priority;
use crate::status::CaseStatus;
use serde::{Deserialize, Serialize};
use time::macros::format_description;

/// Minimum length of an incident description, in characters.
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Submitter identity attached to an identified complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitterIdentity {
    /// Opaque identifier of the submitting user, if known.
    pub user_id: Option<String>,
    /// The submitter's full name.
    pub full_name: Option<String>,
    /// The submitter's contact email.
    pub email: Option<String>,
}

/// Unvalidated complaint intake payload.
#[derive(Debug, Clone, Default)]
pub struct ComplaintDraft {
    /// Whether the reporter asked to stay anonymous.
    pub is_anonymous: bool,
    /// Identity fields; stripped when `is_anonymous` is set.
    pub user_id: Option<String>,
    pub full_name: Option<String>,
    pub submitter_email: Option<String>,
    /// Incident fields.
    pub incident_type: Option<String>,
    pub incident_description: Option<String>,
    pub incident_date: Option<String>,
    pub incident_time: Option<String>,
    pub incident_location: Option<String>,
    pub accused_name: Option<String>,
    pub accused_position: Option<String>,
    pub organization: Option<String>,
    pub witnesses: Vec<String>,
    pub previous_incidents: Option<String>,
    pub emotional_state: Option<String>,
    pub need_immediate_help: bool,
}

/// A validated complaint ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    /// The public tracking identifier.
    pub complaint_id: ComplaintId,
    /// Whether the reporter asked to stay anonymous.
    pub is_anonymous: bool,
    /// Identity; always `None` fields when `is_anonymous` is set.
    pub submitter: SubmitterIdentity,
    /// Incident classification.
    pub incident_type: IncidentType,
    /// Free-text incident description (at least [`MIN_DESCRIPTION_LEN`] chars).
    pub incident_description: String,
    /// Date of the incident (ISO 8601 date).
    pub incident_date: String,
    /// Approximate time of the incident, if supplied.
    pub incident_time: Option<String>,
    /// Where the incident happened, if supplied.
    pub incident_location: Option<String>,
    /// Name of the accused, if supplied.
    pub accused_name: Option<String>,
    /// Position or title of the accused, if supplied.
    pub accused_position: Option<String>,
    /// Organization involved, if supplied.
    pub organization: Option<String>,
    /// Names of witnesses, if any.
    pub witnesses: Vec<String>,
    /// Free-text description of prior incidents, if supplied.
    pub previous_incidents: Option<String>,
    /// The reporter's self-described emotional state, if supplied.
    pub emotional_state: Option<EmotionalState>,
    /// Whether the reporter flagged the need for immediate help.
    pub need_immediate_help: bool,
    /// Triage status; always `Pending` at intake.
    pub status: CaseStatus,
    /// Triage priority; unset until an officer assigns one.
    pub priority: Option<Priority>,
}

/// Returns the trimmed string, or `None` if it is blank.
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Complaint {
    /// Validates an intake draft into a complaint.
    ///
    /// The complaint id is generated by the caller (with collision retry at
    /// the store boundary) and passed in here.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a required incident field is missing or blank
    /// - the description is shorter than [`MIN_DESCRIPTION_LEN`]
    /// - the incident date is not a `YYYY-MM-DD` calendar date
    /// - the incident type or emotional state is not a recognized value
    pub fn from_draft(complaint_id: ComplaintId, draft: ComplaintDraft) -> Result<Self, DomainError> {
        let incident_type: IncidentType = normalize(draft.incident_type)
            .ok_or(DomainError::MissingField("incident_type"))?
            .parse()?;

        let description: String = normalize(draft.incident_description)
            .ok_or(DomainError::MissingField("incident_description"))?;
        let len = description.chars().count();
        if len < MIN_DESCRIPTION_LEN {
            return Err(DomainError::DescriptionTooShort {
                min: MIN_DESCRIPTION_LEN,
                len,
            });
        }

        let incident_date: String =
            normalize(draft.incident_date).ok_or(DomainError::MissingField("incident_date"))?;
        time::Date::parse(&incident_date, format_description!("[year]-[month]-[day]")).map_err(
            |e| DomainError::DateParseError {
                date_string: incident_date.clone(),
                error: e.to_string(),
            },
        )?;

        let emotional_state: Option<EmotionalState> = match normalize(draft.emotional_state) {
            Some(s) => Some(s.parse()?),
            None => None,
        };

        // Anonymity invariant: strip identity at construction time so it can
        // never surface on a read path.
        let submitter: SubmitterIdentity = if draft.is_anonymous {
            SubmitterIdentity {
                user_id: None,
                full_name: None,
                email: None,
            }
        } else {
            SubmitterIdentity {
                user_id: normalize(draft.user_id),
                full_name: normalize(draft.full_name),
                email: normalize(draft.submitter_email),
            }
        };

        let witnesses: Vec<String> = draft
            .witnesses
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        Ok(Self {
            complaint_id,
            is_anonymous: draft.is_anonymous,
            submitter,
            incident_type,
            incident_description: description,
            incident_date,
            incident_time: normalize(draft.incident_time),
            incident_location: normalize(draft.incident_location),
            accused_name: normalize(draft.accused_name),
            accused_position: normalize(draft.accused_position),
            organization: normalize(draft.organization),
            witnesses,
            previous_incidents: normalize(draft.previous_incidents),
            emotional_state,
            need_immediate_help: draft.need_immediate_help,
            status: CaseStatus::Pending,
            priority: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ComplaintDraft {
        ComplaintDraft {
            is_anonymous: false,
            user_id: Some(String::from("user-77")),
            full_name: Some(String::from("Alex Reporter")),
            submitter_email: Some(String::from("alex@example.org")),
            incident_type: Some(String::from("WORKPLACE")),
            incident_description: Some(String::from(
                "Repeated verbal harassment by a supervisor over several weeks.",
            )),
            incident_date: Some(String::from("2026-02-14")),
            emotional_state: Some(String::from("ANXIOUS")),
            witnesses: vec![String::from("Sam"), String::from("  ")],
            ..ComplaintDraft::default()
        }
    }

    fn test_id() -> ComplaintId {
        ComplaintId::new(2026, 1234).unwrap()
    }

    #[test]
    fn test_valid_draft_produces_pending_complaint() {
        let complaint = Complaint::from_draft(test_id(), valid_draft()).unwrap();

        assert_eq!(complaint.status, CaseStatus::Pending);
        assert_eq!(complaint.priority, None);
        assert_eq!(complaint.incident_type, IncidentType::Workplace);
        assert_eq!(complaint.witnesses, vec![String::from("Sam")]);
        assert_eq!(
            complaint.submitter.email.as_deref(),
            Some("alex@example.org")
        );
    }

    #[test]
    fn test_anonymous_draft_strips_identity() {
        let mut draft = valid_draft();
        draft.is_anonymous = true;

        let complaint = Complaint::from_draft(test_id(), draft).unwrap();

        assert!(complaint.is_anonymous);
        assert_eq!(complaint.submitter.user_id, None);
        assert_eq!(complaint.submitter.full_name, None);
        assert_eq!(complaint.submitter.email, None);
    }

    #[test]
    fn test_missing_incident_type_rejected() {
        let mut draft = valid_draft();
        draft.incident_type = None;

        assert_eq!(
            Complaint::from_draft(test_id(), draft),
            Err(DomainError::MissingField("incident_type"))
        );
    }

    #[test]
    fn test_short_description_rejected() {
        let mut draft = valid_draft();
        draft.incident_description = Some(String::from("too short"));

        let err = Complaint::from_draft(test_id(), draft).unwrap_err();
        assert!(matches!(err, DomainError::DescriptionTooShort { .. }));
    }

    #[test]
    fn test_blank_date_rejected() {
        let mut draft = valid_draft();
        draft.incident_date = Some(String::from("   "));

        assert_eq!(
            Complaint::from_draft(test_id(), draft),
            Err(DomainError::MissingField("incident_date"))
        );
    }

    #[test]
    fn test_malformed_date_rejected() {
        for bad in ["14/02/2026", "2026-13-40", "yesterday"] {
            let mut draft = valid_draft();
            draft.incident_date = Some(String::from(bad));

            let err = Complaint::from_draft(test_id(), draft).unwrap_err();
            assert!(matches!(err, DomainError::DateParseError { .. }), "{bad}");
        }
    }

    #[test]
    fn test_unknown_emotional_state_rejected() {
        let mut draft = valid_draft();
        draft.emotional_state = Some(String::from("FURIOUS"));

        assert!(Complaint::from_draft(test_id(), draft).is_err());
    }
}
