// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Complaint intake and tracking id allocation.
//!
//! Tracking ids are random rather than sequential so a reporter holding
//! one id cannot guess another case's id. Uniqueness is enforced by the
//! store's unique index; on a collision we draw a new serial and retry.

use caseline_domain::{Complaint, ComplaintDraft, ComplaintId};
use caseline_persistence::{Persistence, PersistenceError};
use rand::Rng;
use time::OffsetDateTime;
use tracing::debug;

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};

/// How many id collisions to tolerate before giving up.
///
/// With 9000 serials per year a run of collisions this long means the
/// year's id space is effectively exhausted.
const MAX_ID_ATTEMPTS: usize = 10;

fn current_year() -> Result<u16, ApiError> {
    u16::try_from(OffsetDateTime::now_utc().year()).map_err(|_| ApiError::Internal {
        message: String::from("System clock produced an unrepresentable year"),
    })
}

fn random_complaint_id(year: u16) -> Result<ComplaintId, ApiError> {
    let serial: u16 = rand::rng().random_range(1000..=9999);
    ComplaintId::new(year, serial).map_err(translate_domain_error)
}

/// Validates a complaint draft, allocates a tracking id, and stores the
/// complaint.
///
/// Returns the stored complaint, whose `complaint_id` is the tracking id
/// to hand back to the reporter.
///
/// # Errors
///
/// Returns an error if the draft fails validation, if the store rejects
/// the insert, or if no unique id could be allocated.
pub fn submit_complaint(
    persistence: &mut Persistence,
    draft: ComplaintDraft,
) -> Result<Complaint, ApiError> {
    let year: u16 = current_year()?;

    let mut complaint: Complaint =
        Complaint::from_draft(random_complaint_id(year)?, draft).map_err(translate_domain_error)?;

    for attempt in 0..MAX_ID_ATTEMPTS {
        match persistence.insert_complaint(&complaint) {
            Ok(_) => return Ok(complaint),
            Err(PersistenceError::DuplicateComplaintId(id)) => {
                debug!(attempt, %id, "Tracking id collision, drawing a new serial");
                complaint.complaint_id = random_complaint_id(year)?;
            }
            Err(e) => return Err(translate_persistence_error(e)),
        }
    }

    Err(ApiError::Internal {
        message: format!("Could not allocate a unique tracking id after {MAX_ID_ATTEMPTS} attempts"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_random_id_is_well_formed() {
        for _ in 0..100 {
            let id = random_complaint_id(2026).unwrap();
            assert!(ComplaintId::parse(id.value()).is_ok());
        }
    }
}
