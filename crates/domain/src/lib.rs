// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod aid;
mod board;
mod complaint;
mod complaint_id;
mod error;
mod incident;
mod message;
mod priority;
mod sos;
mod status;

pub use aid::{AidRequest, AidStatus};
pub use board::{Author, Authorship, resolve_authorship, validate_content};
pub use complaint::{Complaint, ComplaintDraft, MIN_DESCRIPTION_LEN, SubmitterIdentity};
pub use complaint_id::{COMPLAINT_ID_PREFIX, ComplaintId};
pub use error::DomainError;
pub use incident::{EmotionalState, IncidentType};
pub use message::{Message, MessageSender, validate_message};
pub use priority::Priority;
pub use sos::{DEFAULT_SOS_EMAIL, DEFAULT_SOS_MESSAGE, DEFAULT_SOS_NAME, SosAlert};
pub use status::CaseStatus;
