// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Caseline complaint system.
//!
//! This crate sits between the transport layer and the domain: it
//! authenticates and authorizes operators, validates requests, invokes
//! the persistence layer, records audit events for triage actions, and
//! translates every internal error into the API error contract.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

pub mod auth;
pub mod complaint_intake;
pub mod error;
pub mod handlers;
pub mod notify;
pub mod password_policy;
pub mod pseudonym;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use notify::{LogNotifier, SosNotifier};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use pseudonym::generate_pseudonym;
