// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable complaint identifiers.
//!
//! A complaint id has the form `SHC-<year>-<4 digits>`, e.g. `SHC-2026-4821`.
//! The id is the public tracking handle for a case: reporters (including
//! anonymous ones) use it to look up status and to read or append to the
//! case thread.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The prefix carried by every complaint id.
pub const COMPLAINT_ID_PREFIX: &str = "SHC";

/// A validated complaint identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(String);

impl ComplaintId {
    /// Constructs a complaint id from a year and a serial in `1000..=9999`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidComplaintId` if the serial is outside
    /// the four-digit range.
    pub fn new(year: u16, serial: u16) -> Result<Self, DomainError> {
        if !(1000..=9999).contains(&serial) {
            return Err(DomainError::InvalidComplaintId(format!(
                "{COMPLAINT_ID_PREFIX}-{year}-{serial}"
            )));
        }
        Ok(Self(format!("{COMPLAINT_ID_PREFIX}-{year}-{serial}")))
    }

    /// Parses and validates a complaint id from its string form.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidComplaintId` if the string does not
    /// match `SHC-<year>-<4 digits>`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidComplaintId(s.to_string());

        let mut parts = s.split('-');
        let prefix = parts.next().ok_or_else(invalid)?;
        let year = parts.next().ok_or_else(invalid)?;
        let serial = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() || prefix != COMPLAINT_ID_PREFIX {
            return Err(invalid());
        }

        let year: u16 = year.parse().map_err(|_| invalid())?;
        if serial.len() != 4 {
            return Err(invalid());
        }
        let serial: u16 = serial.parse().map_err(|_| invalid())?;

        Self::new(year, serial).map_err(|_| invalid())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl FromStr for ComplaintId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_and_display() {
        let id = ComplaintId::new(2026, 4821).unwrap();
        assert_eq!(id.value(), "SHC-2026-4821");
    }

    #[test]
    fn test_serial_out_of_range() {
        assert!(ComplaintId::new(2026, 999).is_err());
        assert!(ComplaintId::new(2026, 0).is_err());
    }

    #[test]
    fn test_parse_round_trip() {
        let id = ComplaintId::parse("SHC-2026-1000").unwrap();
        assert_eq!(id.value(), "SHC-2026-1000");
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for s in [
            "",
            "SHC-2026",
            "SHC-2026-12345",
            "SHC-2026-12",
            "ABC-2026-1234",
            "SHC-20x6-1234",
            "SHC-2026-12a4",
            "SHC-2026-1234-5",
        ] {
            assert!(ComplaintId::parse(s).is_err(), "accepted: {s}");
        }
    }
}
