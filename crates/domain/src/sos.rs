// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SOS geolocation alerts.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Default display name for alerts raised without an identity.
pub const DEFAULT_SOS_NAME: &str = "Anonymous";

/// Default email placeholder for alerts raised without an identity.
pub const DEFAULT_SOS_EMAIL: &str = "N/A";

/// Default alert message when the caller supplies none.
pub const DEFAULT_SOS_MESSAGE: &str = "Emergency! SOS alert triggered.";

/// A validated SOS alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SosAlert {
    /// Opaque user identifier, if the alert came from a known user.
    pub user_id: Option<String>,
    /// Display name, defaulted to [`DEFAULT_SOS_NAME`].
    pub name: String,
    /// Contact email, defaulted to [`DEFAULT_SOS_EMAIL`].
    pub email: String,
    /// Latitude in degrees, within [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, within [-180, 180].
    pub longitude: f64,
    /// A maps link to the reported position.
    pub location_link: String,
    /// Alert message, defaulted to [`DEFAULT_SOS_MESSAGE`].
    pub message: String,
}

impl SosAlert {
    /// Validates coordinates and applies identity defaults.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if the position is outside
    /// the valid range, or `DomainError::MissingField` if the location link
    /// is blank.
    pub fn new(
        user_id: Option<String>,
        name: Option<String>,
        email: Option<String>,
        latitude: f64,
        longitude: f64,
        location_link: &str,
        message: Option<String>,
    ) -> Result<Self, DomainError> {
        if !latitude.is_finite()
            || !longitude.is_finite()
            || !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
        {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        let location_link = location_link.trim();
        if location_link.is_empty() {
            return Err(DomainError::MissingField("location_link"));
        }

        let defaulted = |value: Option<String>, default: &str| -> String {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            user_id,
            name: defaulted(name, DEFAULT_SOS_NAME),
            email: defaulted(email, DEFAULT_SOS_EMAIL),
            latitude,
            longitude,
            location_link: location_link.to_string(),
            message: defaulted(message, DEFAULT_SOS_MESSAGE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_alert_gets_defaults() {
        let alert = SosAlert::new(
            None,
            None,
            None,
            48.8584,
            2.2945,
            "https://maps.example/?q=48.8584,2.2945",
            None,
        )
        .unwrap();

        assert_eq!(alert.name, DEFAULT_SOS_NAME);
        assert_eq!(alert.email, DEFAULT_SOS_EMAIL);
        assert_eq!(alert.message, DEFAULT_SOS_MESSAGE);
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        for (lat, lon) in [(91.0, 0.0), (-91.0, 0.0), (0.0, 181.0), (0.0, -181.0)] {
            assert!(
                SosAlert::new(None, None, None, lat, lon, "link", None).is_err(),
                "accepted lat={lat} lon={lon}"
            );
        }
    }

    #[test]
    fn test_nan_coordinates_rejected() {
        assert!(SosAlert::new(None, None, None, f64::NAN, 0.0, "link", None).is_err());
    }

    #[test]
    fn test_blank_location_link_rejected() {
        let result = SosAlert::new(None, None, None, 0.0, 0.0, "  ", None);
        assert_eq!(result, Err(DomainError::MissingField("location_link")));
    }
}
