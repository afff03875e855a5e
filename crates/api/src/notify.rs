// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SOS alert notification delivery.

use caseline_domain::SosAlert;
use tracing::warn;

/// Delivery channel for SOS alerts.
///
/// Triggering an SOS must never fail because a delivery channel is down,
/// so implementations report failures through their own logging rather
/// than an error return.
pub trait SosNotifier {
    /// Notifies the configured channel about a triggered SOS alert.
    fn notify(&self, alert: &SosAlert);
}

/// A notifier that writes alerts to the structured log.
///
/// This is the default channel. Deployments wire real channels (mail,
/// SMS) by providing their own `SosNotifier`.
pub struct LogNotifier;

impl SosNotifier for LogNotifier {
    fn notify(&self, alert: &SosAlert) {
        warn!(
            name = %alert.name,
            latitude = alert.latitude,
            longitude = alert.longitude,
            location_link = %alert.location_link,
            "SOS alert triggered"
        );
    }
}
