//! Classification of how a location can be booked

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::Error;

/// How the user can act on a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingAction {
    /// Slots are listed on a booking platform
    #[serde(rename = "actif-via-plateforme")]
    ActiveViaPlatform,
    /// Known on a platform but no slot listed, the center can still be checked
    #[serde(rename = "inactif-via-plateforme")]
    InactiveViaPlatform,
    /// Booking by phone only
    #[serde(rename = "actif-via-tel")]
    ActiveViaPhone,
    #[serde(rename = "inactif")]
    Inactive,
}

impl BookingAction {
    pub const ALL: [BookingAction; 4] = [
        BookingAction::ActiveViaPlatform,
        BookingAction::InactiveViaPlatform,
        BookingAction::ActiveViaPhone,
        BookingAction::Inactive,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            BookingAction::ActiveViaPlatform => "actif-via-plateforme",
            BookingAction::InactiveViaPlatform => "inactif-via-plateforme",
            BookingAction::ActiveViaPhone => "actif-via-tel",
            BookingAction::Inactive => "inactif",
        }
    }

    pub fn is_via_platform(&self) -> bool {
        matches!(
            self,
            BookingAction::ActiveViaPlatform | BookingAction::InactiveViaPlatform
        )
    }
}

impl std::fmt::Display for BookingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BookingAction {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        BookingAction::ALL
            .into_iter()
            .find(|action| action.tag() == tag)
            .ok_or_else(|| Error::UnsupportedBookingAction(tag.to_string()))
    }
}

/// Classify a location into the action the card offers
pub fn classify(location: &Location) -> BookingAction {
    let action = if location.appointment_by_phone_only && location.phone_number().is_some() {
        BookingAction::ActiveViaPhone
    } else if location.has_url() && location.appointment_count > 0 {
        BookingAction::ActiveViaPlatform
    } else if location.has_url() {
        BookingAction::InactiveViaPlatform
    } else {
        BookingAction::Inactive
    };

    tracing::debug!(location = %location.internal_id, action = %action, "classified location");
    action
}
