//! Common types and utilities shared by the Vite Ma Dose UI components

pub mod booking;
pub mod card;
pub mod config;
pub mod format;
pub mod location;
pub mod platform;

pub use booking::{classify, BookingAction};
pub use card::{CardAction, CardConfig, CardEvent, CardLink, CardView, ClickHandler, ClickOutcome, ClickTarget, Theme};
pub use config::UiConfig;
pub use location::{Location, LocationClickContext, LocationMetadata, LocationType, LocationWithDistance};
pub use platform::{platform_for, Platform};

/// Errors raised while turning host-provided data into a card
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported booking action: {0}")]
    UnsupportedBookingAction(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid location record: {0}")]
    InvalidLocation(#[source] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
