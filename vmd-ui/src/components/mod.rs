mod appointment_card;
mod appointment_metadata;

pub use appointment_card::AppointmentCard;
pub use appointment_metadata::{AppointmentMetadata, MetadataWidth};
