pub mod adaptors;
pub mod email;
pub mod store;
pub mod uploads;
