pub mod admin;
pub mod home;
pub mod property;

pub use admin::{admin_properties_page, AdminRow};
pub use home::home_page;
pub use property::{no_data_page, property_page};
