pub mod concierge_service;
pub mod content_service;
pub mod gallery_service;
pub mod inquiry_service;
pub mod profile_service;
pub mod stats_service;
pub mod testimonial_service;
pub mod upload_service;

mod data;
pub use data::{entity, DataLayer};
