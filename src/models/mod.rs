pub mod content;
pub mod gallery;
pub mod inquiry;
pub mod profile;
pub mod testimonial;

pub use content::{content_value, ContentKind, EventType, SiteContent};
pub use gallery::{GalleryCategory, GalleryItem, MediaKind, NewGalleryItem};
pub use inquiry::{Inquiry, InquiryStatus, NewInquiry};
pub use profile::{Profile, UserRole};
pub use testimonial::{NewTestimonial, Testimonial};
