pub mod about;
pub mod contact;
pub mod content_editor;
pub mod dashboard;
pub mod event_type_manager;
pub mod events;
pub mod gallery;
pub mod gallery_manager;
pub mod home;
pub mod inquiry_manager;
pub mod lightbox;
pub mod login;
pub mod my_uploads;
pub mod navigation;
pub mod portal;
pub mod testimonial_moderation;
pub mod testimonials;
pub mod upload_portal;
pub mod user_manager;

pub use about::AboutScreen;
pub use contact::ContactScreen;
pub use content_editor::ContentEditorScreen;
pub use dashboard::DashboardScreen;
pub use event_type_manager::EventTypeManagerScreen;
pub use events::EventsScreen;
pub use gallery::GalleryScreen;
pub use gallery_manager::GalleryManagerScreen;
pub use home::HomeScreen;
pub use inquiry_manager::InquiryManagerScreen;
pub use lightbox::Lightbox;
pub use login::LoginScreen;
pub use my_uploads::MyUploadsScreen;
pub use navigation::{SiteFooter, SiteHeader};
pub use portal::PortalShell;
pub use testimonial_moderation::TestimonialModerationScreen;
pub use testimonials::TestimonialsScreen;
pub use upload_portal::UploadPortalScreen;
pub use user_manager::UserManagerScreen;
