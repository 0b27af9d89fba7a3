pub mod session;
pub mod ui;

pub use session::{SessionState, SessionStore};
pub use ui::{LightboxState, UiStore, ViewerItem};
