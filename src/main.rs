use dioxus::prelude::*;

mod components;
mod config;
mod constants;
mod error;
mod models;
mod services;
mod stores;

use components::{
    AboutScreen, ContactScreen, ContentEditorScreen, DashboardScreen, EventTypeManagerScreen,
    EventsScreen, GalleryManagerScreen, GalleryScreen, HomeScreen, InquiryManagerScreen, Lightbox,
    LoginScreen, MyUploadsScreen, SiteFooter, SiteHeader, TestimonialModerationScreen,
    TestimonialsScreen, UploadPortalScreen, UserManagerScreen,
};
use config::AppConfig;
use services::DataLayer;
use stores::{SessionState, SessionStore, UiStore};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    env_logger::init();
    let config = AppConfig::load();
    match DataLayer::new(&config) {
        Ok(data) => {
            dioxus::LaunchBuilder::new()
                .with_context(data)
                .with_context(config)
                .launch(App);
        }
        Err(e) => log::error!("startup failed: {}", e),
    }
}

/// Screen navigation for the app. `Admin*` and `Manager*` screens live
/// behind the role gate below.
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Home,
    About,
    Events,
    Gallery,
    Testimonials,
    Contact,
    Login,
    AdminDashboard,
    AdminGallery,
    AdminTestimonials,
    AdminInquiries,
    AdminEventTypes,
    AdminContent,
    AdminUsers,
    ManagerUpload,
    ManagerMyUploads,
}

impl Screen {
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Screen::AdminDashboard
                | Screen::AdminGallery
                | Screen::AdminTestimonials
                | Screen::AdminInquiries
                | Screen::AdminEventTypes
                | Screen::AdminContent
                | Screen::AdminUsers
        )
    }

    /// Admins pass this too; managers hold a subset of admin access.
    pub fn requires_manager(&self) -> bool {
        matches!(self, Screen::ManagerUpload | Screen::ManagerMyUploads)
    }
}

/// An unauthorized request for a portal screen lands on the login screen
/// instead; public screens pass through untouched.
fn gate(screen: Screen, session: &SessionState) -> Screen {
    let authorized = if screen.requires_admin() {
        session.is_admin()
    } else if screen.requires_manager() {
        session.is_manager()
    } else {
        true
    };
    if authorized {
        screen
    } else {
        Screen::Login
    }
}

#[component]
fn App() -> Element {
    let data = use_context::<DataLayer>();
    let session = use_context_provider(SessionStore::new);
    use_context_provider(UiStore::new);

    let mut current_screen = use_signal(|| Screen::Home);

    // Resume any stored session once, before the first gated render settles.
    use_future(move || {
        let data = data.clone();
        async move { session.initialize(data).await }
    });

    let screen = gate(current_screen(), &session.state());
    let chrome = !screen.requires_admin() && !screen.requires_manager() && screen != Screen::Login;

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "min-height: 100vh; background: #fdfcf8; font-family: 'Segoe UI', Tahoma, sans-serif;",
            if chrome {
                SiteHeader {
                    current_screen: screen.clone(),
                    on_navigate: move |s| current_screen.set(s),
                }
            }

            match screen.clone() {
                Screen::Home => rsx! {
                    HomeScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::About => rsx! {
                    AboutScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::Events => rsx! {
                    EventsScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::Gallery => rsx! {
                    GalleryScreen {}
                },
                Screen::Testimonials => rsx! {
                    TestimonialsScreen {}
                },
                Screen::Contact => rsx! {
                    ContactScreen {}
                },
                Screen::Login => rsx! {
                    LoginScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::AdminDashboard => rsx! {
                    DashboardScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::AdminGallery => rsx! {
                    GalleryManagerScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::AdminTestimonials => rsx! {
                    TestimonialModerationScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::AdminInquiries => rsx! {
                    InquiryManagerScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::AdminEventTypes => rsx! {
                    EventTypeManagerScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::AdminContent => rsx! {
                    ContentEditorScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::AdminUsers => rsx! {
                    UserManagerScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::ManagerUpload => rsx! {
                    UploadPortalScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::ManagerMyUploads => rsx! {
                    MyUploadsScreen { on_navigate: move |s| current_screen.set(s) }
                },
            }

            if chrome {
                SiteFooter { on_navigate: move |s| current_screen.set(s) }
            }

            Lightbox {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use models::{Profile, UserRole};
    use uuid::Uuid;

    fn signed_in(role: UserRole) -> SessionState {
        SessionState::Authenticated(Profile {
            id: Uuid::new_v4(),
            email: "staff@example.com".to_string(),
            full_name: "Staff".to_string(),
            role,
            avatar_url: None,
            created_at: Utc::now(),
        })
    }

    #[test]
    fn public_screens_need_no_session() {
        assert_eq!(
            gate(Screen::Gallery, &SessionState::Anonymous),
            Screen::Gallery
        );
        assert_eq!(gate(Screen::Home, &SessionState::Uninitialized), Screen::Home);
    }

    #[test]
    fn anonymous_portal_access_lands_on_login() {
        assert_eq!(
            gate(Screen::AdminDashboard, &SessionState::Anonymous),
            Screen::Login
        );
        assert_eq!(
            gate(Screen::ManagerUpload, &SessionState::Anonymous),
            Screen::Login
        );
    }

    #[test]
    fn managers_cannot_reach_admin_screens() {
        let manager = signed_in(UserRole::Manager);
        assert_eq!(gate(Screen::AdminUsers, &manager), Screen::Login);
        assert_eq!(gate(Screen::ManagerUpload, &manager), Screen::ManagerUpload);
    }

    #[test]
    fn admins_hold_both_roles() {
        let admin = signed_in(UserRole::Admin);
        assert_eq!(gate(Screen::AdminContent, &admin), Screen::AdminContent);
        assert_eq!(
            gate(Screen::ManagerMyUploads, &admin),
            Screen::ManagerMyUploads
        );
    }
}
