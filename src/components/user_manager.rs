use dioxus::prelude::*;

use crate::services::{profile_service, DataLayer};
use crate::Screen;

use super::PortalShell;

/// Read-only staff roster. Accounts are provisioned on the backend; this
/// screen only shows who exists and with which role.
#[component]
pub fn UserManagerScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();
    let profiles = use_resource(move || {
        let data = data.clone();
        async move { profile_service::list(&data).await }
    });

    rsx! {
        PortalShell {
            title: "Users".to_string(),
            current_screen: Screen::AdminUsers,
            on_navigate,

            match profiles() {
                None => rsx! {
                    p { style: "color: #888;", "Loading..." }
                },
                Some(Err(e)) => {
                    let message = e.user_message();
                    rsx! {
                        div { class: "error-message", "{message}" }
                    }
                }
                Some(Ok(profiles)) => rsx! {
                    div { style: "display: flex; flex-direction: column; gap: 10px; max-width: 640px;",
                        for profile in profiles {
                            div { class: "card", style: "padding: 16px; display: flex; align-items: center; gap: 14px;",
                                if let Some(avatar) = profile.avatar_url.clone() {
                                    img {
                                        src: avatar,
                                        alt: profile.full_name.clone(),
                                        style: "width: 40px; height: 40px; border-radius: 50%; object-fit: cover;",
                                    }
                                } else {
                                    div { style: "width: 40px; height: 40px; border-radius: 50%; background: #2e4632; color: #fdfcf8; display: flex; align-items: center; justify-content: center; font-size: 16px;",
                                        "👤"
                                    }
                                }
                                div { style: "flex: 1;",
                                    p { style: "margin: 0; font-weight: 600; color: #333;",
                                        "{profile.full_name}"
                                    }
                                    p { style: "margin: 2px 0 0 0; font-size: 13px; color: #888;",
                                        "{profile.email}"
                                    }
                                }
                                span {
                                    style: if profile.is_admin() {
                                        "font-size: 12px; background: #2e4632; color: #fff; padding: 4px 12px; border-radius: 12px;"
                                    } else {
                                        "font-size: 12px; background: #e5e0d5; color: #2e4632; padding: 4px 12px; border-radius: 12px;"
                                    },
                                    "{profile.role.as_str()}"
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
