use dioxus::prelude::*;

use crate::services::DataLayer;
use crate::stores::SessionStore;
use crate::Screen;

fn admin_links() -> [(Screen, &'static str); 7] {
    [
        (Screen::AdminDashboard, "Dashboard"),
        (Screen::AdminGallery, "Gallery"),
        (Screen::AdminTestimonials, "Testimonials"),
        (Screen::AdminInquiries, "Inquiries"),
        (Screen::AdminEventTypes, "Event types"),
        (Screen::AdminContent, "Site content"),
        (Screen::AdminUsers, "Users"),
    ]
}

fn manager_links() -> [(Screen, &'static str); 2] {
    [
        (Screen::ManagerUpload, "Upload media"),
        (Screen::ManagerMyUploads, "My uploads"),
    ]
}

/// Shared frame for every staff screen: sidebar with the links the current
/// role may use, the signed-in identity, and a sign-out button.
#[component]
pub fn PortalShell(
    title: String,
    current_screen: Screen,
    on_navigate: EventHandler<Screen>,
    children: Element,
) -> Element {
    let data = use_context::<DataLayer>();
    let session = use_context::<SessionStore>();
    let state = session.state();

    let identity = state
        .profile()
        .map(|p| format!("{} · {}", p.full_name, p.role.as_str()))
        .unwrap_or_default();

    let sign_out = move |_| {
        let data = data.clone();
        spawn(async move {
            session.sign_out(data).await;
            on_navigate.call(Screen::Home);
        });
    };

    rsx! {
        div { style: "display: flex; min-height: 100vh; background: #f5f4ef;",
            aside { style: "width: 220px; background: #2e4632; color: #e5e0d5; padding: 24px 0; display: flex; flex-direction: column;",
                div { style: "font-family: Georgia, serif; font-size: 18px; font-weight: 700; color: #fdfcf8; padding: 0 20px 20px 20px;",
                    "Eva's Garden"
                }

                if session.is_admin() {
                    for (screen, label) in admin_links() {
                        PortalLink {
                            label,
                            active: screen == current_screen,
                            on_click: move |_| on_navigate.call(screen.clone()),
                        }
                    }
                    div { style: "border-top: 1px solid rgba(255,255,255,0.15); margin: 12px 20px;" }
                }
                if session.is_manager() {
                    for (screen, label) in manager_links() {
                        PortalLink {
                            label,
                            active: screen == current_screen,
                            on_click: move |_| on_navigate.call(screen.clone()),
                        }
                    }
                }

                div { style: "flex: 1;" }
                p { style: "padding: 0 20px; font-size: 12px; color: #9fc3a7;", "{identity}" }
                button {
                    style: "margin: 8px 20px; padding: 10px; border: 1px solid rgba(255,255,255,0.3); background: transparent; color: #e5e0d5; border-radius: 6px; cursor: pointer; font-size: 13px;",
                    onclick: sign_out,
                    "Sign out"
                }
                button {
                    style: "margin: 0 20px 8px 20px; padding: 8px; border: none; background: transparent; color: #9fc3a7; cursor: pointer; font-size: 12px;",
                    onclick: move |_| on_navigate.call(Screen::Home),
                    "View public site"
                }
            }

            main { style: "flex: 1; padding: 32px; overflow-y: auto;",
                h1 { style: "font-family: Georgia, serif; font-size: 28px; color: #2e4632; margin-top: 0;",
                    "{title}"
                }
                {children}
            }
        }
    }
}

#[component]
fn PortalLink(label: &'static str, active: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            style: if active {
                "display: block; width: 100%; text-align: left; padding: 11px 20px; border: none; background: rgba(255,255,255,0.12); color: #fdfcf8; cursor: pointer; font-size: 14px;"
            } else {
                "display: block; width: 100%; text-align: left; padding: 11px 20px; border: none; background: transparent; color: #cfd8cd; cursor: pointer; font-size: 14px;"
            },
            onclick: move |_| on_click.call(()),
            "{label}"
        }
    }
}
