use dioxus::prelude::*;

use crate::constants::CONTACT_INFO;
use crate::stores::UiStore;
use crate::Screen;

fn public_links() -> [(Screen, &'static str); 6] {
    [
        (Screen::Home, "Home"),
        (Screen::About, "About"),
        (Screen::Events, "Events"),
        (Screen::Gallery, "Gallery"),
        (Screen::Testimonials, "Testimonials"),
        (Screen::Contact, "Contact"),
    ]
}

#[component]
pub fn SiteHeader(current_screen: Screen, on_navigate: EventHandler<Screen>) -> Element {
    let mut ui = use_context::<UiStore>();
    let menu_open = ui.mobile_menu_open();

    rsx! {
        header { style: "position: sticky; top: 0; z-index: 50; background: #fdfcf8; border-bottom: 1px solid #e5e0d5; padding: 14px 24px; display: flex; align-items: center; justify-content: space-between;",
            div {
                style: "font-family: Georgia, serif; font-size: 22px; font-weight: 700; color: #2e4632; cursor: pointer;",
                onclick: move |_| on_navigate.call(Screen::Home),
                "Eva's Garden"
            }

            nav { class: "desktop-nav", style: "display: flex; gap: 6px; align-items: center;",
                for (screen, label) in public_links() {
                    button {
                        style: if screen == current_screen {
                            "border: none; background: #2e4632; color: #fdfcf8; padding: 8px 14px; border-radius: 20px; cursor: pointer; font-size: 14px;"
                        } else {
                            "border: none; background: transparent; color: #3a3a3a; padding: 8px 14px; border-radius: 20px; cursor: pointer; font-size: 14px;"
                        },
                        onclick: move |_| on_navigate.call(screen.clone()),
                        "{label}"
                    }
                }
                button {
                    style: "border: 1px solid #2e4632; background: transparent; color: #2e4632; padding: 7px 14px; border-radius: 20px; cursor: pointer; font-size: 13px; margin-left: 8px;",
                    onclick: move |_| on_navigate.call(Screen::Login),
                    "Staff"
                }
            }

            button {
                class: "mobile-menu-toggle",
                style: "border: none; background: transparent; font-size: 24px; cursor: pointer; color: #2e4632;",
                onclick: move |_| ui.set_mobile_menu_open(!menu_open),
                if menu_open { "✕" } else { "☰" }
            }
        }

        if menu_open {
            div { style: "background: #fdfcf8; border-bottom: 1px solid #e5e0d5; padding: 12px 24px; display: flex; flex-direction: column; gap: 4px;",
                for (screen, label) in public_links() {
                    button {
                        style: "border: none; background: transparent; text-align: left; padding: 12px 8px; font-size: 16px; color: #3a3a3a; cursor: pointer;",
                        onclick: move |_| {
                            ui.set_mobile_menu_open(false);
                            on_navigate.call(screen.clone());
                        },
                        "{label}"
                    }
                }
                button {
                    style: "border: none; background: transparent; text-align: left; padding: 12px 8px; font-size: 16px; color: #2e4632; cursor: pointer;",
                    onclick: move |_| {
                        ui.set_mobile_menu_open(false);
                        on_navigate.call(Screen::Login);
                    },
                    "Staff login"
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter(on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        footer { style: "background: #2e4632; color: #e5e0d5; padding: 40px 24px; margin-top: 64px;",
            div { style: "max-width: 1000px; margin: 0 auto; display: flex; flex-wrap: wrap; gap: 32px; justify-content: space-between;",
                div {
                    div { style: "font-family: Georgia, serif; font-size: 20px; font-weight: 700; color: #fdfcf8; margin-bottom: 8px;",
                        "Eva's Garden"
                    }
                    p { style: "margin: 4px 0; font-size: 14px;", "{CONTACT_INFO.location}" }
                    p { style: "margin: 4px 0; font-size: 14px;", "{CONTACT_INFO.venue_type}" }
                }
                div {
                    p { style: "margin: 4px 0; font-size: 14px; cursor: pointer;",
                        onclick: move |_| on_navigate.call(Screen::Gallery),
                        "Gallery"
                    }
                    p { style: "margin: 4px 0; font-size: 14px; cursor: pointer;",
                        onclick: move |_| on_navigate.call(Screen::Contact),
                        "Plan your event"
                    }
                    a {
                        href: CONTACT_INFO.whatsapp_url,
                        target: "_blank",
                        style: "color: #9fc3a7; font-size: 14px; text-decoration: none;",
                        "WhatsApp us"
                    }
                }
            }
            p { style: "text-align: center; font-size: 12px; color: #9fc3a7; margin-top: 32px;",
                "© Eva's Garden, Redhill"
            }
        }
    }
}
