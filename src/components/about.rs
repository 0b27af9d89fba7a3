use dioxus::prelude::*;

use crate::constants::CONTACT_INFO;
use crate::models::content_value;
use crate::services::{content_service, DataLayer};
use crate::Screen;

#[component]
pub fn AboutScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();
    let content = use_resource(move || {
        let data = data.clone();
        async move { content_service::site_content(&data, Some("about")).await }
    });

    let loaded = content().and_then(|r| r.ok()).unwrap_or_default();
    let story = content_value(&loaded, "story")
        .unwrap_or(
            "Eva's Garden began as a family garden in the Redhill hills and grew into a venue \
             devoted to one idea: celebrations feel different under open skies. Mature trees, \
             wide lawns and quiet corners give every event room to breathe, whether it is an \
             intimate vow renewal or a corporate retreat for a hundred guests.",
        )
        .to_string();

    rsx! {
        section { style: "max-width: 760px; margin: 0 auto; padding: 64px 24px;",
            h1 { style: "font-family: Georgia, serif; font-size: 38px; color: #2e4632; text-align: center;",
                "About Eva's Garden"
            }
            p { style: "font-size: 16px; color: #444; line-height: 1.8; white-space: pre-wrap;",
                "{story}"
            }

            div { class: "card", style: "margin-top: 40px; padding: 28px;",
                h2 { style: "font-family: Georgia, serif; font-size: 22px; color: #2e4632; margin-top: 0;",
                    "Venue at a glance"
                }
                div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px;",
                    VenueFact { label: "Location", value: CONTACT_INFO.location }
                    VenueFact { label: "Setting", value: CONTACT_INFO.venue_type }
                    VenueFact { label: "Capacity", value: CONTACT_INFO.capacity }
                    VenueFact { label: "Parking", value: CONTACT_INFO.parking }
                }
            }

            div { style: "text-align: center; margin-top: 40px;",
                button {
                    style: "background: #2e4632; color: #fdfcf8; border: none; padding: 14px 28px; border-radius: 24px; font-size: 16px; cursor: pointer;",
                    onclick: move |_| on_navigate.call(Screen::Contact),
                    "Come see it in person"
                }
            }
        }
    }
}

#[component]
fn VenueFact(label: &'static str, value: &'static str) -> Element {
    rsx! {
        div {
            p { style: "margin: 0; font-size: 12px; text-transform: uppercase; letter-spacing: 1px; color: #888;",
                "{label}"
            }
            p { style: "margin: 4px 0 0 0; font-size: 15px; color: #333;", "{value}" }
        }
    }
}
