use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::constants::{FEATURED_SPACES, HERO_IMAGE};
use crate::models::content_value;
use crate::services::{concierge_service, content_service, testimonial_service, DataLayer};
use crate::Screen;

#[component]
pub fn HomeScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();

    let content = use_resource({
        let data = data.clone();
        move || {
            let data = data.clone();
            async move { content_service::site_content(&data, Some("home")).await }
        }
    });
    let featured = use_resource({
        let data = data.clone();
        move || {
            let data = data.clone();
            async move { testimonial_service::featured(&data).await }
        }
    });

    // Editable copy with hardcoded fallbacks, so an unreachable store still
    // renders a complete landing page.
    let loaded = content().and_then(|r| r.ok()).unwrap_or_default();
    let hero_title = content_value(&loaded, "hero_title")
        .unwrap_or("Where Moments Bloom")
        .to_string();
    let hero_subtitle = content_value(&loaded, "hero_subtitle")
        .unwrap_or("An enchanting garden venue in Redhill for weddings, celebrations and corporate events.")
        .to_string();

    rsx! {
        section { style: "background: linear-gradient(rgba(30, 50, 35, 0.55), rgba(30, 50, 35, 0.55)), url('{HERO_IMAGE}') center/cover; padding: 140px 24px; text-align: center;",
            h1 { style: "font-family: Georgia, serif; font-size: 48px; color: #fdfcf8; margin: 0 0 16px 0;",
                "{hero_title}"
            }
            p { style: "font-size: 18px; color: #e5e0d5; max-width: 560px; margin: 0 auto 32px auto;",
                "{hero_subtitle}"
            }
            div { style: "display: flex; gap: 12px; justify-content: center; flex-wrap: wrap;",
                button {
                    style: "background: #fdfcf8; color: #2e4632; border: none; padding: 14px 28px; border-radius: 24px; font-size: 16px; cursor: pointer;",
                    onclick: move |_| on_navigate.call(Screen::Contact),
                    "Plan your event"
                }
                button {
                    style: "background: transparent; color: #fdfcf8; border: 1px solid #fdfcf8; padding: 14px 28px; border-radius: 24px; font-size: 16px; cursor: pointer;",
                    onclick: move |_| on_navigate.call(Screen::Gallery),
                    "View the gallery"
                }
            }
        }

        section { style: "max-width: 1000px; margin: 0 auto; padding: 64px 24px;",
            h2 { style: "font-family: Georgia, serif; font-size: 32px; color: #2e4632; text-align: center; margin-bottom: 40px;",
                "Our Spaces"
            }
            div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px;",
                for space in FEATURED_SPACES.iter() {
                    div { class: "card", style: "padding: 28px; text-align: center;",
                        div { style: "font-size: 36px; margin-bottom: 12px;", "{space.icon}" }
                        h3 { style: "font-family: Georgia, serif; color: #2e4632; margin: 0 0 12px 0;",
                            "{space.title}"
                        }
                        p { style: "font-size: 14px; color: #555; line-height: 1.6; margin: 0;",
                            "{space.description}"
                        }
                    }
                }
            }
        }

        if let Some(Ok(testimonials)) = featured() {
            if !testimonials.is_empty() {
                section { style: "background: #f4f1e8; padding: 64px 24px;",
                    h2 { style: "font-family: Georgia, serif; font-size: 32px; color: #2e4632; text-align: center; margin-bottom: 40px;",
                        "Kind Words"
                    }
                    div { style: "max-width: 1000px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 24px;",
                        for t in testimonials {
                            div { class: "card", style: "padding: 24px;",
                                div { style: "color: #c9a227; font-size: 18px; letter-spacing: 2px;",
                                    {"★".repeat(t.rating.clamp(0, 5) as usize)}
                                }
                                p { style: "font-size: 15px; color: #444; line-height: 1.6; font-style: italic;",
                                    "\u{201c}{t.comment}\u{201d}"
                                }
                                p { style: "font-size: 14px; color: #2e4632; font-weight: 600; margin: 0;",
                                    "{t.client_name} · {t.event_type}"
                                }
                            }
                        }
                    }
                }
            }
        }

        ConciergeWidget {}
    }
}

/// The event-planning assistant. One request per click, no streaming; any
/// failure shows the canned fallback instead of an error.
#[component]
fn ConciergeWidget() -> Element {
    let config = use_context::<AppConfig>();
    let mut preferences = use_signal(String::new);
    let mut reply = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let ask = move |_| {
        let concierge = config.concierge.clone();
        let wish = preferences();
        if wish.trim().is_empty() || busy() {
            return;
        }
        spawn(async move {
            busy.set(true);
            let text = concierge_service::event_reply(&concierge, &wish).await;
            reply.set(Some(text));
            busy.set(false);
        });
    };

    rsx! {
        section { style: "max-width: 700px; margin: 0 auto; padding: 64px 24px;",
            h2 { style: "font-family: Georgia, serif; font-size: 28px; color: #2e4632; text-align: center;",
                "Dream it with us"
            }
            p { style: "text-align: center; color: #555; font-size: 15px; margin-bottom: 24px;",
                "Tell us about the event you have in mind and our concierge will sketch how Eva's Garden can host it."
            }
            textarea {
                style: "width: 100%; min-height: 90px; padding: 12px; border: 1px solid #d5cfc0; border-radius: 8px; font-size: 15px; box-sizing: border-box;",
                placeholder: "An evening garden wedding for 120 guests, fairy lights, live band...",
                value: "{preferences}",
                oninput: move |e| preferences.set(e.value()),
            }
            button {
                style: "margin-top: 12px; background: #2e4632; color: #fdfcf8; border: none; padding: 12px 28px; border-radius: 24px; font-size: 15px; cursor: pointer;",
                disabled: busy(),
                onclick: ask,
                if busy() { "Thinking..." } else { "Ask the concierge" }
            }
            if let Some(text) = reply() {
                div { class: "card", style: "margin-top: 20px; padding: 20px; white-space: pre-wrap; font-size: 15px; color: #333; line-height: 1.7;",
                    "{text}"
                }
            }
        }
    }
}
