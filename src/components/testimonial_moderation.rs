use dioxus::prelude::*;
use serde_json::json;
use uuid::Uuid;

use crate::services::{testimonial_service, DataLayer};
use crate::Screen;

use super::PortalShell;

#[component]
pub fn TestimonialModerationScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();
    let mut status = use_signal(|| None::<String>);

    let mut testimonials = use_resource({
        let data = data.clone();
        move || {
            let data = data.clone();
            async move { testimonial_service::list(&data, false).await }
        }
    });

    let patch = use_callback({
        let data = data.clone();
        move |(id, body): (Uuid, serde_json::Value)| {
            let data = data.clone();
            spawn(async move {
                if let Err(e) = testimonial_service::update(&data, id, body).await {
                    status.set(Some(e.user_message()));
                }
                testimonials.restart();
            });
        }
    });

    let delete = use_callback(move |id: Uuid| {
        let data = data.clone();
        spawn(async move {
            if let Err(e) = testimonial_service::delete(&data, id).await {
                status.set(Some(e.user_message()));
            }
            testimonials.restart();
        });
    });

    rsx! {
        PortalShell {
            title: "Testimonials".to_string(),
            current_screen: Screen::AdminTestimonials,
            on_navigate,

            if let Some(message) = status() {
                div { class: "error-message", style: "margin-bottom: 16px;", "{message}" }
            }

            match testimonials() {
                None => rsx! {
                    p { style: "color: #888;", "Loading..." }
                },
                Some(Err(e)) => {
                    let message = e.user_message();
                    rsx! {
                        div { class: "error-message", "{message}" }
                    }
                }
                Some(Ok(list)) => rsx! {
                    div { style: "display: flex; flex-direction: column; gap: 12px;",
                        for t in list {
                            div {
                                class: "card",
                                style: if t.approved {
                                    "padding: 18px;"
                                } else {
                                    "padding: 18px; border-left: 4px solid #c9a227;"
                                },
                                div { style: "display: flex; justify-content: space-between; flex-wrap: wrap; gap: 8px;",
                                    div {
                                        p { style: "margin: 0; font-weight: 600; color: #333;",
                                            "{t.client_name} · {t.event_type}"
                                        }
                                        div { style: "color: #c9a227; font-size: 14px; letter-spacing: 2px;",
                                            {"★".repeat(t.rating.clamp(0, 5) as usize)}
                                        }
                                    }
                                    span { style: "font-size: 12px; color: #888;",
                                        if t.approved { "approved" } else { "awaiting review" }
                                    }
                                }
                                p { style: "font-size: 14px; color: #444; line-height: 1.6;",
                                    "{t.comment}"
                                }
                                div { style: "display: flex; gap: 8px; flex-wrap: wrap;",
                                    if !t.approved {
                                        button {
                                            class: "btn-success",
                                            style: "padding: 6px 14px; font-size: 13px;",
                                            onclick: move |_| patch.call((t.id, json!({ "approved": true }))),
                                            "Approve"
                                        }
                                    } else {
                                        button {
                                            class: "btn-secondary",
                                            style: "padding: 6px 14px; font-size: 13px;",
                                            onclick: move |_| patch.call((t.id, json!({ "approved": false, "featured": false }))),
                                            "Unpublish"
                                        }
                                        button {
                                            style: if t.featured {
                                                "border: none; background: #c9a227; color: #fff; padding: 6px 14px; border-radius: 4px; cursor: pointer; font-size: 13px;"
                                            } else {
                                                "border: 1px solid #ccc; background: transparent; color: #555; padding: 6px 14px; border-radius: 4px; cursor: pointer; font-size: 13px;"
                                            },
                                            onclick: move |_| patch.call((t.id, json!({ "featured": !t.featured }))),
                                            if t.featured { "★ Featured" } else { "☆ Feature" }
                                        }
                                    }
                                    button {
                                        class: "btn-danger",
                                        style: "padding: 6px 14px; font-size: 13px;",
                                        onclick: move |_| delete.call(t.id),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
