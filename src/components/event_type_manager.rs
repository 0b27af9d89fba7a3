use dioxus::prelude::*;
use serde_json::json;
use uuid::Uuid;

use crate::services::{content_service, DataLayer};
use crate::Screen;

use super::PortalShell;

/// Admin view over the whole catalogue, inactive entries included; the
/// public events page only ever sees the active slice.
#[component]
pub fn EventTypeManagerScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();
    let mut status = use_signal(|| None::<String>);

    let mut event_types = use_resource({
        let data = data.clone();
        move || {
            let data = data.clone();
            async move { content_service::all_event_types(&data).await }
        }
    });

    let patch = use_callback({
        let data = data.clone();
        move |(id, body): (Uuid, serde_json::Value)| {
            let data = data.clone();
            spawn(async move {
                if let Err(e) = content_service::update_event_type(&data, id, body).await {
                    status.set(Some(e.user_message()));
                }
                event_types.restart();
            });
        }
    });

    let delete = use_callback(move |id: Uuid| {
        let data = data.clone();
        spawn(async move {
            if let Err(e) = content_service::delete_event_type(&data, id).await {
                status.set(Some(e.user_message()));
            }
            event_types.restart();
        });
    });

    rsx! {
        PortalShell {
            title: "Event types".to_string(),
            current_screen: Screen::AdminEventTypes,
            on_navigate,

            if let Some(message) = status() {
                div { class: "error-message", style: "margin-bottom: 16px;", "{message}" }
            }

            match event_types() {
                None => rsx! {
                    p { style: "color: #888;", "Loading..." }
                },
                Some(Err(e)) => {
                    let message = e.user_message();
                    rsx! {
                        div { class: "error-message", "{message}" }
                    }
                }
                Some(Ok(kinds)) => rsx! {
                    div { style: "display: flex; flex-direction: column; gap: 12px;",
                        for kind in kinds {
                            div {
                                class: "card",
                                style: if kind.is_active {
                                    "padding: 18px; display: flex; gap: 16px; align-items: center; flex-wrap: wrap;"
                                } else {
                                    "padding: 18px; display: flex; gap: 16px; align-items: center; flex-wrap: wrap; opacity: 0.55;"
                                },
                                img {
                                    src: kind.image_url.clone(),
                                    alt: kind.title.clone(),
                                    style: "width: 90px; height: 64px; object-fit: cover; border-radius: 6px;",
                                }
                                div { style: "flex: 1; min-width: 200px;",
                                    p { style: "margin: 0; font-weight: 600; color: #333;", "{kind.title}" }
                                    p { style: "margin: 4px 0 0 0; font-size: 13px; color: #888;",
                                        "{kind.description}"
                                    }
                                }
                                div { style: "display: flex; gap: 8px;",
                                    button {
                                        class: "btn-secondary",
                                        style: "padding: 6px 12px; font-size: 13px;",
                                        onclick: move |_| patch.call((kind.id, json!({ "is_active": !kind.is_active }))),
                                        if kind.is_active { "Deactivate" } else { "Activate" }
                                    }
                                    button {
                                        style: if kind.featured {
                                            "border: none; background: #c9a227; color: #fff; padding: 6px 12px; border-radius: 4px; cursor: pointer; font-size: 13px;"
                                        } else {
                                            "border: 1px solid #ccc; background: transparent; color: #555; padding: 6px 12px; border-radius: 4px; cursor: pointer; font-size: 13px;"
                                        },
                                        onclick: move |_| patch.call((kind.id, json!({ "featured": !kind.featured }))),
                                        if kind.featured { "★ Popular" } else { "☆ Popular" }
                                    }
                                    button {
                                        class: "btn-danger",
                                        style: "padding: 6px 12px; font-size: 13px;",
                                        onclick: move |_| delete.call(kind.id),
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
