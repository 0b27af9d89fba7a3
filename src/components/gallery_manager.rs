use dioxus::prelude::*;
use serde_json::json;

use crate::models::{GalleryItem, MediaKind};
use crate::services::{gallery_service, DataLayer};
use crate::Screen;

use super::PortalShell;

#[component]
pub fn GalleryManagerScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();
    let mut status = use_signal(|| None::<String>);

    let mut items = use_resource({
        let data = data.clone();
        move || {
            let data = data.clone();
            async move { gallery_service::list_items(&data, None).await }
        }
    });

    let toggle_featured = use_callback({
        let data = data.clone();
        move |item: GalleryItem| {
            let data = data.clone();
            spawn(async move {
                let patch = json!({ "featured": !item.featured });
                if let Err(e) = gallery_service::update_item(&data, item.id, patch).await {
                    status.set(Some(e.user_message()));
                }
                items.restart();
            });
        }
    });

    let delete = use_callback(move |item: GalleryItem| {
        let data = data.clone();
        spawn(async move {
            if let Err(e) = gallery_service::delete_item(&data, &item).await {
                status.set(Some(e.user_message()));
            }
            items.restart();
        });
    });

    rsx! {
        PortalShell {
            title: "Gallery".to_string(),
            current_screen: Screen::AdminGallery,
            on_navigate,

            if let Some(message) = status() {
                div { class: "error-message", style: "margin-bottom: 16px;", "{message}" }
            }

            match items() {
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
                    if list.is_empty() {
                        p { style: "color: #888;", "No media yet. Managers add items from the upload portal." }
                    }
                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px;",
                        for item in list {
                            div { class: "card", style: "overflow: hidden;",
                                img {
                                    src: item.thumbnail_url.clone().unwrap_or_else(|| item.url.clone()),
                                    alt: item.alt_text.clone(),
                                    style: "width: 100%; height: 140px; object-fit: cover;",
                                }
                                div { style: "padding: 12px;",
                                    p { style: "margin: 0; font-size: 14px; font-weight: 600; color: #333;",
                                        "{item.title}"
                                    }
                                    p { style: "margin: 4px 0; font-size: 12px; color: #888;",
                                        if item.kind == MediaKind::Video { "🎬 " } else { "🖼 " }
                                        "{item.category_name()}"
                                    }
                                    div { style: "display: flex; gap: 8px; margin-top: 8px;",
                                        button {
                                            style: if item.featured {
                                                "flex: 1; border: none; background: #c9a227; color: #fff; padding: 6px; border-radius: 4px; cursor: pointer; font-size: 12px;"
                                            } else {
                                                "flex: 1; border: 1px solid #ccc; background: transparent; color: #555; padding: 6px; border-radius: 4px; cursor: pointer; font-size: 12px;"
                                            },
                                            onclick: {
                                                let item = item.clone();
                                                move |_| toggle_featured.call(item.clone())
                                            },
                                            if item.featured { "★ Featured" } else { "☆ Feature" }
                                        }
                                        button {
                                            class: "btn-danger",
                                            style: "padding: 6px 10px; font-size: 12px;",
                                            onclick: {
                                                let item = item.clone();
                                                move |_| delete.call(item.clone())
                                            },
                                            "Delete"
                                        }
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
