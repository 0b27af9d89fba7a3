use dioxus::prelude::*;

use crate::constants::FALLBACK_GALLERY;
use crate::models::{GalleryItem, MediaKind};
use crate::services::{gallery_service, DataLayer};
use crate::stores::{UiStore, ViewerItem};

fn viewer_list(items: &[GalleryItem]) -> Vec<ViewerItem> {
    items
        .iter()
        .map(|item| ViewerItem {
            kind: item.kind,
            url: item.url.clone(),
            alt: item.alt_text.clone(),
            poster: item.thumbnail_url.clone(),
        })
        .collect()
}

fn fallback_viewer_list() -> Vec<ViewerItem> {
    FALLBACK_GALLERY
        .iter()
        .map(|(url, alt)| ViewerItem {
            kind: MediaKind::Image,
            url: (*url).to_string(),
            alt: (*alt).to_string(),
            poster: None,
        })
        .collect()
}

#[component]
pub fn GalleryScreen() -> Element {
    let data = use_context::<DataLayer>();
    let mut ui = use_context::<UiStore>();
    let mut active_slug = use_signal(|| "all".to_string());

    let categories = use_resource({
        let data = data.clone();
        move || {
            let data = data.clone();
            async move { gallery_service::list_categories(&data).await }
        }
    });
    let items = use_resource(move || {
        let data = data.clone();
        let slug = active_slug();
        async move { gallery_service::list_items(&data, Some(&slug)).await }
    });

    rsx! {
        section { style: "max-width: 1100px; margin: 0 auto; padding: 64px 24px;",
            h1 { style: "font-family: Georgia, serif; font-size: 38px; color: #2e4632; text-align: center;",
                "Gallery"
            }

            // Category filter bar; "All" is always first.
            div { style: "display: flex; flex-wrap: wrap; gap: 8px; justify-content: center; margin: 32px 0;",
                FilterChip {
                    label: "All".to_string(),
                    active: active_slug() == "all",
                    on_click: move |_| active_slug.set("all".to_string()),
                }
                if let Some(Ok(categories)) = categories() {
                    for category in categories {
                        FilterChip {
                            label: format!("{} {}", category.icon, category.name),
                            active: active_slug() == category.slug,
                            on_click: move |_| active_slug.set(category.slug.clone()),
                        }
                    }
                }
            }

            match items() {
                None => rsx! {
                    p { style: "text-align: center; color: #888;", "Loading..." }
                },
                Some(Ok(list)) if !list.is_empty() => {
                    let viewer = viewer_list(&list);
                    rsx! {
                        div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px;",
                            for (i, item) in list.into_iter().enumerate() {
                                GalleryTile {
                                    item,
                                    on_click: {
                                        let viewer = viewer.clone();
                                        move |_| ui.open_lightbox(viewer.clone(), i)
                                    },
                                }
                            }
                        }
                    }
                }
                // Empty or unreachable both fall back to the seeded wall.
                Some(_) => {
                    let viewer = fallback_viewer_list();
                    rsx! {
                        div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px;",
                            for (i, (url, alt)) in FALLBACK_GALLERY.iter().enumerate() {
                                div {
                                    style: "cursor: pointer; border-radius: 8px; overflow: hidden;",
                                    onclick: {
                                        let viewer = viewer.clone();
                                        move |_| ui.open_lightbox(viewer.clone(), i)
                                    },
                                    img {
                                        src: *url,
                                        alt: *alt,
                                        style: "width: 100%; height: 220px; object-fit: cover; display: block;",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterChip(label: String, active: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            style: if active {
                "border: none; background: #2e4632; color: #fdfcf8; padding: 8px 16px; border-radius: 20px; font-size: 14px; cursor: pointer;"
            } else {
                "border: 1px solid #d5cfc0; background: transparent; color: #3a3a3a; padding: 8px 16px; border-radius: 20px; font-size: 14px; cursor: pointer;"
            },
            onclick: move |_| on_click.call(()),
            "{label}"
        }
    }
}

#[component]
fn GalleryTile(item: GalleryItem, on_click: EventHandler<()>) -> Element {
    let preview = item
        .thumbnail_url
        .clone()
        .unwrap_or_else(|| item.url.clone());

    rsx! {
        div {
            style: "position: relative; cursor: pointer; border-radius: 8px; overflow: hidden; background: #1e2f22;",
            onclick: move |_| on_click.call(()),
            img {
                src: preview,
                alt: item.alt_text.clone(),
                style: "width: 100%; height: 220px; object-fit: cover; display: block;",
            }
            if item.kind == MediaKind::Video {
                div { style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; font-size: 40px; color: rgba(255,255,255,0.9); background: rgba(0,0,0,0.25);",
                    "▶"
                }
            }
            div { style: "position: absolute; left: 0; right: 0; bottom: 0; padding: 10px 12px; background: linear-gradient(transparent, rgba(0,0,0,0.65)); color: #fff; font-size: 13px;",
                "{item.title}"
            }
        }
    }
}
