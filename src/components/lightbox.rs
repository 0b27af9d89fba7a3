use dioxus::prelude::*;

use crate::models::MediaKind;
use crate::stores::UiStore;

/// Fullscreen media viewer over whatever list the gallery handed to the UI
/// store. Navigation buttons only render where the state says they can go,
/// so the index never leaves the list.
#[component]
pub fn Lightbox() -> Element {
    let mut ui = use_context::<UiStore>();
    let state = ui.lightbox();

    if !state.open {
        return rsx! {};
    }
    let Some(item) = state.current().cloned() else {
        return rsx! {};
    };
    let index = state.index;
    let total = state.items.len();

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.92); z-index: 100; display: flex; align-items: center; justify-content: center;",
            onclick: move |_| ui.close_lightbox(),

            button {
                style: "position: absolute; top: 16px; right: 20px; border: none; background: transparent; color: #fff; font-size: 32px; cursor: pointer;",
                onclick: move |_| ui.close_lightbox(),
                "✕"
            }

            if state.has_prev() {
                button {
                    style: "position: absolute; left: 16px; border: none; background: rgba(255,255,255,0.15); color: #fff; font-size: 28px; width: 48px; height: 48px; border-radius: 50%; cursor: pointer;",
                    onclick: move |e| {
                        e.stop_propagation();
                        ui.set_lightbox_index(index - 1);
                    },
                    "‹"
                }
            }

            div {
                style: "max-width: 90vw; max-height: 85vh;",
                onclick: move |e| e.stop_propagation(),
                match item.kind {
                    MediaKind::Image => rsx! {
                        img {
                            src: item.url.clone(),
                            alt: item.alt.clone(),
                            style: "max-width: 90vw; max-height: 80vh; object-fit: contain; border-radius: 4px;",
                        }
                    },
                    MediaKind::Video => rsx! {
                        video {
                            src: item.url.clone(),
                            poster: item.poster.clone().unwrap_or_default(),
                            controls: true,
                            autoplay: true,
                            style: "max-width: 90vw; max-height: 80vh; border-radius: 4px;",
                        }
                    },
                }
                p { style: "color: #ccc; text-align: center; font-size: 14px; margin-top: 12px;",
                    "{item.alt} · {index + 1} / {total}"
                }
            }

            if state.has_next() {
                button {
                    style: "position: absolute; right: 16px; border: none; background: rgba(255,255,255,0.15); color: #fff; font-size: 28px; width: 48px; height: 48px; border-radius: 50%; cursor: pointer;",
                    onclick: move |e| {
                        e.stop_propagation();
                        ui.set_lightbox_index(index + 1);
                    },
                    "›"
                }
            }
        }
    }
}
