use dioxus::prelude::*;
use uuid::Uuid;

use crate::services::{content_service, DataLayer};
use crate::stores::SessionStore;
use crate::Screen;

use super::PortalShell;

#[component]
pub fn ContentEditorScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();
    let session = use_context::<SessionStore>();
    let mut status = use_signal(|| None::<String>);
    let mut editing = use_signal(|| None::<(Uuid, String)>);

    let mut content = use_resource({
        let data = data.clone();
        move || {
            let data = data.clone();
            async move { content_service::site_content(&data, None).await }
        }
    });

    let save = use_callback(move |(id, value): (Uuid, String)| {
        let data = data.clone();
        let author = session.state().profile().map(|p| p.id);
        spawn(async move {
            if let Err(e) = content_service::update_content(&data, id, &value, author).await {
                status.set(Some(e.user_message()));
            }
            editing.set(None);
            content.restart();
        });
    });

    rsx! {
        PortalShell {
            title: "Site content".to_string(),
            current_screen: Screen::AdminContent,
            on_navigate,

            if let Some(message) = status() {
                div { class: "error-message", style: "margin-bottom: 16px;", "{message}" }
            }

            match content() {
                None => rsx! {
                    p { style: "color: #888;", "Loading..." }
                },
                Some(Err(e)) => {
                    let message = e.user_message();
                    rsx! {
                        div { class: "error-message", "{message}" }
                    }
                }
                Some(Ok(entries)) => rsx! {
                    div { style: "display: flex; flex-direction: column; gap: 12px;",
                        for entry in entries {
                            div { class: "card", style: "padding: 18px;",
                                div { style: "display: flex; justify-content: space-between; flex-wrap: wrap; gap: 8px;",
                                    p { style: "margin: 0; font-weight: 600; color: #333;",
                                        "{entry.section} / {entry.key}"
                                    }
                                    span { style: "font-size: 12px; color: #888;",
                                        "{entry.content_type.as_str()}"
                                    }
                                }

                                if editing().map(|(id, _)| id) == Some(entry.id) {
                                    {
                                        let draft = editing().map(|(_, v)| v).unwrap_or_default();
                                        rsx! {
                                            textarea {
                                                style: "width: 100%; min-height: 90px; padding: 8px; border: 1px solid #ccc; border-radius: 6px; box-sizing: border-box; margin-top: 10px;",
                                                value: "{draft}",
                                                oninput: move |e| editing.set(Some((entry.id, e.value()))),
                                            }
                                            div { style: "display: flex; gap: 8px; margin-top: 8px;",
                                                button {
                                                    class: "btn-primary",
                                                    style: "padding: 6px 14px; font-size: 13px;",
                                                    onclick: move |_| {
                                                        if let Some((id, value)) = editing() {
                                                            save.call((id, value));
                                                        }
                                                    },
                                                    "Save"
                                                }
                                                button {
                                                    class: "btn-secondary",
                                                    style: "padding: 6px 14px; font-size: 13px;",
                                                    onclick: move |_| editing.set(None),
                                                    "Cancel"
                                                }
                                            }
                                        }
                                    }
                                } else {
                                    p { style: "font-size: 14px; color: #555; white-space: pre-wrap; margin: 10px 0;",
                                        "{entry.value}"
                                    }
                                    button {
                                        style: "border: none; background: transparent; color: #2e4632; cursor: pointer; font-size: 13px; text-decoration: underline; padding: 0;",
                                        onclick: {
                                            let value = entry.value.clone();
                                            move |_| editing.set(Some((entry.id, value.clone())))
                                        },
                                        "Edit"
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
