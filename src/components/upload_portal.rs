use dioxus::html::FileData;
use dioxus::prelude::*;
use uuid::Uuid;

use crate::models::{MediaKind, NewGalleryItem};
use crate::services::{gallery_service, upload_service, DataLayer};
use crate::stores::SessionStore;
use crate::Screen;

use super::PortalShell;

#[derive(Clone, PartialEq)]
enum UploadOutcome {
    Uploading,
    Done,
    Failed(String),
}

#[derive(Clone, PartialEq)]
struct QueueEntry {
    name: String,
    outcome: UploadOutcome,
}

async fn upload_one(
    data: &DataLayer,
    file: FileData,
    title: String,
    alt_text: String,
    description: String,
    category_id: Option<Uuid>,
    uploaded_by: Option<Uuid>,
) -> Result<(), String> {
    let name = file.name();
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| format!("could not read {}: {}", name, e))?;
    let content_type = file
        .content_type()
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let url = upload_service::upload_media(data, "uploads", &name, bytes.to_vec(), &content_type)
        .await
        .map_err(|e| e.user_message())?;

    let item = NewGalleryItem {
        kind: MediaKind::from_content_type(&content_type),
        url,
        thumbnail_url: None,
        category_id,
        title: if title.trim().is_empty() { name.clone() } else { title },
        alt_text: if alt_text.trim().is_empty() { name } else { alt_text },
        description,
        uploaded_by,
    };
    gallery_service::add_item(data, &item)
        .await
        .map_err(|e| e.user_message())?;
    Ok(())
}

#[component]
pub fn UploadPortalScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();
    let session = use_context::<SessionStore>();

    let categories = use_resource({
        let data = data.clone();
        move || {
            let data = data.clone();
            async move { gallery_service::list_categories(&data).await }
        }
    });

    let mut title = use_signal(String::new);
    let mut alt_text = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category_id = use_signal(|| None::<Uuid>);
    let mut queue = use_signal(Vec::<QueueEntry>::new);

    let on_files = move |evt: FormEvent| {
        let uploaded_by = session.state().profile().map(|p| p.id);
        for file in evt.files() {
            let index = queue.read().len();
            queue.write().push(QueueEntry {
                name: file.name(),
                outcome: UploadOutcome::Uploading,
            });

            let data = data.clone();
            let title = title();
            let alt_text = alt_text();
            let description = description();
            let category_id = category_id();
            spawn(async move {
                let outcome = match upload_one(
                    &data,
                    file,
                    title,
                    alt_text,
                    description,
                    category_id,
                    uploaded_by,
                )
                .await
                {
                    Ok(()) => UploadOutcome::Done,
                    Err(message) => UploadOutcome::Failed(message),
                };
                queue.write()[index].outcome = outcome;
            });
        }
    };

    rsx! {
        PortalShell {
            title: "Upload media".to_string(),
            current_screen: Screen::ManagerUpload,
            on_navigate,

            div { class: "card", style: "padding: 24px; max-width: 640px;",
                p { style: "margin-top: 0; font-size: 14px; color: #666;",
                    "Details below apply to every file in the batch; an empty title falls back to the file name."
                }

                div { class: "form-group",
                    label { "Title" }
                    input {
                        r#type: "text",
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Alt text" }
                    input {
                        r#type: "text",
                        value: "{alt_text}",
                        oninput: move |e| alt_text.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Description" }
                    textarea {
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Category" }
                    select {
                        onchange: move |e| category_id.set(e.value().parse().ok()),
                        option { value: "", "Uncategorized" }
                        if let Some(Ok(categories)) = categories() {
                            for category in categories {
                                option { value: category.id.to_string(), "{category.icon} {category.name}" }
                            }
                        }
                    }
                }
                div { class: "form-group",
                    label { "Files" }
                    input {
                        r#type: "file",
                        accept: "image/*,video/*",
                        multiple: true,
                        onchange: on_files,
                    }
                }
            }

            if !queue.read().is_empty() {
                div { style: "margin-top: 24px; max-width: 640px;",
                    h2 { style: "font-family: Georgia, serif; font-size: 18px; color: #2e4632;",
                        "This session"
                    }
                    for entry in queue() {
                        div { class: "card", style: "padding: 12px 16px; display: flex; justify-content: space-between; gap: 12px; margin-bottom: 8px;",
                            span { style: "font-size: 14px; color: #333; overflow: hidden; text-overflow: ellipsis;",
                                "{entry.name}"
                            }
                            {match entry.outcome {
                                UploadOutcome::Uploading => rsx! {
                                    span { style: "font-size: 13px; color: #888;", "Uploading..." }
                                },
                                UploadOutcome::Done => rsx! {
                                    span { style: "font-size: 13px; color: #2e7d32;", "✓ Done" }
                                },
                                UploadOutcome::Failed(message) => rsx! {
                                    span { style: "font-size: 13px; color: #c00;", "✗ {message}" }
                                },
                            }}
                        }
                    }
                }
            }
        }
    }
}
