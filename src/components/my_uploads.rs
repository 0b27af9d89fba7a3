use dioxus::prelude::*;

use crate::models::MediaKind;
use crate::services::{gallery_service, DataLayer};
use crate::stores::SessionStore;
use crate::Screen;

use super::PortalShell;

#[component]
pub fn MyUploadsScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();
    let session = use_context::<SessionStore>();
    let profile_id = session.state().profile().map(|p| p.id);

    let uploads = use_resource(move || {
        let data = data.clone();
        async move {
            match profile_id {
                Some(id) => gallery_service::my_uploads(&data, id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    rsx! {
        PortalShell {
            title: "My uploads".to_string(),
            current_screen: Screen::ManagerMyUploads,
            on_navigate,

            match uploads() {
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
                        p { style: "color: #888;", "Nothing uploaded yet." }
                    }
                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 16px;",
                        for item in list {
                            div { class: "card", style: "overflow: hidden;",
                                img {
                                    src: item.thumbnail_url.clone().unwrap_or_else(|| item.url.clone()),
                                    alt: item.alt_text.clone(),
                                    style: "width: 100%; height: 130px; object-fit: cover;",
                                }
                                div { style: "padding: 10px 12px;",
                                    p { style: "margin: 0; font-size: 14px; font-weight: 600; color: #333;",
                                        "{item.title}"
                                    }
                                    p { style: "margin: 4px 0 0 0; font-size: 12px; color: #888;",
                                        if item.kind == MediaKind::Video { "🎬 " } else { "🖼 " }
                                        "{item.category_name()}"
                                        if item.featured { " · ★ featured" }
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
