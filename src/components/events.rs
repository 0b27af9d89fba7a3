use dioxus::prelude::*;

use crate::services::{content_service, DataLayer};
use crate::Screen;

#[component]
pub fn EventsScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();
    let event_types = use_resource(move || {
        let data = data.clone();
        async move { content_service::event_types(&data).await }
    });

    rsx! {
        section { style: "max-width: 1000px; margin: 0 auto; padding: 64px 24px;",
            h1 { style: "font-family: Georgia, serif; font-size: 38px; color: #2e4632; text-align: center;",
                "Celebrations We Host"
            }
            p { style: "text-align: center; color: #555; font-size: 16px; margin-bottom: 48px;",
                "From vows on the lawn to end-of-year team gatherings, the garden adapts to the occasion."
            }

            match event_types() {
                None => rsx! {
                    p { style: "text-align: center; color: #888;", "Loading..." }
                },
                Some(Err(_)) => rsx! {
                    p { style: "text-align: center; color: #888;",
                        "Our event catalogue is catching its breath. Reach out and we will walk you through it."
                    }
                },
                Some(Ok(kinds)) => rsx! {
                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 28px;",
                        for kind in kinds {
                            div { class: "card", style: "overflow: hidden;",
                                img {
                                    src: kind.image_url.clone(),
                                    alt: kind.title.clone(),
                                    style: "width: 100%; height: 200px; object-fit: cover;",
                                }
                                div { style: "padding: 20px;",
                                    div { style: "display: flex; align-items: center; gap: 8px;",
                                        h3 { style: "font-family: Georgia, serif; color: #2e4632; margin: 0;",
                                            "{kind.title}"
                                        }
                                        if kind.featured {
                                            span { style: "font-size: 11px; background: #c9a227; color: #fff; padding: 2px 8px; border-radius: 10px;",
                                                "Popular"
                                            }
                                        }
                                    }
                                    p { style: "font-size: 14px; color: #555; line-height: 1.6;",
                                        "{kind.description}"
                                    }
                                    div { style: "display: flex; flex-wrap: wrap; gap: 6px;",
                                        for tag in kind.tags {
                                            span { style: "font-size: 12px; background: #f4f1e8; color: #2e4632; padding: 3px 10px; border-radius: 12px;",
                                                "{tag}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }

            div { style: "text-align: center; margin-top: 48px;",
                button {
                    style: "background: #2e4632; color: #fdfcf8; border: none; padding: 14px 28px; border-radius: 24px; font-size: 16px; cursor: pointer;",
                    onclick: move |_| on_navigate.call(Screen::Contact),
                    "Inquire about a date"
                }
            }
        }
    }
}
