use dioxus::prelude::*;
use serde_json::json;
use uuid::Uuid;

use crate::models::InquiryStatus;
use crate::services::{inquiry_service, DataLayer};
use crate::Screen;

use super::PortalShell;

#[component]
pub fn InquiryManagerScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();
    let mut filter = use_signal(|| None::<InquiryStatus>);
    let mut status = use_signal(|| None::<String>);
    // (id, draft) of the notes being edited, one at a time.
    let mut editing = use_signal(|| None::<(Uuid, String)>);

    let mut inquiries = use_resource({
        let data = data.clone();
        move || {
            let data = data.clone();
            let wanted = filter();
            async move { inquiry_service::list(&data, wanted).await }
        }
    });

    let patch = use_callback(move |(id, body): (Uuid, serde_json::Value)| {
        let data = data.clone();
        spawn(async move {
            if let Err(e) = inquiry_service::update(&data, id, body).await {
                status.set(Some(e.user_message()));
            }
            editing.set(None);
            inquiries.restart();
        });
    });

    rsx! {
        PortalShell {
            title: "Inquiries".to_string(),
            current_screen: Screen::AdminInquiries,
            on_navigate,

            div { style: "display: flex; gap: 8px; margin-bottom: 20px; flex-wrap: wrap;",
                button {
                    style: if filter().is_none() {
                        "border: none; background: #2e4632; color: #fff; padding: 6px 14px; border-radius: 16px; cursor: pointer; font-size: 13px;"
                    } else {
                        "border: 1px solid #ccc; background: transparent; color: #555; padding: 6px 14px; border-radius: 16px; cursor: pointer; font-size: 13px;"
                    },
                    onclick: move |_| filter.set(None),
                    "All"
                }
                for wanted in InquiryStatus::all().iter().copied() {
                    button {
                        style: if filter() == Some(wanted) {
                            "border: none; background: #2e4632; color: #fff; padding: 6px 14px; border-radius: 16px; cursor: pointer; font-size: 13px;"
                        } else {
                            "border: 1px solid #ccc; background: transparent; color: #555; padding: 6px 14px; border-radius: 16px; cursor: pointer; font-size: 13px;"
                        },
                        onclick: move |_| filter.set(Some(wanted)),
                        "{wanted.display_name()}"
                    }
                }
            }

            if let Some(message) = status() {
                div { class: "error-message", style: "margin-bottom: 16px;", "{message}" }
            }

            match inquiries() {
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
                        p { style: "color: #888;", "Nothing here." }
                    }
                    div { style: "display: flex; flex-direction: column; gap: 12px;",
                        for inquiry in list {
                            div { class: "card", style: "padding: 18px;",
                                div { style: "display: flex; justify-content: space-between; flex-wrap: wrap; gap: 8px;",
                                    div {
                                        p { style: "margin: 0; font-weight: 600; color: #333;",
                                            "{inquiry.name} · {inquiry.event_type}"
                                        }
                                        p { style: "margin: 4px 0 0 0; font-size: 13px; color: #888;",
                                            "{inquiry.email} · {inquiry.phone}"
                                        }
                                        if let Some(date) = inquiry.preferred_date {
                                            p { style: "margin: 4px 0 0 0; font-size: 13px; color: #888;",
                                                "Preferred date: {date}"
                                            }
                                        }
                                        if let Some(guests) = inquiry.guest_count {
                                            p { style: "margin: 4px 0 0 0; font-size: 13px; color: #888;",
                                                "About {guests} guests"
                                            }
                                        }
                                    }
                                    select {
                                        style: "height: 34px; padding: 4px 8px; border-radius: 6px; border: 1px solid #ccc;",
                                        value: "{inquiry.status.as_str()}",
                                        onchange: move |e| {
                                            if let Some(next) = InquiryStatus::from_str(&e.value()) {
                                                patch.call((inquiry.id, json!({ "status": next.as_str() })));
                                            }
                                        },
                                        for option_status in InquiryStatus::all() {
                                            option {
                                                value: option_status.as_str(),
                                                selected: *option_status == inquiry.status,
                                                "{option_status.display_name()}"
                                            }
                                        }
                                    }
                                }

                                p { style: "font-size: 14px; color: #444; line-height: 1.6;",
                                    "{inquiry.message}"
                                }

                                if let Some((editing_id, draft)) = editing() {
                                    if editing_id == inquiry.id {
                                        div {
                                            textarea {
                                                style: "width: 100%; min-height: 70px; padding: 8px; border: 1px solid #ccc; border-radius: 6px; box-sizing: border-box;",
                                                value: "{draft}",
                                                oninput: move |e| editing.set(Some((editing_id, e.value()))),
                                            }
                                            div { style: "display: flex; gap: 8px; margin-top: 8px;",
                                                button {
                                                    class: "btn-primary",
                                                    style: "padding: 6px 14px; font-size: 13px;",
                                                    onclick: move |_| {
                                                        if let Some((id, draft)) = editing() {
                                                            patch.call((id, json!({ "notes": draft })));
                                                        }
                                                    },
                                                    "Save notes"
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
                                }
                                if editing().map(|(id, _)| id) != Some(inquiry.id) {
                                    div { style: "display: flex; align-items: center; gap: 12px;",
                                        if !inquiry.notes.is_empty() {
                                            p { style: "margin: 0; font-size: 13px; color: #666; font-style: italic;",
                                                "Notes: {inquiry.notes}"
                                            }
                                        }
                                        button {
                                            style: "border: none; background: transparent; color: #2e4632; cursor: pointer; font-size: 13px; text-decoration: underline;",
                                            onclick: {
                                                let notes = inquiry.notes.clone();
                                                move |_| editing.set(Some((inquiry.id, notes.clone())))
                                            },
                                            "Edit notes"
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
