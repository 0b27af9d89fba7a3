use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::constants::CONTACT_INFO;
use crate::models::NewInquiry;
use crate::services::{content_service, inquiry_service, DataLayer};

#[component]
pub fn ContactScreen() -> Element {
    let data = use_context::<DataLayer>();
    let event_types = use_resource({
        let data = data.clone();
        move || {
            let data = data.clone();
            async move { content_service::event_types(&data).await }
        }
    });

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut event_type = use_signal(String::new);
    let mut preferred_date = use_signal(String::new);
    let mut guest_count = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(|| None::<Result<String, String>>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if busy() {
            return;
        }
        let data = data.clone();
        let inquiry = NewInquiry {
            name: name(),
            email: email(),
            phone: phone(),
            event_type: event_type(),
            preferred_date: NaiveDate::parse_from_str(&preferred_date(), "%Y-%m-%d").ok(),
            guest_count: guest_count().parse().ok(),
            message: message(),
        };
        spawn(async move {
            busy.set(true);
            match inquiry_service::submit(&data, &inquiry).await {
                Ok(_) => {
                    status.set(Some(Ok(
                        "Thank you for reaching out. We usually respond within one business day."
                            .to_string(),
                    )));
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    event_type.set(String::new());
                    preferred_date.set(String::new());
                    guest_count.set(String::new());
                    message.set(String::new());
                }
                Err(e) => status.set(Some(Err(e.user_message()))),
            }
            busy.set(false);
        });
    };

    rsx! {
        section { style: "max-width: 1000px; margin: 0 auto; padding: 64px 24px; display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 40px;",
            div {
                h1 { style: "font-family: Georgia, serif; font-size: 38px; color: #2e4632; margin-top: 0;",
                    "Plan Your Event"
                }
                p { style: "color: #555; font-size: 15px; line-height: 1.7;",
                    "Tell us what you are dreaming of and we will come back with availability and ideas."
                }
                div { class: "card", style: "padding: 22px; margin-top: 24px;",
                    p { style: "margin: 6px 0; font-size: 14px; color: #333;",
                        "📍 {CONTACT_INFO.location}"
                    }
                    p { style: "margin: 6px 0; font-size: 14px; color: #333;",
                        "🌿 {CONTACT_INFO.venue_type}"
                    }
                    p { style: "margin: 6px 0; font-size: 14px; color: #333;",
                        "👥 {CONTACT_INFO.capacity}"
                    }
                    p { style: "margin: 6px 0; font-size: 14px; color: #333;",
                        "🚗 Parking: {CONTACT_INFO.parking}"
                    }
                    a {
                        href: CONTACT_INFO.whatsapp_url,
                        target: "_blank",
                        style: "display: inline-block; margin-top: 12px; background: #25d366; color: #fff; padding: 10px 20px; border-radius: 20px; text-decoration: none; font-size: 14px;",
                        "Chat on WhatsApp"
                    }
                }
            }

            div { class: "card", style: "padding: 28px;",
                if let Some(outcome) = status() {
                    {match outcome {
                        Ok(text) => rsx! {
                            div { style: "background: #eef6ee; color: #2e4632; padding: 12px; border-radius: 6px; margin-bottom: 16px; font-size: 14px;",
                                "{text}"
                            }
                        },
                        Err(text) => rsx! {
                            div { class: "error-message", style: "margin-bottom: 16px;", "{text}" }
                        },
                    }}
                }

                div { class: "form-group",
                    label { "Name" }
                    input {
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Email" }
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Phone" }
                    input {
                        r#type: "tel",
                        value: "{phone}",
                        oninput: move |e| phone.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Type of event" }
                    select {
                        value: "{event_type}",
                        onchange: move |e| event_type.set(e.value()),
                        option { value: "", "Select..." }
                        if let Some(Ok(kinds)) = event_types() {
                            for kind in kinds {
                                option { value: kind.title.clone(), "{kind.title}" }
                            }
                        }
                        option { value: "Other", "Other" }
                    }
                }
                div { class: "form-group",
                    label { "Preferred date" }
                    input {
                        r#type: "date",
                        value: "{preferred_date}",
                        oninput: move |e| preferred_date.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Estimated guests" }
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{guest_count}",
                        oninput: move |e| guest_count.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Tell us about your event" }
                    textarea {
                        value: "{message}",
                        oninput: move |e| message.set(e.value()),
                    }
                }
                button {
                    class: "btn-primary",
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Sending..." } else { "Send inquiry" }
                }
            }
        }
    }
}
