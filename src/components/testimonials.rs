use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::models::NewTestimonial;
use crate::services::{testimonial_service, DataLayer};

#[component]
pub fn TestimonialsScreen() -> Element {
    let data = use_context::<DataLayer>();
    let approved = use_resource({
        let data = data.clone();
        move || {
            let data = data.clone();
            async move { testimonial_service::list(&data, true).await }
        }
    });

    let mut client_name = use_signal(String::new);
    let mut event_type = use_signal(String::new);
    let mut event_date = use_signal(String::new);
    let mut rating = use_signal(|| 5i32);
    let mut comment = use_signal(String::new);
    let mut status = use_signal(|| None::<Result<String, String>>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if busy() {
            return;
        }
        let data = data.clone();
        let submission = NewTestimonial {
            client_name: client_name(),
            event_type: event_type(),
            event_date: NaiveDate::parse_from_str(&event_date(), "%Y-%m-%d").ok(),
            rating: rating(),
            comment: comment(),
        };
        spawn(async move {
            busy.set(true);
            match testimonial_service::submit(&data, &submission).await {
                Ok(_) => {
                    status.set(Some(Ok(
                        "Thank you! Your testimonial will appear once our team has reviewed it."
                            .to_string(),
                    )));
                    client_name.set(String::new());
                    event_type.set(String::new());
                    event_date.set(String::new());
                    rating.set(5);
                    comment.set(String::new());
                }
                Err(e) => status.set(Some(Err(e.user_message()))),
            }
            busy.set(false);
        });
    };

    rsx! {
        section { style: "max-width: 900px; margin: 0 auto; padding: 64px 24px;",
            h1 { style: "font-family: Georgia, serif; font-size: 38px; color: #2e4632; text-align: center;",
                "Stories From the Garden"
            }

            match approved() {
                None => rsx! {
                    p { style: "text-align: center; color: #888;", "Loading..." }
                },
                Some(Err(_)) => rsx! {
                    p { style: "text-align: center; color: #888;",
                        "Testimonials are resting for a moment. Please check back soon."
                    }
                },
                Some(Ok(testimonials)) => rsx! {
                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 20px; margin-top: 32px;",
                        for t in testimonials {
                            div { class: "card", style: "padding: 22px;",
                                div { style: "color: #c9a227; font-size: 17px; letter-spacing: 2px;",
                                    {"★".repeat(t.rating.clamp(0, 5) as usize)}
                                }
                                p { style: "font-size: 15px; color: #444; line-height: 1.6; font-style: italic;",
                                    "\u{201c}{t.comment}\u{201d}"
                                }
                                p { style: "font-size: 14px; color: #2e4632; font-weight: 600; margin: 0;",
                                    "{t.client_name}"
                                }
                                p { style: "font-size: 13px; color: #888; margin: 2px 0 0 0;",
                                    "{t.event_type}"
                                }
                            }
                        }
                    }
                },
            }

            div { class: "card", style: "margin-top: 56px; padding: 28px;",
                h2 { style: "font-family: Georgia, serif; font-size: 24px; color: #2e4632; margin-top: 0;",
                    "Celebrated with us? Share your story"
                }

                if let Some(outcome) = status() {
                    {match outcome {
                        Ok(message) => rsx! {
                            div { style: "background: #eef6ee; color: #2e4632; padding: 12px; border-radius: 6px; margin-bottom: 16px; font-size: 14px;",
                                "{message}"
                            }
                        },
                        Err(message) => rsx! {
                            div { class: "error-message", style: "margin-bottom: 16px;", "{message}" }
                        },
                    }}
                }

                div { class: "form-group",
                    label { "Your name" }
                    input {
                        r#type: "text",
                        value: "{client_name}",
                        oninput: move |e| client_name.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Event" }
                    input {
                        r#type: "text",
                        placeholder: "Wedding, birthday, retreat...",
                        value: "{event_type}",
                        oninput: move |e| event_type.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Event date (optional)" }
                    input {
                        r#type: "date",
                        value: "{event_date}",
                        oninput: move |e| event_date.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Rating" }
                    select {
                        value: "{rating}",
                        onchange: move |e| rating.set(e.value().parse().unwrap_or(5)),
                        option { value: "5", "★★★★★" }
                        option { value: "4", "★★★★" }
                        option { value: "3", "★★★" }
                        option { value: "2", "★★" }
                        option { value: "1", "★" }
                    }
                }
                div { class: "form-group",
                    label { "Your story" }
                    textarea {
                        value: "{comment}",
                        oninput: move |e| comment.set(e.value()),
                    }
                }
                button {
                    class: "btn-primary",
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Sending..." } else { "Submit testimonial" }
                }
            }
        }
    }
}
