use dioxus::prelude::*;

use crate::services::{stats_service, DataLayer};
use crate::Screen;

use super::PortalShell;

/// Failed probes arrive as `None` and render as a dash; a zero always
/// means the table is really empty.
fn count_text(count: Option<u64>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => "—".to_string(),
    }
}

#[component]
pub fn DashboardScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();
    let stats = use_resource(move || {
        let data = data.clone();
        async move { stats_service::dashboard_stats(&data).await }
    });

    rsx! {
        PortalShell {
            title: "Dashboard".to_string(),
            current_screen: Screen::AdminDashboard,
            on_navigate,

            match stats() {
                None => rsx! {
                    p { style: "color: #888;", "Loading..." }
                },
                Some(Err(e)) => {
                    let message = e.user_message();
                    rsx! {
                        div { class: "error-message", "{message}" }
                    }
                }
                Some(Ok(stats)) => rsx! {
                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px;",
                        StatCard { label: "Gallery items", value: count_text(stats.total_gallery) }
                        StatCard { label: "Testimonials", value: count_text(stats.total_testimonials) }
                        StatCard { label: "Inquiries", value: count_text(stats.total_inquiries) }
                        StatCard {
                            label: "Pending testimonials",
                            value: count_text(stats.pending_testimonials),
                            highlight: stats.pending_testimonials.is_some_and(|n| n > 0),
                        }
                        StatCard {
                            label: "New inquiries",
                            value: count_text(stats.new_inquiries),
                            highlight: stats.new_inquiries.is_some_and(|n| n > 0),
                        }
                    }

                    div { style: "margin-top: 32px; display: flex; gap: 12px; flex-wrap: wrap;",
                        button {
                            class: "btn-primary",
                            onclick: move |_| on_navigate.call(Screen::AdminTestimonials),
                            "Review testimonials"
                        }
                        button {
                            class: "btn-secondary",
                            onclick: move |_| on_navigate.call(Screen::AdminInquiries),
                            "Open inquiries"
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String, #[props(default = false)] highlight: bool) -> Element {
    rsx! {
        div {
            class: "card",
            style: if highlight {
                "padding: 20px; border-left: 4px solid #c9a227;"
            } else {
                "padding: 20px;"
            },
            p { style: "margin: 0; font-size: 13px; color: #888;", "{label}" }
            p { style: "margin: 8px 0 0 0; font-size: 32px; font-weight: 700; color: #2e4632;",
                "{value}"
            }
        }
    }
}
