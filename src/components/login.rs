use dioxus::prelude::*;

use crate::services::DataLayer;
use crate::stores::SessionStore;
use crate::Screen;

/// Staff sign-in. Failures render inline under the form; a successful
/// sign-in routes by role, admins to the dashboard and managers to the
/// upload portal.
#[component]
pub fn LoginScreen(on_navigate: EventHandler<Screen>) -> Element {
    let data = use_context::<DataLayer>();
    let session = use_context::<SessionStore>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let sign_in = use_callback(move |_: ()| {
        if busy() {
            return;
        }
        let data = data.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match session.sign_in(data, email(), password()).await {
                Ok(()) => {
                    password.set(String::new());
                    let destination = if session.is_admin() {
                        Screen::AdminDashboard
                    } else {
                        Screen::ManagerUpload
                    };
                    on_navigate.call(destination);
                }
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    });

    rsx! {
        section { style: "max-width: 400px; margin: 0 auto; padding: 96px 24px;",
            div { class: "card", style: "padding: 32px;",
                h1 { style: "font-family: Georgia, serif; font-size: 26px; color: #2e4632; margin-top: 0; text-align: center;",
                    "Staff Portal"
                }

                if let Some(message) = error() {
                    div { class: "error-message", style: "margin-bottom: 16px;", "{message}" }
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
                    label { "Password" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                sign_in.call(());
                            }
                        },
                    }
                }
                button {
                    class: "btn-primary",
                    style: "width: 100%;",
                    disabled: busy(),
                    onclick: move |_| sign_in.call(()),
                    if busy() { "Signing in..." } else { "Sign in" }
                }

                button {
                    style: "width: 100%; margin-top: 12px; border: none; background: transparent; color: #888; font-size: 13px; cursor: pointer;",
                    onclick: move |_| on_navigate.call(Screen::Home),
                    "Back to the site"
                }
            }
        }
    }
}
