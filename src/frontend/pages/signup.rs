//! Signup page.

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::frontend::assets::ResourceLoader;
use crate::frontend::services::context::{AuthState, ProStatus};

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let pro = use_context::<ProStatus>();
    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let name_value = display_name.read().trim().to_string();
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();

        error.set(None);
        submitting.set(true);
        spawn(async move {
            let mut auth = auth;
            match auth
                .signup(pro, email_value, password_value, name_value)
                .await
            {
                Ok(()) => {
                    nav.push("/dashboard");
                }
                Err(message) => {
                    error.set(Some(message));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        style { dangerous_inner_html: ResourceLoader::get_css("auth") }

        div { class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: submit,
                h1 { "Create your account" }
                p { class: "auth-hint", "Free forever. No card required." }

                {error().map(|message| rsx! {
                    p { class: "auth-error", "{message}" }
                })}

                div { class: "auth-field",
                    label { r#for: "display-name", "Display name" }
                    input {
                        id: "display-name",
                        r#type: "text",
                        value: "{display_name()}",
                        placeholder: "Ada",
                        autofocus: true,
                        oninput: move |e| {
                            display_name.set(e.value());
                            error.set(None);
                        }
                    }
                }
                div { class: "auth-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: "{email()}",
                        placeholder: "you@example.com",
                        oninput: move |e| {
                            email.set(e.value());
                            error.set(None);
                        }
                    }
                }
                div { class: "auth-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: "{password()}",
                        placeholder: "At least 8 characters",
                        oninput: move |e| {
                            password.set(e.value());
                            error.set(None);
                        }
                    }
                }

                button {
                    class: "btn btn-primary auth-submit",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating account..." } else { "Sign up" }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    span {
                        class: "nav-link",
                        onclick: move |_| { nav.push("/login"); },
                        "Log in"
                    }
                }
            }
        }
    }
}
