//! Login page.

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::frontend::assets::ResourceLoader;
use crate::frontend::services::context::{AuthState, ProStatus};
use crate::frontend::services::guard::ReturnTo;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let pro = use_context::<ProStatus>();
    let return_to = use_context::<ReturnTo>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();

        error.set(None);
        submitting.set(true);
        spawn(async move {
            let mut auth = auth;
            let mut return_to = return_to;
            match auth.login(pro, email_value, password_value).await {
                Ok(()) => {
                    // Resume the navigation the guard interrupted, if any
                    let target = return_to
                        .consume()
                        .filter(|origin| !origin.pathname.is_empty())
                        .map_or_else(|| "/dashboard".to_string(), |origin| origin.href());
                    nav.push(target);
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
                h1 { "Welcome back" }
                p { class: "auth-hint", "Log in to pick up where you left off." }

                {error().map(|message| rsx! {
                    p { class: "auth-error", "{message}" }
                })}

                div { class: "auth-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: "{email()}",
                        placeholder: "you@example.com",
                        autofocus: true,
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
                    if submitting() { "Logging in..." } else { "Log in" }
                }

                p { class: "auth-switch",
                    "New to CalcBrew? "
                    span {
                        class: "nav-link",
                        onclick: move |_| { nav.push("/signup"); },
                        "Create an account"
                    }
                }
            }
        }
    }
}
