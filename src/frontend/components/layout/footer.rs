use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Footer() -> Element {
    let nav = use_navigator();

    rsx! {
        footer { class: "footer",
            span { "© 2026 CalcBrew" }
            div { class: "footer-links",
                span {
                    class: "footer-link",
                    onclick: move |_| { nav.push("/pricing"); },
                    "Pricing"
                }
                span {
                    class: "footer-link",
                    onclick: move |_| {
                        let _ = webbrowser::open("https://github.com/calcbrew/calcbrew");
                    },
                    "GitHub"
                }
                span {
                    class: "footer-link",
                    onclick: move |_| {
                        let _ = webbrowser::open("https://calcbrew.app/docs");
                    },
                    "Docs"
                }
            }
        }
    }
}
