//! Pricing page.

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::frontend::assets::ResourceLoader;

#[component]
pub fn Pricing() -> Element {
    let nav = use_navigator();

    rsx! {
        style { dangerous_inner_html: ResourceLoader::get_css("landing") }

        div { class: "landing",
            section {
                h2 { class: "section-title", "Plans" }
                div { class: "plans",
                    div { class: "plan-card",
                        h3 { "Free" }
                        div { class: "plan-price", "$0" }
                        ul { class: "plan-features",
                            li { "Full calculator" }
                            li { "Last 10 saved results" }
                            li { "One device at a time" }
                        }
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| { nav.push("/signup"); },
                            "Start free"
                        }
                    }
                    div { class: "plan-card highlight",
                        h3 { "Pro" }
                        div { class: "plan-price", "$4/mo" }
                        ul { class: "plan-features",
                            li { "Unlimited saved history" }
                            li { "Sync across all devices" }
                            li { "Priority support" }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| { nav.push("/signup"); },
                            "Go pro"
                        }
                    }
                }
            }
        }
    }
}
