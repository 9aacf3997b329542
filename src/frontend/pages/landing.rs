//! Marketing landing page.

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::frontend::assets::ResourceLoader;
use crate::frontend::components::common::ScrollReveal;

/// Feature card for the features section.
#[component]
fn FeatureCard(icon: &'static str, title: &'static str, desc: &'static str) -> Element {
    rsx! {
        div { class: "feature-card",
            span { class: "feature-icon", "{icon}" }
            h3 { "{title}" }
            p { "{desc}" }
        }
    }
}

#[component]
fn Step(number: &'static str, text: &'static str) -> Element {
    rsx! {
        div { class: "step",
            span { class: "step-number", "{number}" }
            p { "{text}" }
        }
    }
}

#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();

    rsx! {
        style { dangerous_inner_html: ResourceLoader::get_css("landing") }

        div { class: "landing",
            section { class: "hero",
                h1 {
                    "Every calculation, "
                    span { class: "accent", "brewed to keep" }
                }
                p { class: "hero-sub",
                    "CalcBrew is a calculator that remembers. Work through the numbers, save the ones that matter, and find them again on any device."
                }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| { nav.push("/signup"); },
                        "Start calculating"
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| { nav.push("/pricing"); },
                        "See pricing"
                    }
                }
            }

            ScrollReveal {
                section { id: "features",
                    h2 { class: "section-title", "Why CalcBrew" }
                    div { class: "feature-grid",
                        FeatureCard {
                            icon: "🧮",
                            title: "Fast keypad",
                            desc: "A clean four-function calculator that keeps up with your keyboard."
                        }
                        FeatureCard {
                            icon: "📒",
                            title: "Saved history",
                            desc: "Pin the results you care about and pull them up later, in order."
                        }
                        FeatureCard {
                            icon: "☁️",
                            title: "Synced everywhere",
                            desc: "Your history lives in your account, not in one browser tab."
                        }
                        FeatureCard {
                            icon: "🔒",
                            title: "Private by default",
                            desc: "Nothing is stored until you ask; your numbers are yours."
                        }
                    }
                }
            }

            ScrollReveal {
                section { id: "how-it-works",
                    h2 { class: "section-title", "How it works" }
                    div { class: "steps",
                        Step { number: "1", text: "Create a free account in under a minute." }
                        Step { number: "2", text: "Calculate on the dashboard like you always have." }
                        Step { number: "3", text: "Save a result and it follows you to every device." }
                    }
                }
            }

            ScrollReveal {
                section { class: "pricing-teaser",
                    h2 { class: "section-title", "Free to start" }
                    p { "The calculator is free forever. Go pro when you want unlimited saved history." }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| { nav.push("/pricing"); },
                        "Compare plans"
                    }
                }
            }

            ScrollReveal {
                section { class: "cta",
                    h2 { "Ready to brew?" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| { nav.push("/signup"); },
                        "Create your account"
                    }
                }
            }
        }
    }
}
