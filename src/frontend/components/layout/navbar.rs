use dioxus::prelude::*;
use dioxus_router::{use_navigator, use_route};

use crate::frontend::app::Route;
use crate::frontend::services::context::{AuthState, ProStatus};

#[component]
pub fn Navbar() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();
    let auth = use_context::<AuthState>();
    let pro = use_context::<ProStatus>();

    let active_tab = match route {
        Route::Landing {} => "Home",
        Route::Pricing {} => "Pricing",
        Route::Dashboard {} | Route::DashboardSection { .. } => "Dashboard",
        Route::Login {} | Route::Signup {} | Route::NotFound { .. } => "",
    };

    let signed_in = auth.user.read().is_some();
    let display_name = auth.get_display_name();

    rsx! {
        nav { class: "navbar",
            div {
                class: "brand",
                onclick: move |_| { nav.push("/"); },
                span { class: "brand-mark", "☕" }
                span { "CalcBrew" }
            }
            div { class: "nav-links",
                span {
                    class: if active_tab == "Home" { "nav-link active" } else { "nav-link" },
                    onclick: move |_| { nav.push("/"); },
                    "Home"
                }
                span {
                    class: if active_tab == "Pricing" { "nav-link active" } else { "nav-link" },
                    onclick: move |_| { nav.push("/pricing"); },
                    "Pricing"
                }
                if signed_in {
                    span {
                        class: if active_tab == "Dashboard" { "nav-link active" } else { "nav-link" },
                        onclick: move |_| { nav.push("/dashboard"); },
                        "Dashboard"
                    }
                    span { class: "nav-link", "{display_name}" }
                    if *pro.is_pro.read() {
                        span { class: "nav-pro-badge", "PRO" }
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            spawn(async move {
                                let mut auth = auth;
                                auth.logout(pro).await;
                                nav.push("/");
                            });
                        },
                        "Log out"
                    }
                } else {
                    span {
                        class: "nav-link",
                        onclick: move |_| { nav.push("/login"); },
                        "Log in"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| { nav.push("/signup"); },
                        "Get started"
                    }
                }
            }
        }
    }
}
