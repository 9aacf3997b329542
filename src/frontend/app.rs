//! Application routing system.

use dioxus::prelude::*;
use dioxus_router::{Routable, use_navigator};

use crate::frontend::components::layout::Shell;
use crate::frontend::pages::{
    Dashboard as DashboardPage, Landing as LandingPage, Login as LoginPage,
    Pricing as PricingPage, Signup as SignupPage,
};

#[component]
pub fn Landing() -> Element {
    rsx! { LandingPage {} }
}

#[component]
pub fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
pub fn Signup() -> Element {
    rsx! { SignupPage {} }
}

#[component]
pub fn Pricing() -> Element {
    rsx! { PricingPage {} }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardPage { section: "calculator".to_string() } }
}

#[component]
pub fn DashboardSection(section: String) -> Element {
    rsx! { DashboardPage { section } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = segments.join("/");
    rsx! {
        div { style: "padding: 80px 32px; text-align: center;",
            h1 { "Page not found" }
            p { style: "margin: 14px 0 24px; color: #bdb4a6;",
                "Nothing lives at /{path}"
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| { nav.push("/"); },
                "Back home"
            }
        }
    }
}

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Shell wraps every page with navbar, footer, and the navigation guard.
    #[layout(Shell)]
    /// Marketing landing page.
    #[route("/")]
    Landing {},
    /// Login page.
    #[route("/login")]
    Login {},
    /// Signup page.
    #[route("/signup")]
    Signup {},
    /// Plan comparison page.
    #[route("/pricing")]
    Pricing {},
    /// Dashboard home, defaults to the calculator section.
    #[route("/dashboard")]
    Dashboard {},
    /// Dashboard sub-pages: calculator, history, settings, billing.
    #[route("/dashboard/:section")]
    DashboardSection { section: String },
    /// Fallback for unknown paths.
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
