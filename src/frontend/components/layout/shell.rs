use dioxus::prelude::*;
use dioxus_router::components::Outlet;

use crate::frontend::app::Route;
use crate::frontend::assets::ResourceLoader;
use crate::frontend::components::common::BackToTop;
use crate::frontend::components::layout::{Footer, Navbar};
use crate::frontend::services::guard::AuthNavigationGuard;

/// Application shell wrapping every route: global styles, navbar, the
/// navigation guard, the routed page, and the back-to-top helper.
#[component]
pub fn Shell() -> Element {
    rsx! {
        style { dangerous_inner_html: ResourceLoader::get_css("main") }

        AuthNavigationGuard {}

        div { class: "shell",
            Navbar {}
            div { class: "shell-content",
                Outlet::<Route> {}
            }
            Footer {}
            BackToTop {}
        }
    }
}
