mod backend;
mod frontend;
mod models;
mod utils;

use std::sync::OnceLock;

use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use crate::frontend::app::Route;
use crate::frontend::services::context::{AuthState, ProStatus};
use crate::frontend::services::guard::ReturnTo;
use crate::models::{Profile, Session};

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn main() {
    // Logging setup
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn,hyper=warn,h2=warn"))
        .init();

    // Initialize runtime once
    let _rt = RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create runtime")
    });

    let size = LogicalSize::new(1280.0, 832.0);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("CalcBrew")
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(960.0, 640.0)),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(AppRoot);
}

#[component]
fn AppRoot() -> Element {
    let user = use_signal(|| None::<Profile>);
    let session = use_signal(|| None::<Session>);
    let is_loading = use_signal(|| true);
    let is_pro = use_signal(|| false);
    let origin = use_signal(|| None);

    let auth = AuthState {
        user,
        session,
        is_loading,
    };
    let pro = ProStatus { is_pro };
    provide_context(auth);
    provide_context(pro);
    provide_context(ReturnTo { origin });

    // Resolve the cached session before the guard makes any decisions
    use_future(move || {
        let mut auth = auth;
        async move {
            auth.restore_session(pro).await;
        }
    });

    rsx! { Router::<Route> {} }
}
