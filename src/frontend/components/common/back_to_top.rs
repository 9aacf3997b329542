use dioxus::{document, prelude::*};

/// Floating button that scrolls back to the top of the page. Hidden while
/// the top-of-page sentinel is still on screen.
#[component]
pub fn BackToTop() -> Element {
    let mut show = use_signal(|| false);

    rsx! {
        div {
            class: "top-sentinel",
            onvisible: move |evt| {
                let at_top = evt.data().is_intersecting().unwrap_or(true);
                show.set(!at_top);
            }
        }
        button {
            class: if show() { "back-to-top visible" } else { "back-to-top" },
            aria_label: "Back to top",
            onclick: move |_| {
                spawn(async move {
                    let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' })").await;
                });
            },
            "↑"
        }
    }
}
