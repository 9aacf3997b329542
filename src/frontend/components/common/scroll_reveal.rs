use dioxus::prelude::*;

/// Wrapper that fades its children in the first time they scroll into view.
/// The reveal is one-way: once visible, the section stays visible.
#[component]
pub fn ScrollReveal(children: Element) -> Element {
    let mut revealed = use_signal(|| false);

    rsx! {
        div {
            class: if revealed() { "reveal reveal-visible" } else { "reveal" },
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    revealed.set(true);
                }
            },
            {children}
        }
    }
}
