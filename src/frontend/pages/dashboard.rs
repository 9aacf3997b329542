//! Dashboard: calculator, saved history, account sections.

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::backend::api::PlatformClient;
use crate::frontend::assets::ResourceLoader;
use crate::frontend::services::context::{AuthState, ProStatus};
use crate::frontend::states::calculator::{CalcKey, Operator, use_calculator_state};
use crate::models::{Calculation, NewCalculation};

const SECTIONS: [(&str, &str); 4] = [
    ("calculator", "Calculator"),
    ("history", "History"),
    ("settings", "Settings"),
    ("billing", "Billing"),
];

#[component]
pub fn Dashboard(section: String) -> Element {
    let nav = use_navigator();
    let active = if SECTIONS.iter().any(|&(id, _)| id == section) {
        section.clone()
    } else {
        "calculator".to_string()
    };

    rsx! {
        style { dangerous_inner_html: ResourceLoader::get_css("dashboard") }

        div { class: "dashboard",
            aside { class: "dashboard-nav",
                for (id, label) in SECTIONS {
                    span {
                        class: if active == id { "dashboard-nav-item active" } else { "dashboard-nav-item" },
                        onclick: move |_| { nav.push(format!("/dashboard/{id}")); },
                        "{label}"
                    }
                }
            }
            main { class: "dashboard-main",
                {match active.as_str() {
                    "history" => rsx! { HistoryPanel {} },
                    "settings" => rsx! { SettingsPanel {} },
                    "billing" => rsx! { BillingPanel {} },
                    _ => rsx! { CalculatorPanel {} },
                }}
            }
        }
    }
}

#[component]
fn CalculatorPanel() -> Element {
    let auth = use_context::<AuthState>();
    let mut calc = use_calculator_state();
    let mut save_note = use_signal(|| None::<String>);

    let mut press = move |key: CalcKey| {
        calc.write().press(key);
        save_note.set(None);
    };

    // A result is saveable once equals produced an expression
    let can_save = {
        let state = calc.read();
        !state.last_expression().is_empty() && !state.has_error()
    };

    let save = move |_| {
        let Some(session) = auth.session.read().clone() else {
            return;
        };
        let entry = {
            let state = calc.read();
            NewCalculation {
                expression: state.last_expression().to_string(),
                result: state.display().to_string(),
            }
        };
        spawn(async move {
            let client = PlatformClient::from_env();
            match client.save_calculation(&session, &entry).await {
                Ok(_) => save_note.set(Some("Saved to history".to_string())),
                Err(e) => {
                    tracing::warn!("Failed to save calculation: {e}");
                    save_note.set(Some("Could not save, try again".to_string()));
                }
            }
        });
    };

    let display = calc.read().display().to_string();
    let errored = calc.read().has_error();

    rsx! {
        h1 { "Calculator" }
        div { class: "calculator",
            div {
                class: if errored { "calc-display error" } else { "calc-display" },
                "{display}"
            }
            div { class: "calc-keys",
                button { class: "calc-key", onclick: move |_| press(CalcKey::Clear), "C" }
                button { class: "calc-key", onclick: move |_| press(CalcKey::ToggleSign), "±" }
                button { class: "calc-key", onclick: move |_| press(CalcKey::Percent), "%" }
                button { class: "calc-key op", onclick: move |_| press(CalcKey::Op(Operator::Divide)), "÷" }

                button { class: "calc-key", onclick: move |_| press(CalcKey::Digit(7)), "7" }
                button { class: "calc-key", onclick: move |_| press(CalcKey::Digit(8)), "8" }
                button { class: "calc-key", onclick: move |_| press(CalcKey::Digit(9)), "9" }
                button { class: "calc-key op", onclick: move |_| press(CalcKey::Op(Operator::Multiply)), "×" }

                button { class: "calc-key", onclick: move |_| press(CalcKey::Digit(4)), "4" }
                button { class: "calc-key", onclick: move |_| press(CalcKey::Digit(5)), "5" }
                button { class: "calc-key", onclick: move |_| press(CalcKey::Digit(6)), "6" }
                button { class: "calc-key op", onclick: move |_| press(CalcKey::Op(Operator::Subtract)), "−" }

                button { class: "calc-key", onclick: move |_| press(CalcKey::Digit(1)), "1" }
                button { class: "calc-key", onclick: move |_| press(CalcKey::Digit(2)), "2" }
                button { class: "calc-key", onclick: move |_| press(CalcKey::Digit(3)), "3" }
                button { class: "calc-key op", onclick: move |_| press(CalcKey::Op(Operator::Add)), "+" }

                button { class: "calc-key wide", onclick: move |_| press(CalcKey::Digit(0)), "0" }
                button { class: "calc-key", onclick: move |_| press(CalcKey::Decimal), "." }
                button { class: "calc-key equals", onclick: move |_| press(CalcKey::Equals), "=" }
            }
            button {
                class: "btn btn-ghost calc-save",
                disabled: !can_save,
                onclick: save,
                "Save result"
            }
            {save_note().map(|note| rsx! {
                p { class: "history-empty", "{note}" }
            })}
        }
    }
}

#[component]
fn HistoryPanel() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let pro = use_context::<ProStatus>();
    let mut history = use_signal(Vec::<Calculation>::new);
    let mut loaded = use_signal(|| false);

    use_future(move || async move {
        let Some(session) = auth.session.read().clone() else {
            loaded.set(true);
            return;
        };
        let client = PlatformClient::from_env();
        match client.list_calculations(&session).await {
            Ok(list) => history.set(list),
            Err(e) => tracing::warn!("Failed to load history: {e}"),
        }
        loaded.set(true);
    });

    let is_pro = *pro.is_pro.read();
    let shown = if is_pro { usize::MAX } else { 10 };

    rsx! {
        h1 { "History" }
        if !loaded() {
            p { class: "history-empty", "Loading your history..." }
        } else if history.read().is_empty() {
            p { class: "history-empty",
                "Nothing saved yet. Save a result from the calculator and it will show up here."
            }
        } else {
            div { class: "history-list",
                for entry in history.read().iter().take(shown).cloned() {
                    div { class: "history-row", key: "{entry.id}",
                        span { class: "history-expression", "{entry.expression} =" }
                        span { "{entry.result}" }
                    }
                }
            }
            if !is_pro && history.read().len() > shown {
                div { class: "pro-upsell",
                    p { "Free accounts keep the last 10 results. Go pro for unlimited history." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| { nav.push("/pricing"); },
                        "See pro"
                    }
                }
            }
        }
    }
}

#[component]
fn SettingsPanel() -> Element {
    let auth = use_context::<AuthState>();
    let Some(profile) = auth.user.read().clone() else {
        return rsx! { h1 { "Settings" } };
    };
    let name = profile.short_name();
    let member_since = profile.created_at.format("%B %Y").to_string();

    rsx! {
        h1 { "Settings" }
        div { class: "history-list",
            div { class: "history-row",
                span { class: "history-expression", "Display name" }
                span { "{name}" }
            }
            div { class: "history-row",
                span { class: "history-expression", "Email" }
                span { "{profile.email}" }
            }
            div { class: "history-row",
                span { class: "history-expression", "Member since" }
                span { "{member_since}" }
            }
        }
    }
}

#[component]
fn BillingPanel() -> Element {
    let nav = use_navigator();
    let pro = use_context::<ProStatus>();

    rsx! {
        h1 { "Billing" }
        if *pro.is_pro.read() {
            p { class: "history-empty",
                "You are on the pro plan. Manage your subscription from the billing portal email we sent you."
            }
        } else {
            div { class: "pro-upsell",
                p { "You are on the free plan." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { nav.push("/pricing"); },
                    "Upgrade to pro"
                }
            }
        }
    }
}
