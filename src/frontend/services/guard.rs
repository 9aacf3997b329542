//! Auth-aware navigation guard.
//!
//! A render-less component that watches the auth snapshot and the current
//! location, and enforces two access rules: signed-in users are moved off the
//! auth pages, signed-out users are moved off the dashboard. The decision
//! itself is a pure function so it can be tested without mounting anything.

use dioxus::prelude::*;
use dioxus_router::{use_navigator, use_route};

use crate::frontend::app::Route;
use crate::frontend::services::context::AuthState;

/// Routes a signed-in user has no business visiting; exact-match on pathname.
pub const AUTH_PUBLIC_ROUTES: [&str; 2] = ["/login", "/signup"];

/// Everything under this prefix requires a signed-in user. Plain prefix
/// match, so `/dashboardXYZ` is guarded too.
pub const PROTECTED_PREFIX: &str = "/dashboard";

/// Decomposed location, mirroring what the router reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSnapshot {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl LocationSnapshot {
    /// Splits a raw location string into pathname, search, and hash.
    ///
    /// Total over its input: missing parts come back as empty strings.
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.find('#') {
            Some(i) => (&raw[..i], raw[i..].to_string()),
            None => (raw, String::new()),
        };
        let (pathname, search) = match rest.find('?') {
            Some(i) => (rest[..i].to_string(), rest[i..].to_string()),
            None => (rest.to_string(), String::new()),
        };
        Self {
            pathname,
            search,
            hash,
        }
    }

    /// Reassembles the full location string.
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// What the guard needs to know about auth: identity presence only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub user_present: bool,
    pub is_loading: bool,
}

/// One redirect the guard wants applied; consumed once by the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectIntent {
    pub target: &'static str,
    pub replace_history: bool,
    /// Where the user was headed, so login can send them back afterwards.
    pub transfer_state: Option<LocationSnapshot>,
}

/// The redirect decision, evaluated in order:
///
/// 1. auth still resolving: do nothing, to avoid a redirect flicker;
/// 2. signed in and on an auth page: go to the dashboard;
/// 3. signed out and on a protected page: go to login, remembering where the
///    user was headed.
///
/// Stateless: depends only on the snapshots passed in.
pub fn evaluate_redirect(
    auth: AuthSnapshot,
    location: &LocationSnapshot,
) -> Option<RedirectIntent> {
    if auth.is_loading {
        return None;
    }

    if auth.user_present {
        if AUTH_PUBLIC_ROUTES.contains(&location.pathname.as_str()) {
            return Some(RedirectIntent {
                target: "/dashboard",
                replace_history: true,
                transfer_state: None,
            });
        }
        return None;
    }

    if location.pathname.starts_with(PROTECTED_PREFIX) {
        return Some(RedirectIntent {
            target: "/login",
            replace_history: true,
            transfer_state: Some(location.clone()),
        });
    }

    None
}

/// Pending redirect origin, provided in context. The guard writes it when it
/// bounces a signed-out user to login; the login page consumes it once after
/// a successful sign-in.
#[derive(Clone, Copy)]
pub struct ReturnTo {
    pub origin: Signal<Option<LocationSnapshot>>,
}

impl ReturnTo {
    /// Takes the pending origin, leaving `None` behind.
    pub fn consume(&mut self) -> Option<LocationSnapshot> {
        self.origin.take()
    }
}

/// Mounted once inside the shell; renders nothing.
#[component]
pub fn AuthNavigationGuard() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut return_to = use_context::<ReturnTo>();
    let route = use_route::<Route>();
    let location = LocationSnapshot::parse(&route.to_string());

    // Re-evaluates when the route changes (reactive dependency) or when the
    // auth signals read inside change.
    use_effect(use_reactive((&location,), move |(location,)| {
        let snapshot = AuthSnapshot {
            user_present: auth.user.read().is_some(),
            is_loading: *auth.is_loading.read(),
        };
        if let Some(intent) = evaluate_redirect(snapshot, &location) {
            tracing::debug!(
                "Redirecting {} -> {}",
                location.pathname,
                intent.target
            );
            return_to.origin.set(intent.transfer_state.clone());
            if intent.replace_history {
                nav.replace(intent.target);
            } else {
                nav.push(intent.target);
            }
        }
    }));

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(pathname: &str, search: &str, hash: &str) -> LocationSnapshot {
        LocationSnapshot {
            pathname: pathname.to_string(),
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    const SIGNED_IN: AuthSnapshot = AuthSnapshot {
        user_present: true,
        is_loading: false,
    };
    const SIGNED_OUT: AuthSnapshot = AuthSnapshot {
        user_present: false,
        is_loading: false,
    };

    #[test]
    fn signed_in_user_leaves_auth_pages() {
        for pathname in ["/login", "/signup"] {
            let intent = evaluate_redirect(SIGNED_IN, &loc(pathname, "", ""))
                .expect("auth pages redirect signed-in users");
            assert_eq!(intent.target, "/dashboard");
            assert!(intent.replace_history);
            assert_eq!(intent.transfer_state, None);
        }
    }

    #[test]
    fn signed_in_user_stays_everywhere_else() {
        for pathname in ["/", "/pricing", "/dashboard", "/dashboard/settings"] {
            assert_eq!(evaluate_redirect(SIGNED_IN, &loc(pathname, "", "")), None);
        }
    }

    #[test]
    fn signed_out_user_leaves_dashboard_remembering_origin() {
        let origin = loc("/dashboard/billing", "?tab=history", "#top");
        let intent =
            evaluate_redirect(SIGNED_OUT, &origin).expect("dashboard redirects signed-out users");
        assert_eq!(intent.target, "/login");
        assert!(intent.replace_history);
        assert_eq!(intent.transfer_state, Some(origin));
    }

    #[test]
    fn signed_out_user_stays_on_public_pages() {
        for pathname in ["/", "/login", "/signup", "/pricing"] {
            assert_eq!(evaluate_redirect(SIGNED_OUT, &loc(pathname, "", "")), None);
        }
    }

    // Pinned quirk: the prefix match has no segment-boundary check, so
    // sibling paths that merely share the prefix are guarded too.
    #[test]
    fn prefix_match_has_no_segment_boundary() {
        let intent = evaluate_redirect(SIGNED_OUT, &loc("/dashboardXYZ", "", ""))
            .expect("literal prefix match");
        assert_eq!(intent.target, "/login");
    }

    #[test]
    fn loading_suppresses_every_redirect() {
        for user_present in [true, false] {
            let auth = AuthSnapshot {
                user_present,
                is_loading: true,
            };
            for pathname in ["/login", "/signup", "/dashboard", "/dashboard/settings"] {
                assert_eq!(evaluate_redirect(auth, &loc(pathname, "", "")), None);
            }
        }
    }

    #[test]
    fn evaluation_is_stateless() {
        let origin = loc("/dashboard", "", "");
        let first = evaluate_redirect(SIGNED_OUT, &origin);
        let second = evaluate_redirect(SIGNED_OUT, &origin);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn signed_in_user_on_signup_goes_to_dashboard() {
        let intent = evaluate_redirect(SIGNED_IN, &loc("/signup", "", "")).unwrap();
        assert_eq!(intent.target, "/dashboard");
        assert!(intent.replace_history);
        assert_eq!(intent.transfer_state, None);
    }

    #[test]
    fn parse_splits_search_and_hash() {
        let parsed = LocationSnapshot::parse("/dashboard/billing?tab=history#top");
        assert_eq!(parsed, loc("/dashboard/billing", "?tab=history", "#top"));
        assert_eq!(parsed.href(), "/dashboard/billing?tab=history#top");
    }

    #[test]
    fn parse_defaults_missing_parts_to_empty() {
        assert_eq!(LocationSnapshot::parse(""), loc("", "", ""));
        assert_eq!(LocationSnapshot::parse("/pricing"), loc("/pricing", "", ""));
        assert_eq!(LocationSnapshot::parse("#top"), loc("", "", "#top"));
        assert_eq!(LocationSnapshot::parse("?a=1"), loc("", "?a=1", ""));
    }

    // A hash containing '?' belongs to the hash, not the search.
    #[test]
    fn parse_hash_before_search_wins() {
        let parsed = LocationSnapshot::parse("/p#frag?not-search");
        assert_eq!(parsed, loc("/p", "", "#frag?not-search"));
    }
}
