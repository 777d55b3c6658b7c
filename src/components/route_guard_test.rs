use super::*;
use crate::net::types::UserProfile;

fn alice() -> Session {
    let user: UserProfile = serde_json::from_value(serde_json::json!({ "id": 1, "username": "alice" })).unwrap();
    Session::authenticated(user)
}

// =============================================================
// ProtectedRoute
// =============================================================

#[test]
fn protected_shows_only_loading_while_resolving() {
    assert_eq!(protected_outcome(&Session::resolving(), false), ProtectedOutcome::Loading);
    assert_eq!(protected_outcome(&Session::resolving(), true), ProtectedOutcome::Loading);
}

#[test]
fn protected_redirects_to_login_without_fallback() {
    assert_eq!(
        protected_outcome(&Session::unauthenticated(), false),
        ProtectedOutcome::Redirect(RouteName::Login.path())
    );
    assert_eq!(protected_outcome(&Session::unauthenticated(), false), ProtectedOutcome::Redirect("/login"));
}

#[test]
fn protected_prefers_fallback_when_given() {
    assert_eq!(protected_outcome(&Session::unauthenticated(), true), ProtectedOutcome::Fallback);
}

#[test]
fn protected_renders_children_when_authenticated() {
    assert_eq!(protected_outcome(&alice(), false), ProtectedOutcome::Render);
    assert_eq!(protected_outcome(&alice(), true), ProtectedOutcome::Render);
}

// =============================================================
// PublicRoute
// =============================================================

#[test]
fn public_shows_only_loading_while_resolving() {
    assert_eq!(public_outcome(&Session::resolving()), PublicOutcome::Loading);
}

#[test]
fn public_redirects_home_when_authenticated() {
    assert_eq!(public_outcome(&alice()), PublicOutcome::Redirect(RouteName::Home.path()));
    assert_eq!(public_outcome(&alice()), PublicOutcome::Redirect("/"));
}

#[test]
fn public_renders_children_when_unauthenticated() {
    assert_eq!(public_outcome(&Session::unauthenticated()), PublicOutcome::Render);
}

#[test]
fn replace_history_replaces_current_entry() {
    assert!(replace_history().replace);
}

// =============================================================
// Rendering
// =============================================================

fn render_protected(session: Session, with_fallback: bool) -> String {
    Owner::new().with(|| {
        provide_context(RwSignal::new(session));
        if with_fallback {
            view! {
                <ProtectedRoute fallback=|| view! { <p>"landing"</p> }>
                    <p>"members only"</p>
                </ProtectedRoute>
            }
            .to_html()
        } else {
            view! {
                <ProtectedRoute>
                    <p>"members only"</p>
                </ProtectedRoute>
            }
            .to_html()
        }
    })
}

fn render_public(session: Session) -> String {
    Owner::new().with(|| {
        provide_context(RwSignal::new(session));
        view! {
            <PublicRoute>
                <p>"login form"</p>
            </PublicRoute>
        }
        .to_html()
    })
}

#[test]
fn protected_route_renders_only_the_loading_indicator_while_resolving() {
    let html = render_protected(Session::resolving(), true);
    assert!(html.contains("Loading..."));
    assert!(!html.contains("members only"));
    assert!(!html.contains("landing"));
}

#[test]
fn protected_route_renders_children_for_a_signed_in_user() {
    let html = render_protected(alice(), true);
    assert!(html.contains("members only"));
    assert!(!html.contains("landing"));
}

#[test]
fn protected_route_renders_fallback_when_signed_out() {
    let html = render_protected(Session::unauthenticated(), true);
    assert!(html.contains("landing"));
    assert!(!html.contains("members only"));
}

#[test]
fn protected_route_without_fallback_renders_nothing_but_the_redirect() {
    let html = render_protected(Session::unauthenticated(), false);
    assert!(!html.contains("members only"));
    assert!(!html.contains("Loading..."));
}

#[test]
fn public_route_renders_children_when_signed_out() {
    assert!(render_public(Session::unauthenticated()).contains("login form"));
}

#[test]
fn public_route_hides_children_while_resolving_or_signed_in() {
    let resolving = render_public(Session::resolving());
    assert!(resolving.contains("Loading..."));
    assert!(!resolving.contains("login form"));

    assert!(!render_public(alice()).contains("login form"));
}
