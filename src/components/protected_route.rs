//! Route guard for dashboard pages.
//!
//! Renders a placeholder while the session check runs, redirects to `/login`
//! once the session is known to be unauthenticated, and renders the protected
//! content otherwise.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;

use crate::session::{AppSession, SessionStatus};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let status = session.status();

    move || match status.get() {
        SessionStatus::Checking => view! { <div class="route-guard">"Loading..."</div> }.into_any(),
        SessionStatus::Unauthenticated => view! { <Redirect path="/login"/> }.into_any(),
        SessionStatus::Authenticated => children(),
    }
}
