//! Shell around the protected dashboard pages: navigation, signed-in user,
//! and logout.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::AppSession;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let user = session.user();
    let navigate = use_navigate();
    let logging_out = RwSignal::new(false);

    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::services::auth::logout(&*session.api(), &*session.tokens()).await;
                session.sign_out();
                logging_out.set(false);
                navigate("/login", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&session, &navigate);
    };

    view! {
        <div class="dashboard-layout">
            <header class="dashboard-layout__header">
                <nav class="dashboard-layout__nav">
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/dashboard/add-item">"Add Item"</A>
                </nav>
                <span class="dashboard-layout__spacer"></span>
                <span class="dashboard-layout__user">{move || user.get().map(|u| u.email)}</span>
                <button class="btn dashboard-layout__logout" on:click=on_logout disabled=move || logging_out.get()>
                    {move || if logging_out.get() { "Logging out..." } else { "Logout" }}
                </button>
            </header>
            <div class="dashboard-layout__content">{children()}</div>
        </div>
    }
}
