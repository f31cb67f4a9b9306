//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{dashboard_layout::DashboardLayout, protected_route::ProtectedRoute};
use crate::config::ApiConfig;
use crate::net::client::HttpClient;
use crate::pages::{
    add_item::AddItemPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    password_recovery::PasswordRecoveryPage, register::RegisterPage,
};
use crate::session::{AppSession, Session, token_store::CookieTokenStore};

/// Root application component.
///
/// Provides the session controller and starts the initial session check
/// before any route renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: AppSession = Session::new(HttpClient::new(ApiConfig::from_build_env()), CookieTokenStore);
    session.refresh();
    provide_context(session);

    view! {
        <Title text="Stockroom"/>

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("password-recovery") view=PasswordRecoveryPage/>
                    <Route path=StaticSegment("dashboard") view=ProtectedDashboard/>
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("add-item"))
                        view=ProtectedAddItem
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardLayout>
                <DashboardPage/>
            </DashboardLayout>
        </ProtectedRoute>
    }
}

#[component]
fn ProtectedAddItem() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardLayout>
                <AddItemPage/>
            </DashboardLayout>
        </ProtectedRoute>
    }
}
