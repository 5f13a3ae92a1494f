use crate::features::auth::state::PendingVerificationProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <PendingVerificationProvider>
            <Router>
                <AppRoutes />
            </Router>
        </PendingVerificationProvider>
    }
}
