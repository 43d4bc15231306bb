use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::auth::{Role, LOGIN_ROUTE};
use crate::components::login::session_landing;
use crate::components::{
    AdminDashboard, Analytics, FarmConfigPage, Login, Monitoring, OwnerDashboard,
    PeternakDashboard, ProfilePage, ReportEntry, RoleLayout,
};
use crate::state::{provide_api_client, use_api_client};

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    // One client for the whole app so the CSRF cookie is fetched once
    provide_api_client(ApiClient::new());

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=Login />
                <Route path="/" view=HomeRedirect />

                <Route path="/admin" view=|| view! { <RoleLayout role=Role::Admin /> }>
                    <Route path="" view=|| view! { <Redirect path="/admin/dashboard" /> } />
                    <Route path="dashboard" view=AdminDashboard />
                    <Route path="konfigurasi" view=FarmConfigPage />
                </Route>

                <Route path="/owner" view=|| view! { <RoleLayout role=Role::Owner /> }>
                    <Route path="" view=|| view! { <Redirect path="/owner/dashboard" /> } />
                    <Route path="dashboard" view=OwnerDashboard />
                    <Route path="monitoring" view=Monitoring />
                    <Route path="analisis" view=Analytics />
                    <Route path="profil" view=|| view! { <ProfilePage role=Role::Owner /> } />
                </Route>

                <Route path="/peternak" view=|| view! { <RoleLayout role=Role::Peternak /> }>
                    <Route path="" view=PeternakDashboard />
                    <Route path="laporan" view=ReportEntry />
                    <Route path="profil" view=|| view! { <ProfilePage role=Role::Peternak /> } />
                </Route>

                <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
            </Routes>
        </Router>
    }
}

/// Send a stored session to its landing page, anyone else to login
#[component]
fn HomeRedirect() -> impl IntoView {
    let session = use_api_client().session().clone();
    let target = session_landing(session.role(), session.is_logged_in()).unwrap_or(LOGIN_ROUTE);
    view! { <Redirect path=target /> }
}
