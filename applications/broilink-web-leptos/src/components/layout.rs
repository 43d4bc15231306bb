use leptos::*;
use leptos_router::*;

use crate::auth::{self, browser_navigator, Role, LOGIN_ROUTE};
use crate::models::LoginUser;
use crate::state::use_api_client;

/// Layout for one role's pages; anyone else is sent to the login screen
#[component]
pub fn RoleLayout(role: Role) -> impl IntoView {
    let session = use_api_client().session().clone();
    let allowed = session.is_logged_in() && session.role().as_deref() == Some(role.as_str());

    if !allowed {
        log::warn!("No {} session, redirecting to login", role);
        return view! { <Redirect path=LOGIN_ROUTE /> }.into_view();
    }

    view! {
        <div class="layout">
            <Navbar role=role />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
    .into_view()
}

/// Tabs shown to each role
pub fn nav_items(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Admin => &[
            ("/admin/dashboard", "Dashboard"),
            ("/admin/konfigurasi", "Konfigurasi Kandang"),
        ],
        Role::Owner => &[
            ("/owner/dashboard", "Dashboard"),
            ("/owner/monitoring", "Monitoring"),
            ("/owner/analisis", "Analisis"),
            ("/owner/profil", "Profil"),
        ],
        Role::Peternak => &[
            ("/peternak", "Dashboard"),
            ("/peternak/laporan", "Input Laporan"),
            ("/peternak/profil", "Profil"),
        ],
    }
}

/// Every page is a leaf route, so a tab is active only on its own path
pub fn is_active(pathname: &str, href: &str) -> bool {
    let path = pathname.trim_end_matches('/');
    path == href
}

#[component]
fn Navbar(role: Role) -> impl IntoView {
    let location = use_location();
    let client = use_api_client();
    let profile_name = client
        .session()
        .user::<LoginUser>()
        .map(|user| user.display_name())
        .unwrap_or_else(|| role.to_string());

    let logout = move |_| auth::logout(client.session(), browser_navigator().as_ref());

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"Broilink"</h1>
                <div class="navbar-tabs">
                    {nav_items(role)
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <A
                                    href=href
                                    class=move || {
                                        if is_active(&location.pathname.get(), href) {
                                            "tab active"
                                        } else {
                                            "tab"
                                        }
                                    }
                                >
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="navbar-actions">
                    <span class="navbar-profile">{profile_name}</span>
                    <span class="navbar-role">{role.as_str()}</span>
                    <button class="logout-button" on:click=logout>
                        "Keluar"
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peternak_dashboard_tab_not_active_on_subpages() {
        assert!(is_active("/peternak", "/peternak"));
        assert!(is_active("/peternak/", "/peternak"));
        assert!(!is_active("/peternak/laporan", "/peternak"));
        assert!(is_active("/peternak/laporan", "/peternak/laporan"));
    }

    #[test]
    fn test_every_tab_belongs_to_its_role() {
        for role in [Role::Admin, Role::Owner, Role::Peternak] {
            let items = nav_items(role);
            assert_eq!(items[0].0, role.landing_route());
            let prefix = role.landing_route().split('/').nth(1).unwrap();
            assert!(items.iter().all(|(href, _)| href.starts_with(&format!("/{}", prefix))));
        }
    }
}
