use leptos::*;
use leptos_router::use_navigate;

use crate::auth::{self, Role};
use crate::state::use_api_client;

/// Login page; routes to the role's landing page on success
#[component]
pub fn Login() -> impl IntoView {
    let client = use_api_client();
    let navigate = use_navigate();

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let submit = create_action(move |input: &(String, String)| {
        let (username, password) = input.clone();
        let client = client.clone();
        async move { auth::login(&client, &username, &password).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit.value().get() {
            match result {
                Ok(role) => {
                    error.set(None);
                    navigate(role.landing_route(), Default::default());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        submit.dispatch((username.get_untracked(), password.get_untracked()));
    };

    view! {
        <div class="login-page">
            <form class="card login-card" on:submit=on_submit>
                <h1 class="login-title">"Broilink"</h1>
                <p class="login-subtitle">"Masuk untuk memantau kandang"</p>

                <label class="form-field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                <button class="button primary" type="submit" disabled=move || submit.pending().get()>
                    {move || if submit.pending().get() { "Memproses..." } else { "Masuk" }}
                </button>
            </form>
        </div>
    }
}

/// Landing route for whoever is stored in the session, if anyone
pub fn session_landing(role: Option<String>, logged_in: bool) -> Option<&'static str> {
    if !logged_in {
        return None;
    }
    role.as_deref().and_then(Role::parse).map(|r| r.landing_route())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_landing_follows_role() {
        assert_eq!(session_landing(Some("Owner".into()), true), Some("/owner/dashboard"));
        assert_eq!(session_landing(Some("Peternak".into()), true), Some("/peternak"));
        assert_eq!(session_landing(Some("Owner".into()), false), None);
        assert_eq!(session_landing(Some("Guest".into()), true), None);
        assert_eq!(session_landing(None, true), None);
    }
}
