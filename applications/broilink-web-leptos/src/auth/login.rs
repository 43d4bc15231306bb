use thiserror::Error;

use super::redirect::{Navigator, LOGIN_ROUTE};
use super::role::Role;
use super::session::Session;
use crate::api::{ApiClient, ApiError};
use crate::forms::validate_credentials;
use crate::models::LoginResponse;

/// Errors shown on the login form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Username harus diisi")]
    EmptyUsername,
    #[error("Password harus diisi")]
    EmptyPassword,
    #[error("Username atau Password salah")]
    WrongCredentials,
    #[error("Role pengguna tidak dikenal")]
    UnknownRole(String),
    #[error("{0}")]
    Server(String),
    #[error("Terjadi kesalahan koneksi atau server")]
    Connection,
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized | ApiError::Http { status: 401, .. } => {
                LoginError::WrongCredentials
            }
            ApiError::Http { message, .. } if !message.is_empty() => LoginError::Server(message),
            _ => LoginError::Connection,
        }
    }
}

/// Validate, fetch the CSRF cookie, authenticate and store the session.
///
/// Returns the role so the caller can route to its landing page.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<Role, LoginError> {
    let credentials = validate_credentials(username, password)?;

    client.ensure_csrf_cookie().await?;

    log::debug!("Logging in as {}", credentials.username);
    let response = client.login(&credentials).await.map_err(|e| {
        log::error!("Login failed: {}", e);
        LoginError::from(e)
    })?;

    complete_login(client.session(), response)
}

/// Store a successful login, or wipe storage when the role is not recognised
pub fn complete_login(session: &Session, response: LoginResponse) -> Result<Role, LoginError> {
    let data = response.data;

    match Role::parse(&data.user.role) {
        Some(role) => {
            session.store_login(&data.token, role.as_str(), &data.user);
            log::info!("Logged in with role {}", role);
            Ok(role)
        }
        None => {
            log::warn!("Rejected login with unknown role {:?}", data.user.role);
            session.clear_all();
            Err(LoginError::UnknownRole(data.user.role))
        }
    }
}

/// End the session and return to the login screen
pub fn logout(session: &Session, navigator: &dyn Navigator) {
    session.clear();
    navigator.navigate(LOGIN_ROUTE);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::auth::memory::MemoryStore;
    use crate::auth::session::{SESSION_KEYS, TOKEN_KEY, USER_KEY};
    use crate::auth::KeyValueStore;
    use serde_json::json;

    fn response(role: &str) -> LoginResponse {
        serde_json::from_value(json!({
            "data": {
                "user": {"role": role, "name": "Budi", "id": 7},
                "token": "secret-token"
            }
        }))
        .unwrap()
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    #[test]
    fn test_known_roles_store_the_session() {
        for (role, route) in [
            ("Admin", "/admin/dashboard"),
            ("Owner", "/owner/dashboard"),
            ("Peternak", "/peternak"),
        ] {
            let store = Rc::new(MemoryStore::default());
            let session = Session::new(store.clone());

            let landed = complete_login(&session, response(role)).unwrap();

            assert_eq!(landed.landing_route(), route);
            assert_eq!(session.token().as_deref(), Some("secret-token"));
            assert_eq!(session.role().as_deref(), Some(role));
            assert!(session.is_logged_in());
        }
    }

    #[test]
    fn test_user_record_is_cached_with_extra_fields() {
        let store = Rc::new(MemoryStore::default());
        let session = Session::new(store.clone());

        complete_login(&session, response("Owner")).unwrap();

        let user: serde_json::Value = session.user().unwrap();
        assert_eq!(user["name"], "Budi");
        assert_eq!(user["role"], "Owner");
        assert!(store.get(USER_KEY).is_some());
    }

    #[test]
    fn test_unknown_role_clears_storage() {
        let store = Rc::new(MemoryStore::default());
        store.set("defaultConfig", "{}");
        store.set(TOKEN_KEY, "stale");
        let session = Session::new(store.clone());

        let err = complete_login(&session, response("Supervisor")).unwrap_err();

        assert_eq!(err, LoginError::UnknownRole("Supervisor".into()));
        assert_eq!(err.to_string(), "Role pengguna tidak dikenal");
        assert!(store.keys().is_empty());
    }

    #[test]
    fn test_api_errors_map_to_form_messages() {
        let wrong = LoginError::from(ApiError::Http {
            status: 401,
            message: "Unauthenticated.".into(),
        });
        assert_eq!(wrong.to_string(), "Username atau Password salah");

        let server = LoginError::from(ApiError::Http {
            status: 422,
            message: "Akun dinonaktifkan".into(),
        });
        assert_eq!(server.to_string(), "Akun dinonaktifkan");

        let network = LoginError::from(ApiError::Network("offline".into()));
        assert_eq!(network.to_string(), "Terjadi kesalahan koneksi atau server");
    }

    #[test]
    fn test_logout_clears_session_and_returns_to_login() {
        let store = Rc::new(MemoryStore::default());
        let session = Session::new(store.clone());
        session.store_login("abc", "Owner", &json!({}));
        let navigator = RecordingNavigator::default();

        logout(&session, &navigator);

        for key in SESSION_KEYS {
            assert!(store.get(key).is_none(), "{} should be cleared", key);
        }
        assert_eq!(*navigator.visited.borrow(), vec!["/login".to_string()]);
    }
}
