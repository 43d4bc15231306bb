use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of a successful `POST /login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub user: LoginUser,
    pub token: String,
}

/// Logged-in user; fields beyond the role are kept for the session cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUser {
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoginUser {
    /// Name shown in the navbar: `name`, then `username`, then the role
    pub fn display_name(&self) -> String {
        ["name", "username"]
            .iter()
            .find_map(|key| self.extra.get(*key).and_then(Value::as_str))
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.role)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_keeps_user_fields() {
        let response: LoginResponse = serde_json::from_value(json!({
            "data": {
                "user": {"role": "Owner", "name": "Sari", "id": 3},
                "token": "abc"
            }
        }))
        .unwrap();

        let user = response.data.user;
        assert_eq!(user.role, "Owner");
        assert_eq!(user.display_name(), "Sari");
        assert_eq!(serde_json::to_value(&user).unwrap()["id"], json!(3));
    }

    #[test]
    fn test_display_name_falls_back() {
        let user: LoginUser =
            serde_json::from_value(json!({"role": "Peternak", "username": "budi"})).unwrap();
        assert_eq!(user.display_name(), "budi");

        let user: LoginUser = serde_json::from_value(json!({"role": "Admin", "name": ""})).unwrap();
        assert_eq!(user.display_name(), "Admin");
    }
}
