use serde::{Deserialize, Serialize};

/// Profile of the logged-in owner or farm worker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub farm_assigned: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

impl Profile {
    pub fn name_or_dash(&self) -> String {
        non_empty_or_dash(&self.name)
    }

    pub fn owner_or_dash(&self) -> String {
        non_empty_or_dash(&self.owner_name)
    }

    pub fn farm_or_dash(&self) -> String {
        non_empty_or_dash(&self.farm_assigned)
    }
}

fn non_empty_or_dash(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_string()
}

/// Profile fields a user may change directly
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRequest {
    pub new_phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpVerification {
    pub otp: String,
    pub new_phone_number: String,
}

/// Response of the profile photo upload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoUploaded {
    #[serde(default)]
    pub profile_pic: Option<String>,
}
