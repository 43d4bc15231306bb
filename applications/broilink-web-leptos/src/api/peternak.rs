use super::client::{ApiClient, ApiError, ApiMessage, Envelope};
use crate::models::{
    DailyReport, OtpRequest, OtpVerification, PeternakDashboard, PhotoUploaded, Profile,
    ProfileUpdate,
};

impl ApiClient {
    /// Current readings and the 7-day report summary of the worker's farm
    pub async fn get_peternak_dashboard(&self) -> Result<PeternakDashboard, ApiError> {
        self.get::<Envelope<PeternakDashboard>>("/peternak/dashboard")
            .await
            .map(Envelope::into_data)
    }

    pub async fn submit_report(&self, report: &DailyReport) -> Result<ApiMessage, ApiError> {
        self.post("/peternak/reports", report).await
    }

    pub async fn get_peternak_profile(&self) -> Result<Profile, ApiError> {
        self.get::<Envelope<Profile>>("/peternak/profile")
            .await
            .map(Envelope::into_data)
    }

    /// Name and email only; the phone number changes through OTP
    pub async fn update_peternak_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        self.put::<Envelope<Profile>, _>("/peternak/profile", update)
            .await
            .map(Envelope::into_data)
    }

    /// Upload a jpg/png as multipart field `photo`
    pub async fn upload_profile_photo(&self, photo: &web_sys::File) -> Result<PhotoUploaded, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Encoding(format!("{:?}", e)))?;
        form.append_with_blob_and_filename("photo", photo, &photo.name())
            .map_err(|e| ApiError::Encoding(format!("{:?}", e)))?;

        self.post_form::<Envelope<PhotoUploaded>>("/peternak/profile/photo", form)
            .await
            .map(Envelope::into_data)
    }

    /// Send an OTP to the current number before switching to `new_phone_number`
    pub async fn send_otp(&self, new_phone_number: &str) -> Result<ApiMessage, ApiError> {
        let body = OtpRequest {
            new_phone_number: new_phone_number.to_string(),
        };
        self.post("/peternak/otp/send", &body).await
    }

    pub async fn verify_otp(&self, otp: &str, new_phone_number: &str) -> Result<ApiMessage, ApiError> {
        let body = OtpVerification {
            otp: otp.to_string(),
            new_phone_number: new_phone_number.to_string(),
        };
        self.post("/peternak/otp/verify", &body).await
    }
}
