use super::client::{ApiClient, ApiError, ApiMessage, Envelope};
use crate::models::{AnalyticsData, MonitoringData, OwnerDashboard, OwnerRequest, Profile, ProfileUpdate};

impl ApiClient {
    /// Farms, status and recent activity of the logged-in owner
    pub async fn get_owner_dashboard(&self) -> Result<OwnerDashboard, ApiError> {
        self.get::<Envelope<OwnerDashboard>>("/owner/dashboard")
            .await
            .map(Envelope::into_data)
    }

    /// Current readings plus sensor history; `period` is `1day`, `1week`, `1month` or `6months`
    pub async fn get_monitoring(&self, farm_id: i64, period: &str) -> Result<MonitoringData, ApiError> {
        self.get_query::<Envelope<MonitoringData>>(
            &format!("/owner/monitoring/{}", farm_id),
            &[("period", period)],
        )
        .await
        .map(Envelope::into_data)
    }

    /// Manual daily reports over `period`
    pub async fn get_analytics(&self, farm_id: i64, period: &str) -> Result<AnalyticsData, ApiError> {
        self.get_query::<Envelope<AnalyticsData>>(
            &format!("/owner/analytics/{}", farm_id),
            &[("period", period)],
        )
        .await
        .map(Envelope::into_data)
    }

    /// Farm data as CSV bytes
    pub async fn export_farm_csv(&self, farm_id: i64) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(&format!("/owner/export/{}", farm_id), &[("format", "csv")])
            .await
    }

    pub async fn submit_owner_request(&self, request: &OwnerRequest) -> Result<ApiMessage, ApiError> {
        self.post("/owner/requests", request).await
    }

    pub async fn get_owner_profile(&self) -> Result<Profile, ApiError> {
        self.get::<Envelope<Profile>>("/owner/profile")
            .await
            .map(Envelope::into_data)
    }

    pub async fn update_owner_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        self.put::<Envelope<Profile>, _>("/owner/profile", update)
            .await
            .map(Envelope::into_data)
    }
}

/// Name the browser saves an export under
pub fn export_file_name(farm_id: i64) -> String {
    format!("data-kandang-{}.csv", farm_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(3), "data-kandang-3.csv");
    }
}
