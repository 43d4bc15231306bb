use serde::Deserialize;
use serde_json::Value;

use super::client::{ApiClient, ApiError, ApiMessage, Envelope};
use crate::models::{config_payload, CsvImportReport, Farm, FarmConfig, FarmWorker};

/// Farm list, sent either as `{farms: [...]}` or as the bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FarmList {
    Named { farms: Vec<Farm> },
    Bare(Vec<Farm>),
}

impl FarmList {
    fn into_farms(self) -> Vec<Farm> {
        match self {
            FarmList::Named { farms } | FarmList::Bare(farms) => farms,
        }
    }
}

impl ApiClient {
    pub async fn get_farms(&self) -> Result<Vec<Farm>, ApiError> {
        self.get::<Envelope<FarmList>>("/admin/farms")
            .await
            .map(|list| list.into_data().into_farms())
    }

    /// Farm configuration overlaid on `base`; fields the API leaves out keep their value
    pub async fn get_farm_config(&self, farm_id: i64, base: &FarmConfig) -> Result<FarmConfig, ApiError> {
        let payload = self
            .get::<Envelope<Value>>(&format!("/admin/farms/{}/config", farm_id))
            .await?
            .into_data();

        match config_payload(&payload) {
            Some(fields) => Ok(base.merged_with(fields)),
            None => Err(ApiError::Deserialization(
                "farm config is not an object".to_string(),
            )),
        }
    }

    pub async fn update_farm_config(&self, farm_id: i64, config: &FarmConfig) -> Result<ApiMessage, ApiError> {
        self.put(&format!("/admin/farms/{}/config", farm_id), config)
            .await
    }

    /// Restore the backend's default thresholds
    pub async fn reset_farm_config(&self, farm_id: i64) -> Result<ApiMessage, ApiError> {
        self.post(
            &format!("/admin/farms/{}/config/reset", farm_id),
            &serde_json::json!({}),
        )
        .await
    }

    /// Farm workers employed by an owner
    pub async fn get_farm_workers(&self, owner_id: i64) -> Result<Vec<FarmWorker>, ApiError> {
        self.get::<Envelope<Vec<FarmWorker>>>(&format!("/admin/owners/{}/peternaks", owner_id))
            .await
            .map(Envelope::into_data)
    }

    /// Import IoT readings from a CSV file (multipart field `file`)
    pub async fn upload_iot_csv(
        &self,
        farm_id: i64,
        file: &web_sys::File,
    ) -> Result<(CsvImportReport, Option<String>), ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Encoding(format!("{:?}", e)))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| ApiError::Encoding(format!("{:?}", e)))?;

        let envelope = self
            .post_form::<Envelope<CsvImportReport>>(&format!("/admin/farms/{}/iot-upload", farm_id), form)
            .await?;
        let message = envelope.message().map(str::to_string);
        Ok((envelope.into_data(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_farm_list_shapes() {
        let named: Envelope<FarmList> =
            serde_json::from_value(json!({"data": {"farms": [{"farm_id": 1}]}})).unwrap();
        assert_eq!(named.into_data().into_farms().len(), 1);

        let bare: Envelope<FarmList> =
            serde_json::from_value(json!([{"id": 2}, {"id": 3}])).unwrap();
        let farms = bare.into_data().into_farms();
        assert_eq!(farms[1].key(), Some(3));
    }

    #[test]
    fn test_upload_report_keeps_message() {
        let envelope: Envelope<CsvImportReport> = serde_json::from_value(json!({
            "message": "Upload selesai",
            "data": {"inserted": 8, "errors": ["Row 3: invalid timestamp"], "total_rows": 9}
        }))
        .unwrap();

        assert_eq!(envelope.message(), Some("Upload selesai"));
        let report = envelope.into_data();
        assert_eq!(report.inserted, Some(8.0));
        assert_eq!(report.errors.len(), 1);
    }
}
