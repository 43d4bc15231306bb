pub mod admin;
pub mod auth;
pub mod farm;
pub mod lenient;
pub mod owner;
pub mod peternak;
pub mod profile;
pub mod series;

pub use admin::{config_payload, ConfigField, ConfigSection, CsvImportReport, FarmConfig, FarmWorker, CONFIG_SECTIONS};
pub use auth::{Credentials, LoginResponse, LoginUser};
pub use farm::{CurrentSensor, Farm, FarmSlot, FarmStatus, SensorSnapshot};
pub use owner::{
    Activity, ActivityEntry, AnalyticsData, MonitoringData, OwnerDashboard, OwnerRequest, RequestType,
};
pub use peternak::{DailyReport, PeternakDashboard, ReportSummary};
pub use profile::{OtpRequest, OtpVerification, PhotoUploaded, Profile, ProfileUpdate};
pub use series::SeriesRow;
