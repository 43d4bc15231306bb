mod analytics;
mod dashboard;
mod monitoring;
mod request_modal;

pub use analytics::Analytics;
pub use dashboard::OwnerDashboard;
pub use monitoring::Monitoring;
