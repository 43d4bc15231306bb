mod csv_upload;
mod dashboard;
mod farm_config;

pub use dashboard::AdminDashboard;
pub use farm_config::FarmConfigPage;
