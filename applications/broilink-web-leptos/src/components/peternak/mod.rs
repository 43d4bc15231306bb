mod dashboard;
mod report_form;

pub use dashboard::PeternakDashboard;
pub use report_form::ReportEntry;
