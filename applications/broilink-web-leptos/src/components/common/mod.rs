mod alert;
mod comparison_chart;
mod error_banner;
mod label_select;
mod modal;
mod sensor_cards;

pub use alert::alert;
pub use comparison_chart::ComparisonChartView;
pub use error_banner::ErrorBanner;
pub use label_select::{LabelSelect, OptionalSelect, NONE_LABEL};
pub use modal::{ConfirmModal, SuccessModal};
pub use sensor_cards::SensorCards;
