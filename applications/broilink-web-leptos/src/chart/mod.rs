//! Maps chart filters to backend fields and API rows to drawable series

mod axis;
mod compose;
mod metric;
mod series;
mod views;

pub use axis::*;
pub use compose::*;
pub use metric::*;
pub use series::*;
pub use views::*;
