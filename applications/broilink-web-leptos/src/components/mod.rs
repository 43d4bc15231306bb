//! Pages per role and the widgets they share

pub mod admin;
pub mod common;
pub mod layout;
pub mod login;
pub mod owner;
pub mod peternak;
pub mod profile;

pub use admin::{AdminDashboard, FarmConfigPage};
pub use layout::RoleLayout;
pub use login::Login;
pub use owner::{Analytics, Monitoring, OwnerDashboard};
pub use peternak::{PeternakDashboard, ReportEntry};
pub use profile::ProfilePage;
