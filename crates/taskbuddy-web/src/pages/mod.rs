//! Page components

mod dashboard;
mod profile;

pub use dashboard::DashboardPage;
pub use profile::ProfilePage;
