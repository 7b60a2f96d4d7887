mod auth;
mod dashboard;
mod detail;
mod edit;
mod home;
mod list;
mod not_found;

pub use auth::{AuthMode, AuthScreen};
pub use dashboard::DashboardScreen;
pub use detail::DetailScreen;
pub use edit::EditScreen;
pub use home::HomeScreen;
pub use list::ListScreen;
pub use not_found::NotFoundScreen;
