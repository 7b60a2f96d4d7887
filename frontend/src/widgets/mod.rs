mod app_shell;
mod banner;
mod cart_table;
mod confirm_modal;
mod data_table;
mod field_input;
mod filter_bar;
mod gradient_background;
mod gradient_card;

pub use app_shell::AppShell;
pub use banner::SubmitBanner;
pub use cart_table::CartTable;
pub use confirm_modal::ConfirmModal;
pub use data_table::DataTable;
pub use field_input::FieldInput;
pub use filter_bar::FilterBar;
pub use gradient_background::GradientBackground;
pub use gradient_card::GradientCard;
