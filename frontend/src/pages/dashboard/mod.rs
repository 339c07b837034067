pub mod components;
pub mod forms;
pub mod layout;
pub mod panel;
pub mod repository;
pub mod schema;
pub mod table;
pub mod utils;
pub mod view_model;

pub use panel::DashboardPage;
