pub mod admin_dashboard;
pub mod admin_login;
pub mod logical;
pub mod personality;
pub mod result;
pub mod transition;
pub mod welcome;
