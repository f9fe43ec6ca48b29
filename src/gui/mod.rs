pub mod app;
pub mod chart;
pub mod error_modal;
pub mod loading_overlay;
pub mod login;
pub mod quote_list;
pub mod settings;

pub use app::VoteApp;
