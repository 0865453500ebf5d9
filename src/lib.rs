pub mod app;
pub mod data;
pub mod generator;
pub mod model;
pub mod session;
pub mod ui;

pub use app::QuizApp;
