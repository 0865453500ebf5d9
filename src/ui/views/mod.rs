pub mod generating;
pub mod quiz;
pub mod setup;
pub mod summary;
