pub mod api;
pub mod channels;
pub mod config;
pub mod data_models;
pub mod error;
pub mod format;
pub mod youtube;
