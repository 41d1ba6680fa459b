pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod models;
pub mod security;
pub mod services;
pub mod state;
pub mod store;
pub mod view;
