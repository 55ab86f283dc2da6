pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod message;
pub mod render;
pub mod routes;
pub mod services;
pub mod state;
pub mod view;
