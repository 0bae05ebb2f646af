pub mod api;
pub mod client;
pub mod config_store;
pub mod event_bus;
pub mod ports;


pub use client::SessionClient;
