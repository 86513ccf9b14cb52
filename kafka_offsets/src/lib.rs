pub mod broker;
pub mod connection_settings;
pub mod consumer;
pub mod error;
pub mod group;
pub mod queries;
pub mod snapshot;
pub mod sources;
