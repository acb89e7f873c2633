//! Core trait definitions.

mod data_source;
mod notifier;
mod strategy;

pub use data_source::DataSource;
pub use notifier::Notifier;
pub use strategy::Strategy;
