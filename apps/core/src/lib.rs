pub mod config;
pub mod contract;
pub mod inventory;
pub mod launcher;
pub mod logging;
pub mod model;
pub mod parser;
pub mod provider;
pub mod runtime;
pub mod transport;
