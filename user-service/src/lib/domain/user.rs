pub mod errors;
pub mod models;
pub mod policy;
pub mod ports;
pub mod seed;
pub mod service;
