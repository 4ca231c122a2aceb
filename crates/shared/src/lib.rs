pub mod abstract_trait;
pub mod domain;
pub mod errors;
pub mod model;
pub mod repository;
pub mod service;
pub mod testing;
pub mod utils;
pub mod config;
