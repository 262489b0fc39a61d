pub mod api;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod model;
pub mod money;
pub mod payroll;
pub mod queries;
pub mod routes;
pub mod store;
pub mod utils;
