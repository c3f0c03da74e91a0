pub mod app_state;
pub mod config;
pub mod constants;
pub mod errors;
pub mod exporters;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod services;

#[cfg(test)]
pub mod test_utils;
