#![cfg_attr(test, allow(dead_code))]

pub mod config;
pub mod dto;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
