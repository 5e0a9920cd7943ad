pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;
