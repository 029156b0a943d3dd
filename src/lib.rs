//! Núcleo de administración de flota
//!
//! Estados temporales de documentos y pólizas, y reglas de consistencia
//! entre vehículos, conductores, viajes y mantenimientos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
