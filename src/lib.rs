//! Vehicles API
//!
//! Inventario de vehículos con enriquecimiento de precio y dirección en
//! lectura, más el microservicio de pricing que le da precios.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;
