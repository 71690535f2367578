//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the hotel
//! operations system: API endpoints, business logic, data access, and
//! infrastructure services. The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Allocation engine, reservation lifecycle, numbering, invoicing
//! - **Data Layer** (`data/`) - Database repositories over the entity models
//! - **Model Layer** (`model/`) - Domain models, operation parameters, and the lifecycle transition table
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication guard and role checks
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token verifier)
//! - **Startup** (`startup`) - Database connection and migration runner
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! A typical staff request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes to the controller
//! 2. **Controller** verifies the bearer token and role, converts DTOs to params
//! 3. **Service** enforces lifecycle legality and orchestrates data operations
//! 4. **Data** queries the database and returns entity models
//! 5. **Controller** converts entity models to DTOs and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
