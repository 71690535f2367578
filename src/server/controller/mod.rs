//! HTTP request handlers.
//!
//! Controllers check access once at the top through the auth guard, convert
//! wire DTOs into domain parameter types, call into the service or
//! repository layer, and render entity models back into DTOs.

pub mod client;
pub mod invoice;
pub mod reservation;
pub mod room;
