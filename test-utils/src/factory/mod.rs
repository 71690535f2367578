//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with
//! sensible defaults, reducing boilerplate in tests. Factories automatically
//! handle foreign key relationships, making tests more concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let room = factory::room::create_room(&db).await?;
//!     let client = factory::client::create_client(&db).await?;
//!
//!     // Create a reservation with its client in one call
//!     let (client, reservation) =
//!         factory::helpers::create_reservation_with_client(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let room = factory::room::RoomFactory::new(&db)
//!     .number("101")
//!     .room_type(RoomType::Double)
//!     .capacity(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `room` - Create room entities
//! - `client` - Create client entities
//! - `reservation` - Create reservation entities
//! - `invoice` - Create invoice entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod client;
pub mod helpers;
pub mod invoice;
pub mod reservation;
pub mod room;

// Re-export commonly used factory functions for concise usage
pub use client::create_client;
pub use invoice::create_invoice;
pub use reservation::create_reservation;
pub use room::create_room;
