//! Wire DTOs exchanged with API clients.
//!
//! Enum-valued fields travel as their uppercase wire strings (`SINGLE`,
//! `PENDING`, `WALK_IN`, ...); controllers parse them into the entity enums
//! at the boundary and render them back through `from_entity` constructors.

pub mod api;
pub mod client;
pub mod invoice;
pub mod reservation;
pub mod room;
