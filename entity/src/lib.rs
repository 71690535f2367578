pub mod prelude;

pub mod client;
pub mod enums;
pub mod invoice;
pub mod reservation;
pub mod room;
