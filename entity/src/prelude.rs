pub use super::client::Entity as Client;
pub use super::invoice::Entity as Invoice;
pub use super::reservation::Entity as Reservation;
pub use super::room::Entity as Room;
