pub use super::member::Entity as Member;
pub use super::reservation::Entity as Reservation;
pub use super::theme::Entity as Theme;
pub use super::time_slot::Entity as TimeSlot;
pub use super::waiting::Entity as Waiting;
