mod member;
mod reservation;
mod theme;
mod time_slot;
mod waiting;
