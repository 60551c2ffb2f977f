//! Time slot domain models and parameters.

use chrono::NaiveTime;

use crate::model::time_slot::{AvailableTimeDto, TimeSlotDto};

/// A bookable time of day, shared by every theme and date.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    pub id: i32,
    pub time: NaiveTime,
}

impl TimeSlot {
    pub fn into_dto(self) -> TimeSlotDto {
        TimeSlotDto {
            id: self.id,
            time: self.time,
        }
    }

    pub fn from_entity(entity: entity::time_slot::Model) -> Self {
        Self {
            id: entity.id,
            time: entity.time,
        }
    }
}

/// A time slot annotated with whether a given theme is booked at it on a given date.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailableTime {
    pub time_slot: TimeSlot,
    pub booked: bool,
}

impl AvailableTime {
    pub fn into_dto(self) -> AvailableTimeDto {
        AvailableTimeDto {
            time_id: self.time_slot.id,
            start_at: self.time_slot.time,
            already_booked: self.booked,
        }
    }
}
