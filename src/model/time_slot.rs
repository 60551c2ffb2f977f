use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TimeSlotDto {
    pub id: i32,
    #[serde(rename = "startAt")]
    pub time: NaiveTime,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateTimeSlotDto {
    #[serde(rename = "startAt")]
    pub time: NaiveTime,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TimeSlotsDto {
    pub times: Vec<TimeSlotDto>,
}

/// Query for listing the slots of one theme on one date.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimesQuery {
    pub date: NaiveDate,
    pub theme_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimeDto {
    pub time_id: i32,
    pub start_at: NaiveTime,
    pub already_booked: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AvailableTimesDto {
    pub times: Vec<AvailableTimeDto>,
}
