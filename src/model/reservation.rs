use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{member::MemberDto, theme::ThemeDto, time_slot::TimeSlotDto};

/// Body of `POST /reservations`.
///
/// The payment fields come from the client-side payment widget; the server
/// confirms them with the gateway when the slot is free, or stores them for
/// later confirmation when the request is queued.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationDto {
    pub date: NaiveDate,
    pub time_id: i32,
    pub theme_id: i32,
    pub payment_key: String,
    pub order_id: String,
    pub amount: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReservationDto {
    pub id: i32,
    pub date: NaiveDate,
    pub member: MemberDto,
    pub time: TimeSlotDto,
    pub theme: ThemeDto,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReservationsDto {
    pub reservations: Vec<ReservationDto>,
}

/// Result of a creation request: either booked or queued with a position.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BookingDto {
    Booked {
        id: i32,
        date: NaiveDate,
        #[serde(rename = "timeId")]
        time_id: i32,
        #[serde(rename = "themeId")]
        theme_id: i32,
        #[serde(rename = "paymentKey")]
        payment_key: String,
        amount: i64,
    },
    Waiting {
        id: i32,
        date: NaiveDate,
        #[serde(rename = "timeId")]
        time_id: i32,
        #[serde(rename = "themeId")]
        theme_id: i32,
        position: u64,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WaiterDto {
    pub id: i32,
    pub date: NaiveDate,
    pub member: MemberDto,
    pub time: TimeSlotDto,
    pub theme: ThemeDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WaitersDto {
    pub waiters: Vec<WaiterDto>,
}

/// Entry of `GET /reservations-mine`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MyReservationDto {
    pub id: i32,
    pub theme_name: String,
    pub date: NaiveDate,
    pub time: chrono::NaiveTime,
    /// `"booked"` or `"waiting"`.
    pub status: String,
    /// Queue position, only for waiting entries.
    pub position: Option<u64>,
    pub payment_key: Option<String>,
    pub amount: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MyReservationsDto {
    pub reservations: Vec<MyReservationDto>,
}

/// Admin search filters for `GET /reservations`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSearchQuery {
    pub theme_id: Option<i32>,
    pub member_id: Option<i32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}
