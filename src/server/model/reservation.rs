//! Reservation and waiting list domain models and parameters.
//!
//! A reservation books a slot key, the `(date, time slot, theme)` triple. Requests
//! for a slot key that is already booked become waiters, queued by submission time
//! with the waiter id as tie-break.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::{
    model::reservation::{
        BookingDto, CreateReservationDto, MyReservationDto, ReservationDto,
        ReservationSearchQuery, WaiterDto,
    },
    server::model::{
        member::Member,
        payment::{PaymentInfo, PaymentRequest},
        theme::Theme,
        time_slot::TimeSlot,
    },
};

/// The unit that can be booked at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub date: NaiveDate,
    pub time_slot_id: i32,
    pub theme_id: i32,
}

/// A confirmed booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub slot_key: SlotKey,
    pub member_id: i32,
    pub payment: PaymentInfo,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            slot_key: SlotKey {
                date: entity.date,
                time_slot_id: entity.time_slot_id,
                theme_id: entity.theme_id,
            },
            member_id: entity.member_id,
            payment: PaymentInfo {
                payment_key: entity.payment_key,
                order_id: entity.order_id,
                amount: entity.amount,
            },
        }
    }
}

/// A queued request for a booked slot key.
#[derive(Debug, Clone, PartialEq)]
pub struct Waiter {
    pub id: i32,
    pub slot_key: SlotKey,
    pub member_id: i32,
    /// Authorization to confirm once the waiter is promoted.
    pub payment: PaymentRequest,
    pub created_at: DateTime<Utc>,
}

impl Waiter {
    pub fn from_entity(entity: entity::waiting::Model) -> Self {
        Self {
            id: entity.id,
            slot_key: SlotKey {
                date: entity.date,
                time_slot_id: entity.time_slot_id,
                theme_id: entity.theme_id,
            },
            member_id: entity.member_id,
            payment: PaymentRequest {
                payment_key: entity.payment_key,
                order_id: entity.order_id,
                amount: entity.amount,
            },
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a reservation row.
#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub slot_key: SlotKey,
    pub member_id: i32,
    pub payment: PaymentInfo,
}

/// Parameters for enqueueing a waiter.
#[derive(Debug, Clone)]
pub struct CreateWaiterParam {
    pub slot_key: SlotKey,
    pub member_id: i32,
    pub payment: PaymentRequest,
    pub created_at: DateTime<Utc>,
}

/// A member's request to book a slot key.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub member_id: i32,
    pub slot_key: SlotKey,
    pub payment: PaymentRequest,
}

impl BookingRequest {
    pub fn from_dto(member_id: i32, dto: CreateReservationDto) -> Self {
        Self {
            member_id,
            slot_key: SlotKey {
                date: dto.date,
                time_slot_id: dto.time_id,
                theme_id: dto.theme_id,
            },
            payment: PaymentRequest {
                payment_key: dto.payment_key,
                order_id: dto.order_id,
                amount: dto.amount,
            },
        }
    }
}

/// What a booking request turned into.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// Slot was free; payment confirmed and reservation stored.
    Booked(Reservation),
    /// Slot was taken; request queued at a 1-based position.
    Waiting { waiter: Waiter, position: u64 },
}

impl BookingOutcome {
    pub fn into_dto(self) -> BookingDto {
        match self {
            BookingOutcome::Booked(reservation) => BookingDto::Booked {
                id: reservation.id,
                date: reservation.slot_key.date,
                time_id: reservation.slot_key.time_slot_id,
                theme_id: reservation.slot_key.theme_id,
                payment_key: reservation.payment.payment_key,
                amount: reservation.payment.amount,
            },
            BookingOutcome::Waiting { waiter, position } => BookingDto::Waiting {
                id: waiter.id,
                date: waiter.slot_key.date,
                time_id: waiter.slot_key.time_slot_id,
                theme_id: waiter.slot_key.theme_id,
                position,
            },
        }
    }
}

/// A reservation with its member, time slot and theme loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDetail {
    pub id: i32,
    pub date: NaiveDate,
    pub member: Member,
    pub time_slot: TimeSlot,
    pub theme: Theme,
    pub payment: PaymentInfo,
}

impl ReservationDetail {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            date: self.date,
            member: self.member.into_dto(),
            time: self.time_slot.into_dto(),
            theme: self.theme.into_dto(),
        }
    }
}

/// A waiter with its member, time slot and theme loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct WaiterDetail {
    pub id: i32,
    pub date: NaiveDate,
    pub member: Member,
    pub time_slot: TimeSlot,
    pub theme: Theme,
    pub created_at: DateTime<Utc>,
}

impl WaiterDetail {
    pub fn into_dto(self) -> WaiterDto {
        WaiterDto {
            id: self.id,
            date: self.date,
            member: self.member.into_dto(),
            time: self.time_slot.into_dto(),
            theme: self.theme.into_dto(),
            created_at: self.created_at,
        }
    }
}

/// State of one of a member's own requests.
#[derive(Debug, Clone, PartialEq)]
pub enum MyReservationStatus {
    Booked(PaymentInfo),
    Waiting { position: u64 },
}

/// One entry of a member's reservation history.
#[derive(Debug, Clone, PartialEq)]
pub struct MyReservation {
    /// Reservation id when booked, waiter id when waiting.
    pub id: i32,
    pub theme_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: MyReservationStatus,
}

impl MyReservation {
    pub fn into_dto(self) -> MyReservationDto {
        let (status, position, payment_key, amount) = match self.status {
            MyReservationStatus::Booked(payment) => (
                "booked",
                None,
                Some(payment.payment_key),
                Some(payment.amount),
            ),
            MyReservationStatus::Waiting { position } => ("waiting", Some(position), None, None),
        };

        MyReservationDto {
            id: self.id,
            theme_name: self.theme_name,
            date: self.date,
            time: self.time,
            status: status.to_string(),
            position,
            payment_key,
            amount,
        }
    }
}

/// Admin search over the ledger; unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationFilter {
    pub theme_id: Option<i32>,
    pub member_id: Option<i32>,
    /// Inclusive lower bound.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub date_to: Option<NaiveDate>,
}

impl ReservationFilter {
    pub fn from_query(query: ReservationSearchQuery) -> Self {
        Self {
            theme_id: query.theme_id,
            member_id: query.member_id,
            date_from: query.date_from,
            date_to: query.date_to,
        }
    }
}
