use crate::server::{
    data::reservation::ReservationRepository,
    model::{
        payment::PaymentInfo,
        reservation::{CreateReservationParam, ReservationFilter, SlotKey},
    },
};
use chrono::{Duration, Local, NaiveDate};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_slot_dependencies};

mod create;
mod get_theme_ids_between;
mod search;

fn tomorrow() -> NaiveDate {
    Local::now().date_naive() + Duration::days(1)
}
