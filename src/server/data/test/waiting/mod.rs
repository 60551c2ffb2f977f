use crate::server::{
    data::waiting::WaitingRepository,
    model::reservation::{SlotKey, Waiter},
};
use chrono::{Duration, Local, NaiveDate, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_slot_dependencies, waiting::WaitingFactory},
};

mod position_of;

fn tomorrow() -> NaiveDate {
    Local::now().date_naive() + Duration::days(1)
}
