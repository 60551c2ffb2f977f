use crate::server::data::time_slot::TimeSlotRepository;
use chrono::NaiveTime;
use entity::prelude::TimeSlot;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
