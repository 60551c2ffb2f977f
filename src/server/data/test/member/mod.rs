use crate::server::{
    data::member::MemberRepository,
    model::member::{CreateMemberParam, Role},
};
use entity::prelude::Member;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_with_password_by_email;
