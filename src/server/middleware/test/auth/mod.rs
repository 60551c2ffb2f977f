use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
    model::member::Role,
};
use entity::prelude::Member;
use test_utils::{builder::TestBuilder, factory};

mod require;
