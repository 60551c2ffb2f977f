use crate::server::{data::theme::ThemeRepository, model::theme::CreateThemeParam};
use entity::prelude::Theme;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
