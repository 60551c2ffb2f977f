use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240501_000001_create_member_table::Member, m20240501_000002_create_theme_table::Theme,
    m20240501_000003_create_time_slot_table::TimeSlot,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Waiting::Table)
                    .if_not_exists()
                    .col(pk_auto(Waiting::Id))
                    .col(date(Waiting::Date))
                    .col(integer(Waiting::TimeSlotId))
                    .col(integer(Waiting::ThemeId))
                    .col(integer(Waiting::MemberId))
                    .col(string(Waiting::PaymentKey))
                    .col(string(Waiting::OrderId))
                    .col(big_integer(Waiting::Amount))
                    .col(
                        timestamp_with_time_zone(Waiting::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiting_time_slot_id")
                            .from(Waiting::Table, Waiting::TimeSlotId)
                            .to(TimeSlot::Table, TimeSlot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiting_theme_id")
                            .from(Waiting::Table, Waiting::ThemeId)
                            .to(Theme::Table, Theme::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiting_member_id")
                            .from(Waiting::Table, Waiting::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_waiting_member_slot_key")
                    .table(Waiting::Table)
                    .col(Waiting::Date)
                    .col(Waiting::TimeSlotId)
                    .col(Waiting::ThemeId)
                    .col(Waiting::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Waiting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Waiting {
    Table,
    Id,
    Date,
    TimeSlotId,
    ThemeId,
    MemberId,
    PaymentKey,
    OrderId,
    Amount,
    CreatedAt,
}
