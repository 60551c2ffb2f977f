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
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(date(Reservation::Date))
                    .col(integer(Reservation::TimeSlotId))
                    .col(integer(Reservation::ThemeId))
                    .col(integer(Reservation::MemberId))
                    .col(string(Reservation::PaymentKey))
                    .col(string(Reservation::OrderId))
                    .col(big_integer(Reservation::Amount))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_time_slot_id")
                            .from(Reservation::Table, Reservation::TimeSlotId)
                            .to(TimeSlot::Table, TimeSlot::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_theme_id")
                            .from(Reservation::Table, Reservation::ThemeId)
                            .to(Theme::Table, Theme::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_member_id")
                            .from(Reservation::Table, Reservation::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_reservation_slot_key")
                    .table(Reservation::Table)
                    .col(Reservation::Date)
                    .col(Reservation::TimeSlotId)
                    .col(Reservation::ThemeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    Date,
    TimeSlotId,
    ThemeId,
    MemberId,
    PaymentKey,
    OrderId,
    Amount,
}
