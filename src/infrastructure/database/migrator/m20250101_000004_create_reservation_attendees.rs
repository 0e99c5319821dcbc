//! Create reservation_attendees junction table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_users::Users;
use super::m20250101_000003_create_reservations::Reservations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservationAttendees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReservationAttendees::ReservationId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReservationAttendees::UserId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ReservationAttendees::ReservationId)
                            .col(ReservationAttendees::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_attendees_reservation")
                            .from(
                                ReservationAttendees::Table,
                                ReservationAttendees::ReservationId,
                            )
                            .to(Reservations::Table, Reservations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_attendees_user")
                            .from(ReservationAttendees::Table, ReservationAttendees::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_attendees_user")
                    .table(ReservationAttendees::Table)
                    .col(ReservationAttendees::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationAttendees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ReservationAttendees {
    Table,
    ReservationId,
    UserId,
}
