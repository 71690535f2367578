use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250110_000001_create_room_table::Room, m20250110_000002_create_client_table::Client,
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
                    .col(string_uniq(Reservation::ReservationNumber))
                    .col(integer(Reservation::ClientId))
                    .col(date(Reservation::ArrivalDate))
                    .col(date(Reservation::DepartureDate))
                    .col(integer(Reservation::PartySize))
                    .col(string(Reservation::RoomType))
                    .col(string(Reservation::Channel))
                    .col(string(Reservation::Status))
                    .col(integer_null(Reservation::RoomId))
                    .col(timestamp_null(Reservation::AllocatedAt))
                    .col(
                        timestamp(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_client_id")
                            .from(Reservation::Table, Reservation::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            // Rooms may be hard-deleted by the admin CRUD;
                            // reservation history must survive that.
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_status_channel")
                    .table(Reservation::Table)
                    .col(Reservation::Status)
                    .col(Reservation::Channel)
                    .to_owned(),
            )
            .await?;

        // Conflict probe: assigned room + date window.
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_room_dates")
                    .table(Reservation::Table)
                    .col(Reservation::RoomId)
                    .col(Reservation::ArrivalDate)
                    .col(Reservation::DepartureDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_type_dates")
                    .table(Reservation::Table)
                    .col(Reservation::RoomType)
                    .col(Reservation::ArrivalDate)
                    .col(Reservation::DepartureDate)
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
    ReservationNumber,
    ClientId,
    ArrivalDate,
    DepartureDate,
    PartySize,
    RoomType,
    Channel,
    Status,
    RoomId,
    AllocatedAt,
    CreatedAt,
}
