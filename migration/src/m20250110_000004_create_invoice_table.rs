use sea_orm_migration::{prelude::*, schema::*};

use super::m20250110_000003_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoice::Id))
                    .col(string_uniq(Invoice::InvoiceNumber))
                    // One invoice per reservation, enforced by the schema.
                    .col(integer_uniq(Invoice::ReservationId))
                    .col(integer(Invoice::Nights))
                    .col(decimal(Invoice::NightlyPrice))
                    .col(decimal(Invoice::Total))
                    .col(timestamp(Invoice::InvoiceDate))
                    .col(
                        timestamp(Invoice::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_reservation_id")
                            .from(Invoice::Table, Invoice::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invoice_date")
                    .table(Invoice::Table)
                    .col(Invoice::InvoiceDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invoice {
    Table,
    Id,
    InvoiceNumber,
    ReservationId,
    Nights,
    NightlyPrice,
    Total,
    InvoiceDate,
    CreatedAt,
}
