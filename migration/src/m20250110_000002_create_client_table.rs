use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(pk_auto(Client::Id))
                    .col(string(Client::FullName))
                    .col(string(Client::Phone))
                    .col(string(Client::Email))
                    .col(string(Client::DocumentType))
                    .col(string(Client::DocumentNumber))
                    .col(
                        timestamp(Client::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Natural key: one client record per identity document.
        manager
            .create_index(
                Index::create()
                    .name("idx_client_document")
                    .table(Client::Table)
                    .col(Client::DocumentType)
                    .col(Client::DocumentNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Client {
    Table,
    Id,
    FullName,
    Phone,
    Email,
    DocumentType,
    DocumentNumber,
    CreatedAt,
}
