use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(string_uniq(Room::Number))
                    .col(string(Room::RoomType))
                    .col(integer(Room::Capacity))
                    .col(decimal(Room::NightlyPrice))
                    .col(string(Room::State))
                    .col(
                        timestamp(Room::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_type_capacity_state")
                    .table(Room::Table)
                    .col(Room::RoomType)
                    .col(Room::Capacity)
                    .col(Room::State)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    Number,
    RoomType,
    Capacity,
    NightlyPrice,
    State,
    CreatedAt,
}
