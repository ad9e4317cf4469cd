use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TravelItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TravelItems::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TravelItems::ItemName).string().not_null())
                    .col(
                        ColumnDef::new(TravelItems::DestinationCity)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TravelItems::IsPacked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(TravelItems::ImagePath).string().null())
                    .col(ColumnDef::new(TravelItems::UserId).string().not_null())
                    .col(
                        ColumnDef::new(TravelItems::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_travel_items_user_id")
                            .from(TravelItems::Table, TravelItems::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_travel_items_user_id")
                    .table(TravelItems::Table)
                    .col(TravelItems::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TravelItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TravelItems {
    Table,
    Id,
    ItemName,
    DestinationCity,
    IsPacked,
    ImagePath,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
