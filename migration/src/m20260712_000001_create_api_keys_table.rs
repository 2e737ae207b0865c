use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApiKey::ApiKeys)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApiKey::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ApiKey::Name).string().not_null())
                    .col(ColumnDef::new(ApiKey::Key).string().not_null().unique_key())
                    .col(ColumnDef::new(ApiKey::MonthlyLimit).big_integer())
                    .col(
                        ColumnDef::new(ApiKey::Usage)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ApiKey::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApiKey::ApiKeys).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ApiKey {
    ApiKeys,
    Id,
    Name,
    Key,
    MonthlyLimit,
    Usage,
    CreatedAt,
}
