use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `user_profiles` table and its columns.
#[derive(DeriveIden)]
enum UserProfiles {
    Table,
    UserId,
    FirstName,
    Surname,
    AliasFirstName,
    AliasSurname,
    Phone,
    Bio,
    ProfilePhotoUrl,
    BannerUrl,
    Country,
    City,
    IsProfileComplete,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserProfiles::FirstName).string())
                    .col(ColumnDef::new(UserProfiles::Surname).string())
                    .col(ColumnDef::new(UserProfiles::AliasFirstName).string())
                    .col(ColumnDef::new(UserProfiles::AliasSurname).string())
                    .col(ColumnDef::new(UserProfiles::Phone).string())
                    .col(ColumnDef::new(UserProfiles::Bio).text())
                    .col(ColumnDef::new(UserProfiles::ProfilePhotoUrl).string())
                    .col(ColumnDef::new(UserProfiles::BannerUrl).string())
                    .col(ColumnDef::new(UserProfiles::Country).string())
                    .col(ColumnDef::new(UserProfiles::City).string())
                    .col(
                        ColumnDef::new(UserProfiles::IsProfileComplete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserProfiles::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await
    }
}
