use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum CrewAvailability {
    Table,
    Id,
    UserId,
    AvailabilityDate,
    IsAvailable,
    GigId,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserProfiles {
    Table,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CrewAvailability::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrewAvailability::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CrewAvailability::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(CrewAvailability::AvailabilityDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CrewAvailability::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(CrewAvailability::GigId).uuid())
                    .col(ColumnDef::new(CrewAvailability::Notes).text())
                    .col(
                        ColumnDef::new(CrewAvailability::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crew_availability_user_id")
                            .from(CrewAvailability::Table, CrewAvailability::UserId)
                            .to(UserProfiles::Table, UserProfiles::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The upsert target: one entry per user per calendar date.
        manager
            .create_index(
                Index::create()
                    .name("idx_crew_availability_user_date_unique")
                    .table(CrewAvailability::Table)
                    .col(CrewAvailability::UserId)
                    .col(CrewAvailability::AvailabilityDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CrewAvailability::Table).to_owned())
            .await
    }
}
