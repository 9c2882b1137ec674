use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `applications` table and its columns.
#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    GigId,
    ApplicantUserId,
    Status,
    CoverLetter,
    PortfolioLinks,
    ResumeUrl,
    PortfolioFiles,
    Notes,
    AppliedAt,
}

#[derive(DeriveIden)]
enum Gigs {
    Table,
    Id,
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
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::GigId).uuid().not_null())
                    .col(
                        ColumnDef::new(Applications::ApplicantUserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Applications::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Applications::CoverLetter).text())
                    .col(ColumnDef::new(Applications::PortfolioLinks).json_binary())
                    .col(ColumnDef::new(Applications::ResumeUrl).string())
                    .col(ColumnDef::new(Applications::PortfolioFiles).json_binary())
                    .col(ColumnDef::new(Applications::Notes).text())
                    .col(
                        ColumnDef::new(Applications::AppliedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_gig_id")
                            .from(Applications::Table, Applications::GigId)
                            .to(Gigs::Table, Gigs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_applicant_user_id")
                            .from(Applications::Table, Applications::ApplicantUserId)
                            .to(UserProfiles::Table, UserProfiles::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One application per applicant per gig.
        manager
            .create_index(
                Index::create()
                    .name("idx_applications_gig_applicant_unique")
                    .table(Applications::Table)
                    .col(Applications::GigId)
                    .col(Applications::ApplicantUserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await
    }
}
