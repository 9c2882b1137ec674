use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ApplicantSkills {
    Table,
    Id,
    UserId,
    SkillName,
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
                    .table(ApplicantSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApplicantSkills::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ApplicantSkills::UserId).uuid().not_null())
                    .col(ColumnDef::new(ApplicantSkills::SkillName).string().not_null())
                    .col(
                        ColumnDef::new(ApplicantSkills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applicant_skills_user_id")
                            .from(ApplicantSkills::Table, ApplicantSkills::UserId)
                            .to(UserProfiles::Table, UserProfiles::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per skill name per user.
        manager
            .create_index(
                Index::create()
                    .name("idx_applicant_skills_user_skill_unique")
                    .table(ApplicantSkills::Table)
                    .col(ApplicantSkills::UserId)
                    .col(ApplicantSkills::SkillName)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApplicantSkills::Table).to_owned())
            .await
    }
}
