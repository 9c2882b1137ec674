use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum CrewContacts {
    Table,
    Id,
    GigId,
    UserId,
    Department,
    Role,
    Company,
    Phone,
    Email,
    CreatedAt,
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
                    .table(CrewContacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrewContacts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CrewContacts::GigId).uuid().not_null())
                    .col(ColumnDef::new(CrewContacts::UserId).uuid().not_null())
                    .col(ColumnDef::new(CrewContacts::Department).string().not_null())
                    .col(ColumnDef::new(CrewContacts::Role).string().not_null())
                    .col(ColumnDef::new(CrewContacts::Company).string())
                    .col(ColumnDef::new(CrewContacts::Phone).string())
                    .col(ColumnDef::new(CrewContacts::Email).string())
                    .col(
                        ColumnDef::new(CrewContacts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crew_contacts_gig_id")
                            .from(CrewContacts::Table, CrewContacts::GigId)
                            .to(Gigs::Table, Gigs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crew_contacts_user_id")
                            .from(CrewContacts::Table, CrewContacts::UserId)
                            .to(UserProfiles::Table, UserProfiles::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One contact per department per gig.
        manager
            .create_index(
                Index::create()
                    .name("idx_crew_contacts_gig_department_unique")
                    .table(CrewContacts::Table)
                    .col(CrewContacts::GigId)
                    .col(CrewContacts::Department)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CrewContacts::Table).to_owned())
            .await
    }
}
