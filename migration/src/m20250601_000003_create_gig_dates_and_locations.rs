use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum GigDates {
    Table,
    Id,
    GigId,
    Month,
    Days,
}

#[derive(DeriveIden)]
enum GigLocations {
    Table,
    Id,
    GigId,
    LocationName,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Gigs {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GigDates::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GigDates::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(GigDates::GigId).uuid().not_null())
                    .col(ColumnDef::new(GigDates::Month).string().not_null())
                    .col(ColumnDef::new(GigDates::Days).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gig_dates_gig_id")
                            .from(GigDates::Table, GigDates::GigId)
                            .to(Gigs::Table, Gigs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GigLocations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GigLocations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GigLocations::GigId).uuid().not_null())
                    .col(ColumnDef::new(GigLocations::LocationName).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gig_locations_gig_id")
                            .from(GigLocations::Table, GigLocations::GigId)
                            .to(Gigs::Table, Gigs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GigLocations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GigDates::Table).to_owned())
            .await
    }
}
