use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Gigs {
    Table,
    Status,
    CreatedBy,
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    ApplicantUserId,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    UserId,
    IsRead,
}

#[derive(DeriveIden)]
enum Referrals {
    Table,
    ReferredUserId,
    ReferrerUserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on gigs.status for the listing filter
        manager
            .create_index(
                Index::create()
                    .name("idx_gigs_status")
                    .table(Gigs::Table)
                    .col(Gigs::Status)
                    .to_owned(),
            )
            .await?;

        // Index on gigs.created_by for ownership lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_gigs_created_by")
                    .table(Gigs::Table)
                    .col(Gigs::CreatedBy)
                    .to_owned(),
            )
            .await?;

        // Index on applications.applicant_user_id for my-applications
        manager
            .create_index(
                Index::create()
                    .name("idx_applications_applicant_user_id")
                    .table(Applications::Table)
                    .col(Applications::ApplicantUserId)
                    .to_owned(),
            )
            .await?;

        // Index on notifications (user_id, is_read) for the unread filter
        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_user_read")
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .col(Notifications::IsRead)
                    .to_owned(),
            )
            .await?;

        // Indexes on both referral sides for the either-side listing
        manager
            .create_index(
                Index::create()
                    .name("idx_referrals_referred_user_id")
                    .table(Referrals::Table)
                    .col(Referrals::ReferredUserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_referrals_referrer_user_id")
                    .table(Referrals::Table)
                    .col(Referrals::ReferrerUserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_gigs_status").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_gigs_created_by").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_applications_applicant_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_notifications_user_read").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_referrals_referred_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_referrals_referrer_user_id")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
