pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_profiles_table;
mod m20250601_000002_create_gigs_table;
mod m20250601_000003_create_gig_dates_and_locations;
mod m20250601_000004_create_applications_table;
mod m20250601_000005_create_applicant_skills_table;
mod m20250605_000001_create_crew_availability_table;
mod m20250605_000002_create_crew_contacts_table;
mod m20250610_000001_create_referrals_table;
mod m20250610_000002_create_notifications_table;
mod m20250615_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_profiles_table::Migration),
            Box::new(m20250601_000002_create_gigs_table::Migration),
            Box::new(m20250601_000003_create_gig_dates_and_locations::Migration),
            Box::new(m20250601_000004_create_applications_table::Migration),
            Box::new(m20250601_000005_create_applicant_skills_table::Migration),
            Box::new(m20250605_000001_create_crew_availability_table::Migration),
            Box::new(m20250605_000002_create_crew_contacts_table::Migration),
            Box::new(m20250610_000001_create_referrals_table::Migration),
            Box::new(m20250610_000002_create_notifications_table::Migration),
            Box::new(m20250615_000001_add_indexes::Migration),
        ]
    }
}
