use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::gig_dates;
use crate::models::gig_locations;
use crate::models::gigs::{self, CreateGig, GigDateInput, GigWithDetails, LocationInput, UpdateGig};
use crate::models::applications;

/// Insert a gig and its child date/location rows in one transaction.
pub async fn create_gig(
    db: &DatabaseConnection,
    input: CreateGig,
    user_id: Uuid,
) -> Result<GigWithDetails, DbErr> {
    let txn = db.begin().await?;

    let gig = gigs::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        description: Set(input.description),
        qualifying_criteria: Set(input.qualifying_criteria),
        amount: Set(input.amount),
        currency: Set(input.currency.unwrap_or_else(|| "AED".to_string())),
        status: Set("active".to_string()),
        created_by: Set(user_id),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(&txn)
    .await?;

    if let Some(dates) = input.dates {
        insert_dates(&txn, gig.id, dates).await?;
    }
    if let Some(locations) = input.locations {
        insert_locations(&txn, gig.id, locations).await?;
    }

    txn.commit().await?;

    with_details(db, gig, false).await
}

/// Paginated listing filtered by status and optional case-insensitive
/// search over title/description. Returns the page plus the total count.
pub async fn list_gigs(
    db: &DatabaseConnection,
    page: u64,
    limit: u64,
    status: &str,
    search: Option<&str>,
) -> Result<(Vec<GigWithDetails>, u64), DbErr> {
    let mut query = gigs::Entity::find().filter(gigs::Column::Status.eq(status));

    if let Some(search) = search.filter(|s| !s.is_empty()) {
        let pattern = format!("%{search}%");
        query = query.filter(
            Condition::any()
                .add(Expr::col(gigs::Column::Title).ilike(pattern.clone()))
                .add(Expr::col(gigs::Column::Description).ilike(pattern)),
        );
    }

    let paginator = query
        .order_by_desc(gigs::Column::CreatedAt)
        .paginate(db, limit);
    let total = paginator.num_items().await?;
    let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

    let mut gigs_with_details = Vec::with_capacity(rows.len());
    for gig in rows {
        gigs_with_details.push(with_details(db, gig, true).await?);
    }

    Ok((gigs_with_details, total))
}

/// Fetch the bare gig row — used for ownership checks.
pub async fn get_gig_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<gigs::Model>, DbErr> {
    gigs::Entity::find_by_id(id).one(db).await
}

/// Fetch a gig with children and its application count.
pub async fn get_gig_with_details(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<GigWithDetails>, DbErr> {
    match gigs::Entity::find_by_id(id).one(db).await? {
        Some(gig) => with_details(db, gig, true).await.map(Some),
        None => Ok(None),
    }
}

/// Apply a partial update; provided `dates`/`locations` arrays replace the
/// existing child rows wholesale. Scalar and child writes share one
/// transaction.
pub async fn update_gig(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateGig,
) -> Result<Option<GigWithDetails>, DbErr> {
    let Some(gig) = gigs::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let txn = db.begin().await?;

    let mut active: gigs::ActiveModel = gig.into();
    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(criteria) = input.qualifying_criteria {
        active.qualifying_criteria = Set(criteria);
    }
    if let Some(amount) = input.amount {
        active.amount = Set(amount);
    }
    if let Some(currency) = input.currency {
        active.currency = Set(currency);
    }
    if let Some(status) = input.status {
        active.status = Set(status);
    }
    let gig = active.update(&txn).await?;

    if let Some(dates) = input.dates {
        gig_dates::Entity::delete_many()
            .filter(gig_dates::Column::GigId.eq(id))
            .exec(&txn)
            .await?;
        insert_dates(&txn, id, dates).await?;
    }
    if let Some(locations) = input.locations {
        gig_locations::Entity::delete_many()
            .filter(gig_locations::Column::GigId.eq(id))
            .exec(&txn)
            .await?;
        insert_locations(&txn, id, locations).await?;
    }

    txn.commit().await?;

    with_details(db, gig, false).await.map(Some)
}

/// Delete a gig by ID.
pub async fn delete_gig(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    gigs::Entity::delete_by_id(id).exec(db).await
}

/// Attach child rows (and optionally the application count) to a gig row.
pub async fn with_details(
    db: &DatabaseConnection,
    gig: gigs::Model,
    with_count: bool,
) -> Result<GigWithDetails, DbErr> {
    let dates = gig.find_related(gig_dates::Entity).all(db).await?;
    let locations = gig.find_related(gig_locations::Entity).all(db).await?;

    let applications_count = if with_count {
        Some(
            applications::Entity::find()
                .filter(applications::Column::GigId.eq(gig.id))
                .count(db)
                .await?,
        )
    } else {
        None
    };

    Ok(GigWithDetails {
        gig,
        gig_dates: dates,
        gig_locations: locations,
        applications_count,
    })
}

async fn insert_dates<C: ConnectionTrait>(
    conn: &C,
    gig_id: Uuid,
    dates: Vec<GigDateInput>,
) -> Result<(), DbErr> {
    if dates.is_empty() {
        return Ok(());
    }
    let records = dates.into_iter().map(|d| gig_dates::ActiveModel {
        id: Set(Uuid::new_v4()),
        gig_id: Set(gig_id),
        month: Set(d.month),
        days: Set(d.days),
    });
    gig_dates::Entity::insert_many(records).exec(conn).await?;
    Ok(())
}

async fn insert_locations<C: ConnectionTrait>(
    conn: &C,
    gig_id: Uuid,
    locations: Vec<LocationInput>,
) -> Result<(), DbErr> {
    if locations.is_empty() {
        return Ok(());
    }
    let records = locations.into_iter().map(|l| gig_locations::ActiveModel {
        id: Set(Uuid::new_v4()),
        gig_id: Set(gig_id),
        location_name: Set(l.into_name()),
    });
    gig_locations::Entity::insert_many(records)
        .exec(conn)
        .await?;
    Ok(())
}
