//! Repository for the `reservations` table.
//!
//! [`ReservationRepo::admit`] is the only insert path. It aggregates the
//! day's committed guests and inserts the new row inside one transaction that
//! holds a per-day advisory lock, so concurrent requests for the same day are
//! decided one at a time.

use sqlx::{PgExecutor, PgPool};
use venue_core::admission::{AdmissionPolicy, DayBucket, ADMISSION_LOCK_NAMESPACE};
use venue_core::reservation::ReservationStatus;
use venue_core::types::DbId;

use crate::models::reservation::{CreateReservation, Reservation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, guests, date, status, pack_id, created_at, updated_at";

/// Result of an admission attempt.
#[derive(Debug)]
pub enum Admission {
    /// The reservation fit and was inserted as `PENDING`.
    Admitted(Reservation),
    /// The day could not hold the party. Nothing was written.
    Rejected {
        /// Guests already committed to the day when the check ran.
        booked: i64,
        /// `capacity - booked`; zero or negative when the day is full.
        remaining: i64,
    },
}

/// Provides admission, listing and status updates for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a reservation if its calendar day still has room for it.
    ///
    /// `bucket` is the venue day containing `input.date`, as returned by
    /// [`AdmissionPolicy::day_of`]. The aggregate and the insert share a
    /// transaction that first takes
    /// `pg_advisory_xact_lock(ADMISSION_LOCK_NAMESPACE, day)`. The lock is
    /// released on commit or rollback.
    pub async fn admit(
        pool: &PgPool,
        input: &CreateReservation,
        bucket: &DayBucket,
        policy: &AdmissionPolicy,
    ) -> Result<Admission, sqlx::Error> {
        debug_assert!(bucket.contains(input.date));
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1, $2)")
            .bind(ADMISSION_LOCK_NAMESPACE)
            .bind(bucket.lock_key())
            .execute(&mut *tx)
            .await?;

        let booked = Self::booked_guests(&mut *tx, bucket).await?;

        if policy.check(booked, input.guests).is_err() {
            tx.rollback().await?;
            let remaining = policy.remaining(booked);
            tracing::info!(
                date = %bucket.date,
                booked,
                requested = input.guests,
                remaining,
                "Reservation rejected: daily capacity reached",
            );
            return Ok(Admission::Rejected { booked, remaining });
        }

        let query = format!(
            "INSERT INTO reservations (name, email, phone, guests, date, status, pack_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let reservation = sqlx::query_as::<_, Reservation>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.guests)
            .bind(input.date)
            .bind(ReservationStatus::Pending.as_str())
            .bind(input.pack_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            reservation_id = reservation.id,
            date = %bucket.date,
            booked_after = booked + i64::from(reservation.guests),
            "Reservation admitted",
        );
        Ok(Admission::Admitted(reservation))
    }

    /// Sum of guests on non-cancelled reservations within `bucket`.
    pub async fn booked_guests<'e, E>(executor: E, bucket: &DayBucket) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let row: (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(guests), 0)::BIGINT FROM reservations \
             WHERE date >= $1 AND date < $2 AND status <> $3",
        )
        .bind(bucket.start)
        .bind(bucket.end)
        .bind(ReservationStatus::Cancelled.as_str())
        .fetch_one(executor)
        .await?;
        Ok(row.0)
    }

    /// Find a reservation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reservations, newest submission first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Reservation>(&query).fetch_all(pool).await
    }

    /// Overwrite a reservation's status.
    ///
    /// Capacity is not re-checked. Returns `None` if no row with `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ReservationStatus,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "UPDATE reservations SET status = $2 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
