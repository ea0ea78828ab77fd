use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::athlete::{AthleteFilter, CreateAthleteRequest, UpdateAthleteRequest};
use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::Athlete;

const ATHLETE_COLUMNS: &str =
    "athlete_id, name, cpf, age, weight, height, sex, category, training_center, created_at";

/// Composes an optionally-filtered SELECT over the athletes table. Nothing is
/// executed here; callers decide whether to fetch rows or a count.
fn filtered_query<'q>(select: &str, filter: &'q AthleteFilter) -> QueryBuilder<'q, Postgres> {
    let mut builder = QueryBuilder::new(select);
    let mut prefix = " WHERE ";

    if let Some(name) = &filter.name {
        builder.push(prefix);
        builder.push("name ILIKE ");
        builder.push_bind(format!("%{name}%"));
        prefix = " AND ";
    }

    if let Some(cpf) = &filter.cpf {
        builder.push(prefix);
        builder.push("cpf = ");
        builder.push_bind(cpf.as_str());
    }

    builder
}

fn duplicate_cpf_message(cpf: &str) -> String {
    format!("An athlete is already registered with cpf: {cpf}")
}

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List athletes matching the filter, returning one page of rows plus the
    /// total count of matches.
    pub async fn list(
        &self,
        filter: &AthleteFilter,
        pagination: &PaginationParams,
    ) -> Result<(Vec<Athlete>, i64)> {
        let mut count_query = filtered_query("SELECT COUNT(*) FROM athletes", filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(self.pool)
            .await?;

        let select = format!("SELECT {ATHLETE_COLUMNS} FROM athletes");
        let mut query = filtered_query(&select, filter);
        query.push(" ORDER BY created_at, athlete_id");
        query.push(" LIMIT ");
        query.push_bind(i64::from(pagination.limit()));
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let athletes = query
            .build_query_as::<Athlete>()
            .fetch_all(self.pool)
            .await?;

        Ok((athletes, total))
    }

    /// Find an athlete by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let sql = format!("SELECT {ATHLETE_COLUMNS} FROM athletes WHERE athlete_id = $1");

        let athlete = sqlx::query_as::<_, Athlete>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Create a new athlete. The cpf uniqueness rule is enforced by the
    /// database; a unique violation is translated into a conflict naming the
    /// duplicated cpf, while every other failure propagates unchanged.
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let sql = format!(
            "INSERT INTO athletes (name, cpf, age, weight, height, sex, category, training_center) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {ATHLETE_COLUMNS}"
        );

        let athlete = sqlx::query_as::<_, Athlete>(&sql)
            .bind(&req.name)
            .bind(&req.cpf)
            .bind(req.age)
            .bind(req.weight)
            .bind(req.height)
            .bind(&req.sex)
            .bind(sqlx::types::Json(&req.category))
            .bind(sqlx::types::Json(&req.training_center))
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e {
                    if db_err.code().as_deref() == Some("23505") {
                        return StorageError::ConstraintViolation(duplicate_cpf_message(&req.cpf));
                    }
                }
                StorageError::from(e)
            })?;

        Ok(athlete)
    }

    /// Apply a partial update, keeping the stored value for absent fields
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Athlete,
        req: &UpdateAthleteRequest,
    ) -> Result<Athlete> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let age = req.age.unwrap_or(existing.age);

        let sql = format!(
            "UPDATE athletes SET name = $2, age = $3 WHERE athlete_id = $1 \
             RETURNING {ATHLETE_COLUMNS}"
        );

        let athlete = sqlx::query_as::<_, Athlete>(&sql)
            .bind(id)
            .bind(name)
            .bind(age)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }
}
