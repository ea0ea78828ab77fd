use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Category an athlete competes in. Supplied at creation time and stored
/// verbatim; its lifecycle is owned elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoryRef {
    #[serde(rename = "nome")]
    #[validate(length(
        min = 1,
        max = 10,
        message = "Category name must be between 1 and 10 characters"
    ))]
    pub name: String,
}

/// Training center an athlete belongs to. Same passthrough treatment as
/// [`CategoryRef`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrainingCenterRef {
    #[serde(rename = "nome")]
    #[validate(length(
        min = 1,
        max = 20,
        message = "Training center name must be between 1 and 20 characters"
    ))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub name: String,
    pub cpf: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    #[schema(value_type = CategoryRef)]
    pub category: Json<CategoryRef>,
    #[schema(value_type = TrainingCenterRef)]
    pub training_center: Json<TrainingCenterRef>,
    pub created_at: chrono::NaiveDateTime,
}
