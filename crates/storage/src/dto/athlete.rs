use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Athlete, CategoryRef, TrainingCenterRef};

/// Response containing a persisted athlete record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: String,
    #[serde(rename = "idade")]
    pub age: i32,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "altura")]
    pub height: f64,
    #[serde(rename = "sexo")]
    pub sex: String,
    #[serde(rename = "categoria")]
    pub category: CategoryRef,
    #[serde(rename = "centro_treinamento")]
    pub training_center: TrainingCenterRef,
    pub created_at: NaiveDateTime,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[serde(rename = "nome")]
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_cpf"))]
    pub cpf: String,

    #[serde(rename = "idade")]
    pub age: i32,

    #[serde(rename = "peso")]
    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    pub weight: f64,

    #[serde(rename = "altura")]
    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    pub height: f64,

    #[serde(rename = "sexo")]
    #[validate(length(equal = 1, message = "Sex must be a single character"))]
    pub sex: String,

    #[serde(rename = "categoria")]
    #[validate(nested)]
    pub category: CategoryRef,

    #[serde(rename = "centro_treinamento")]
    #[validate(nested)]
    pub training_center: TrainingCenterRef,
}

/// Request payload for partially updating an existing athlete.
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    #[serde(rename = "idade")]
    pub age: Option<i32>,
}

/// Optional filters for listing athletes
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AthleteFilter {
    /// Case-insensitive substring match on the athlete's name
    pub name: Option<String>,
    /// Exact match on the athlete's cpf
    pub cpf: Option<String>,
}

// Validation helper: a cpf is exactly 11 ASCII digits
fn validate_cpf(cpf: &str) -> Result<(), validator::ValidationError> {
    if cpf.len() == 11 && cpf.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_cpf")
            .with_message("CPF must be exactly 11 digits".into()))
    }
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            id: athlete.athlete_id,
            name: athlete.name,
            cpf: athlete.cpf,
            age: athlete.age,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex,
            category: athlete.category.0,
            training_center: athlete.training_center.0,
            created_at: athlete.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateAthleteRequest {
        CreateAthleteRequest {
            name: "Joao".to_string(),
            cpf: "12345678900".to_string(),
            age: 25,
            weight: 75.5,
            height: 1.70,
            sex: "M".to_string(),
            category: CategoryRef {
                name: "Scale".to_string(),
            },
            training_center: TrainingCenterRef {
                name: "CT King".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_cpf_must_be_eleven_digits() {
        assert!(validate_cpf("12345678900").is_ok());
        assert!(validate_cpf("1234567890").is_err());
        assert!(validate_cpf("123456789000").is_err());
        assert!(validate_cpf("1234567890a").is_err());
        assert!(validate_cpf("").is_err());
    }

    #[test]
    fn test_cpf_error_carries_readable_message() {
        let error = validate_cpf("1234567890a").unwrap_err();
        assert_eq!(error.message.as_deref(), Some("CPF must be exactly 11 digits"));
    }

    #[test]
    fn test_invalid_fields_are_all_reported() {
        let mut req = valid_request();
        req.name = "x".repeat(51);
        req.weight = 0.0;
        req.height = -1.7;
        req.sex = "MF".to_string();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("weight"));
        assert!(fields.contains_key("height"));
        assert!(fields.contains_key("sex"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut req = valid_request();
        req.name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_wire_field_names_are_portuguese() {
        let req: CreateAthleteRequest = serde_json::from_value(serde_json::json!({
            "nome": "Joao",
            "cpf": "12345678900",
            "idade": 25,
            "peso": 75.5,
            "altura": 1.70,
            "sexo": "M",
            "categoria": { "nome": "Scale" },
            "centro_treinamento": { "nome": "CT King" }
        }))
        .unwrap();

        assert_eq!(req.name, "Joao");
        assert_eq!(req.cpf, "12345678900");
        assert_eq!(req.category.name, "Scale");
        assert_eq!(req.training_center.name, "CT King");
    }

    #[test]
    fn test_update_request_fields_are_optional() {
        let req: UpdateAthleteRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(req.name.is_none());
        assert!(req.age.is_none());
        assert!(req.validate().is_ok());
    }
}
