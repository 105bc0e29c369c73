//! Pet domain entity and related types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::name_rules;
use super::Entity;
use crate::config::KIND_PET;
use crate::errors::AppError;

/// Pet availability in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetStatus {
    #[serde(alias = "available")]
    Available,
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "sold")]
    Sold,
}

impl PetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "AVAILABLE",
            PetStatus::Pending => "PENDING",
            PetStatus::Sold => "SOLD",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parsing, as used for query and form parameters.
impl FromStr for PetStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AVAILABLE" => Ok(PetStatus::Available),
            "PENDING" => Ok(PetStatus::Pending),
            "SOLD" => Ok(PetStatus::Sold),
            _ => Err(AppError::invalid_resource(format!("Unknown pet status {}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Category {
    #[validate(range(min = 1, message = "Category id must be positive"))]
    pub id: i64,
    #[validate(custom(function = "name_rules"))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Tag {
    #[validate(range(min = 1, message = "Tag id must be positive"))]
    pub id: i64,
    #[validate(custom(function = "name_rules"))]
    pub name: String,
}

/// Pet domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[validate(range(min = 1, message = "Pet id must be positive"))]
    pub id: i64,
    #[validate(custom(function = "name_rules"))]
    pub name: String,
    #[validate(nested)]
    pub category: Category,
    pub photo_urls: Vec<String>,
    #[validate(nested)]
    pub tags: Vec<Tag>,
    pub status: PetStatus,
}

impl Pet {
    /// Check whether any tag of this pet carries one of `names`
    pub fn has_any_tag(&self, names: &[String]) -> bool {
        self.tags.iter().any(|tag| names.contains(&tag.name))
    }
}

impl Entity for Pet {
    const KIND: &'static str = KIND_PET;

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet(name: &str) -> Pet {
        Pet {
            id: 1,
            name: name.to_string(),
            category: Category {
                id: 1,
                name: "dogs".to_string(),
            },
            photo_urls: vec![],
            tags: vec![Tag {
                id: 1,
                name: "friendly".to_string(),
            }],
            status: PetStatus::Available,
        }
    }

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!("available".parse::<PetStatus>().unwrap(), PetStatus::Available);
        assert_eq!("Pending".parse::<PetStatus>().unwrap(), PetStatus::Pending);
        assert_eq!("SOLD".parse::<PetStatus>().unwrap(), PetStatus::Sold);
        assert!(matches!(
            "lost".parse::<PetStatus>(),
            Err(AppError::InvalidResource(_))
        ));
    }

    #[test]
    fn test_pet_json_shape() {
        let json = serde_json::to_value(pet("doggie")).unwrap();
        assert_eq!(json["status"], "AVAILABLE");
        assert!(json.get("photoUrls").is_some());

        let parsed: Pet = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "doggie",
            "category": { "id": 1, "name": "dogs" },
            "photoUrls": [],
            "tags": [{ "id": 1, "name": "friendly" }],
            "status": "sold"
        }))
        .unwrap();
        assert_eq!(parsed.status, PetStatus::Sold);
    }

    #[test]
    fn test_pet_validation() {
        assert!(pet("doggie").validate().is_ok());
        assert!(pet("do").validate().is_err());
        assert!(pet("   ").validate().is_err());

        let mut bad_tag = pet("doggie");
        bad_tag.tags[0].name = "x".to_string();
        assert!(bad_tag.validate().is_err());
    }

    #[test]
    fn test_has_any_tag() {
        let pet = pet("doggie");
        assert!(pet.has_any_tag(&["friendly".to_string(), "other".to_string()]));
        assert!(!pet.has_any_tag(&["other".to_string()]));
        assert!(!pet.has_any_tag(&[]));
    }
}
