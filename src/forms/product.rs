use serde::{Deserialize, Serialize};
use serde_valid::Validate;

fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn collect_missing(fields: &[(&'static str, &Option<String>)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| is_missing(value))
        .map(|(name, _)| *name)
        .collect()
}

/// Length bounds for a product name. Only checked when
/// `validation.enforce_name_length` is switched on.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NameSchema {
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub value: String,
}

impl NameSchema {
    pub fn check(name: &str) -> Result<(), String> {
        NameSchema {
            value: name.to_string(),
        }
        .validate()
        .map_err(|errors| errors.to_string())
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub manager: Option<String>,
    pub password: Option<String>,
}

impl CreateProduct {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("name", &self.name),
            ("description", &self.description),
            ("manager", &self.manager),
            ("password", &self.password),
        ])
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub manager: Option<String>,
    pub status: Option<String>,
}

impl UpdateProduct {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("name", &self.name),
            ("description", &self.description),
            ("manager", &self.manager),
            ("status", &self.status),
        ])
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProduct {
    pub password: Option<String>,
}

impl DeleteProduct {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[("password", &self.password)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_count_as_missing() {
        let form: CreateProduct =
            serde_json::from_str(r#"{"name": "Widget", "description": "", "password": "pw"}"#)
                .unwrap();
        assert_eq!(vec!["description", "manager"], form.missing_fields());
    }

    #[test]
    fn complete_update_has_no_missing_fields() {
        let form = UpdateProduct {
            name: Some("Widget".to_string()),
            description: Some("d".to_string()),
            manager: Some("Alice".to_string()),
            status: Some("bogus".to_string()),
        };
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn name_schema_bounds() {
        assert!(NameSchema::check("Widget").is_ok());
        assert!(NameSchema::check("").is_err());
        assert!(NameSchema::check(&"x".repeat(50)).is_ok());
        assert!(NameSchema::check(&"x".repeat(51)).is_err());
    }
}
