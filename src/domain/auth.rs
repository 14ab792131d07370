//! Login form schema and hosted-auth backend types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Login form fields, validated before any auth call is made
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl LoginForm {
    /// Runs schema validation, returning per-field error messages on failure.
    pub fn field_errors(&self) -> Option<BTreeMap<String, Vec<String>>> {
        let errors = match self.validate() {
            Ok(()) => return None,
            Err(errors) => errors,
        };

        let mut fields = BTreeMap::new();
        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", field))
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }

        Some(fields)
    }
}

/// An OAuth2 provider advertised by the auth backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthProviderInfo {
    pub name: String,
    pub state: String,
    pub code_verifier: String,
    pub auth_url: String,
}

/// Auth methods listed by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthMethods {
    #[serde(default)]
    pub auth_providers: Vec<AuthProviderInfo>,
}

impl AuthMethods {
    /// Looks up a provider by name. A selection with no matching provider
    /// yields `None`; callers surface it as a 400.
    pub fn find_provider(&self, name: &str) -> Option<&AuthProviderInfo> {
        self.auth_providers.iter().find(|p| p.name == name)
    }
}

/// Session returned by a successful password authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub record: Value,
}
