/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Result-code envelopes and paged responses
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Deserializer, Serialize};

use super::models::{AuthUser, Item};

/// Result code the service uses for an accepted request.
pub const RESULT_CODE_SUCCESS: i32 = 0;

/// Per-field validation message attached to a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub error: String,
}

/// Envelope wrapping every mutating response.
///
/// Transport success does not imply acceptance: a non-zero `result_code`
/// is a domain rejection and `messages`/`field_errors` explain why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub result_code: i32,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(rename = "fieldsErrors", alias = "fieldErrors", default)]
    pub field_errors: Vec<FieldError>,
    #[serde(default)]
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.result_code == RESULT_CODE_SUCCESS
    }

    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

/// `data` payload of create responses. Rejected creates carry `{}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload<T> {
    #[serde(default = "Option::default")]
    pub item: Option<T>,
}

impl<T> Default for ItemPayload<T> {
    fn default() -> Self {
        Self { item: None }
    }
}

/// `data` payload for operations that confirm without returning anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyData {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// `data` payload of `auth/me`. A rejected call carries `{}` or `null`,
/// both of which decode to no user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MeData {
    pub user: Option<AuthUser>,
}

impl<'de> Deserialize<'de> for MeData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Partial {
            id: Option<i64>,
            email: Option<String>,
            login: Option<String>,
        }

        let partial = Option::<Partial>::deserialize(deserializer)?;
        let user = partial.and_then(|partial| {
            Some(AuthUser {
                id: partial.id?,
                email: partial.email?,
                login: partial.login?,
            })
        });
        Ok(Self { user })
    }
}

/// Page of items for one list. A non-null `error` is a domain rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsPage {
    pub items: Vec<Item>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub error: Option<String>,
}
