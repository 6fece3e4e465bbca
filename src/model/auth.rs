use serde::{Deserialize, Serialize};

/// Credentials exchanged for a bearer token
///
/// Both fields are optional at the deserialization level so that a missing field
/// surfaces as a validation error rather than a generic JSON rejection.
#[derive(Default, Deserialize, utoipa::ToSchema)]
pub struct TokenRequestDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Signed bearer token valid for one hour
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenDto {
    pub token: String,
}
