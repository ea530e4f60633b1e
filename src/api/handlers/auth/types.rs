//! Request/response types for auth endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct RegisterStartRequest {
    pub email: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct RegisterFinishRequest {
    pub email: String,
    pub otp: String,
    pub name: String,
    pub mobile: String,
    pub password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct RegisterFinishResponse {
    pub message: String,
    pub patient_id: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct OtpRequest {
    pub email: String,
    #[serde(default)]
    pub user_type: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginStartRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub user_type: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginStartResponse {
    pub message: String,
    pub user_id: String,
    pub user_type: String,
    pub requires_otp: bool,
    pub success: bool,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginFinishRequest {
    pub email: String,
    pub otp: String,
    #[serde(default)]
    pub user_type: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginFinishResponse {
    pub message: String,
    pub user_id: String,
    pub user_type: String,
    pub access_token: String,
    pub refresh_token: String,
    pub success: bool,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct TokenRefreshRequest {
    pub refresh_token: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct TokenRefreshResponse {
    pub access_token: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct CreateStaffRequest {
    pub staff_name: String,
    pub staff_email: String,
    pub staff_mobile: String,
    pub role_id: String,
    /// Joining date, `YYYY-MM-DD`.
    pub joining_date: String,
    pub password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct CreateStaffResponse {
    pub message: String,
    pub staff_id: String,
}
