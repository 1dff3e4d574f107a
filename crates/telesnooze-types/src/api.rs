use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

// -- Auth --

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
}

// -- Alarms --

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RetrieveAlarmsRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteAlarmRequest {
    #[serde(rename = "Alarm_ID", alias = "alarm_id", deserialize_with = "null_as_default")]
    pub alarm_id: String,
}

// -- Errors --

/// Body of a 400 response for a payload that is not valid JSON.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
