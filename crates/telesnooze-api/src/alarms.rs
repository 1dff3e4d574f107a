use axum::{Json, extract::State};

use telesnooze_types::api::{DeleteAlarmRequest, RetrieveAlarmsRequest};
use telesnooze_types::models::{Alarm, AlarmCollection};

use crate::auth::{AppState, blocking};
use crate::error::ApiResult;
use crate::extract::Payload;
use crate::repository::AlarmRepository;

// The owning user is taken from the payload; no handler authenticates the caller.

/// POST /api/v1/createAlarm
pub async fn create_alarm(
    State(state): State<AppState>,
    Payload(alarm): Payload<Alarm>,
) -> ApiResult<&'static str> {
    blocking(&state, move |s| AlarmRepository::new(&s.db).create(&alarm)).await?;
    Ok("Success")
}

/// POST /api/v1/retrieveAlarms
pub async fn retrieve_alarms(
    State(state): State<AppState>,
    Payload(req): Payload<RetrieveAlarmsRequest>,
) -> ApiResult<Json<AlarmCollection>> {
    let collection = blocking(&state, move |s| {
        AlarmRepository::new(&s.db).list_by_user(&req.user_id)
    })
    .await?;

    Ok(Json(collection))
}

/// POST /api/v1/updateAlarm — zero matched rows still reports success.
pub async fn update_alarm(
    State(state): State<AppState>,
    Payload(alarm): Payload<Alarm>,
) -> ApiResult<&'static str> {
    blocking(&state, move |s| AlarmRepository::new(&s.db).update(&alarm)).await?;
    Ok("Success")
}

/// POST /api/v1/deleteAlarm — zero matched rows still reports success.
pub async fn delete_alarm(
    State(state): State<AppState>,
    Payload(req): Payload<DeleteAlarmRequest>,
) -> ApiResult<&'static str> {
    blocking(&state, move |s| AlarmRepository::new(&s.db).delete(&req.alarm_id)).await?;
    Ok("Success")
}
