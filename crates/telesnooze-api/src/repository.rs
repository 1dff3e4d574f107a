use tracing::{info, warn};
use uuid::Uuid;

use telesnooze_db::Database;
use telesnooze_db::models::AlarmRow;
use telesnooze_types::models::{Alarm, AlarmCollection};
use telesnooze_types::validation;

use crate::error::ApiResult;

/// Alarm CRUD scoped by owning user.
///
/// Ownership is whatever `user_id` the caller supplies. Update matches on
/// `(alarm_id, user_id)`, delete on `alarm_id` alone, and neither treats zero
/// affected rows as an error.
pub struct AlarmRepository<'a> {
    db: &'a Database,
}

impl<'a> AlarmRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Validate and store `alarm` under a fresh id. Any `alarm_id` in the
    /// input is ignored.
    pub fn create(&self, alarm: &Alarm) -> ApiResult<String> {
        validation::validate_alarm(alarm)?;

        let alarm_id = Uuid::new_v4().to_string();
        self.db.insert_alarm(&to_row(&alarm_id, alarm))?;

        info!("Created alarm {} for user {}", alarm_id, alarm.user_id);
        Ok(alarm_id)
    }

    pub fn list_by_user(&self, user_id: &str) -> ApiResult<AlarmCollection> {
        let alarms = self
            .db
            .get_alarms_for_user(user_id)?
            .into_iter()
            .map(from_row)
            .collect();

        Ok(AlarmCollection {
            user_id: user_id.to_string(),
            alarms,
        })
    }

    /// Returns the number of rows changed.
    pub fn update(&self, alarm: &Alarm) -> ApiResult<usize> {
        validation::validate_alarm(alarm)?;

        let changed = self.db.update_alarm(&to_row(&alarm.alarm_id, alarm))?;
        if changed == 0 {
            warn!(
                "Update matched no alarm (id {}, user {})",
                alarm.alarm_id, alarm.user_id
            );
        }
        Ok(changed)
    }

    /// Returns the number of rows removed.
    pub fn delete(&self, alarm_id: &str) -> ApiResult<usize> {
        let removed = self.db.delete_alarm(alarm_id)?;
        if removed == 0 {
            warn!("Delete matched no alarm (id {})", alarm_id);
        }
        Ok(removed)
    }
}

fn to_row(alarm_id: &str, alarm: &Alarm) -> AlarmRow {
    AlarmRow {
        id: alarm_id.to_string(),
        time: alarm.time.clone(),
        days: alarm.days.into(),
        user_id: alarm.user_id.clone(),
    }
}

fn from_row(row: AlarmRow) -> Alarm {
    Alarm {
        alarm_id: row.id,
        user_id: row.user_id,
        time: row.time,
        days: row.days.into(),
    }
}
