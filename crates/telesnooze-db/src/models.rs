/// Database row types — these map directly to SQLite rows.
/// Distinct from telesnooze-types API models to keep the DB layer independent.

pub struct UserRow {
    pub id: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmRow {
    pub id: String,
    pub time: String,
    /// Sunday-first, matching the column order of the `alarms` table.
    pub days: [bool; 7],
    pub user_id: String,
}
