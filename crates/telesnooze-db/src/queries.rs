use crate::Database;
use crate::models::{AlarmRow, UserRow};
use anyhow::Result;
use rusqlite::{Connection, Row};

const ALARM_COLUMNS: &str =
    "id, time, sunday, monday, tuesday, wednesday, thursday, friday, saturday, user_id";

impl Database {
    // -- Users --

    pub fn create_user(
        &self,
        id: &str,
        email: &str,
        username: &str,
        password_hash: &str,
        phone: &str,
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, email, username, password, phone) VALUES (?1, ?2, ?3, ?4, ?5)",
                (id, email, username, password_hash, phone),
            )?;
            Ok(())
        })
    }

    /// Usernames are not unique, so every account with the name is returned
    /// in registration order.
    pub fn get_users_by_username(&self, username: &str) -> Result<Vec<UserRow>> {
        self.with_conn(|conn| query_users_by_username(conn, username))
    }

    // -- Alarms --

    pub fn insert_alarm(&self, alarm: &AlarmRow) -> Result<()> {
        let [sun, mon, tue, wed, thu, fri, sat] = alarm.days;
        self.with_conn(|conn| {
            conn.execute(
                &format!(
                    "INSERT INTO alarms ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                    ALARM_COLUMNS
                ),
                rusqlite::params![
                    alarm.id,
                    alarm.time,
                    sun,
                    mon,
                    tue,
                    wed,
                    thu,
                    fri,
                    sat,
                    alarm.user_id
                ],
            )?;
            Ok(())
        })
    }

    pub fn get_alarms_for_user(&self, user_id: &str) -> Result<Vec<AlarmRow>> {
        self.with_conn(|conn| query_alarms_for_user(conn, user_id))
    }

    /// Overwrite time and days of the alarm matching both `id` and `user_id`.
    /// Returns the number of rows changed (0 or 1).
    pub fn update_alarm(&self, alarm: &AlarmRow) -> Result<usize> {
        let [sun, mon, tue, wed, thu, fri, sat] = alarm.days;
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE alarms
                 SET time = ?2,
                     sunday = ?3,
                     monday = ?4,
                     tuesday = ?5,
                     wednesday = ?6,
                     thursday = ?7,
                     friday = ?8,
                     saturday = ?9
                 WHERE id = ?1 AND user_id = ?10",
                rusqlite::params![
                    alarm.id,
                    alarm.time,
                    sun,
                    mon,
                    tue,
                    wed,
                    thu,
                    fri,
                    sat,
                    alarm.user_id
                ],
            )?;
            Ok(changed)
        })
    }

    /// Delete by id alone. Returns the number of rows removed.
    pub fn delete_alarm(&self, id: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM alarms WHERE id = ?1", [id])?;
            Ok(removed)
        })
    }
}

fn query_users_by_username(conn: &Connection, username: &str) -> Result<Vec<UserRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, email, username, password, phone FROM users WHERE username = ?1 ORDER BY rowid",
    )?;

    let rows = stmt
        .query_map([username], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                email: row.get(1)?,
                username: row.get(2)?,
                password: row.get(3)?,
                phone: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_alarms_for_user(conn: &Connection, user_id: &str) -> Result<Vec<AlarmRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM alarms WHERE user_id = ?1 ORDER BY rowid",
        ALARM_COLUMNS
    ))?;

    let rows = stmt
        .query_map([user_id], alarm_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn alarm_from_row(row: &Row<'_>) -> rusqlite::Result<AlarmRow> {
    Ok(AlarmRow {
        id: row.get(0)?,
        time: row.get(1)?,
        days: [
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
            row.get(6)?,
            row.get(7)?,
            row.get(8)?,
        ],
        user_id: row.get(9)?,
    })
}
