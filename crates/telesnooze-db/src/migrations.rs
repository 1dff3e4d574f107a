use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |r| r.get(0),
    )?;

    if version < 1 {
        info!("Running migration v1 (users, alarms)");
        // CREATE ... IF NOT EXISTS: databases created before schema_version
        // existed already carry these tables.
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS users (
                id          TEXT PRIMARY KEY,
                email       TEXT NOT NULL,
                username    TEXT NOT NULL,
                password    TEXT NOT NULL,
                phone       TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS alarms (
                id          TEXT PRIMARY KEY,
                time        TEXT NOT NULL,
                sunday      INTEGER NOT NULL DEFAULT 0,
                monday      INTEGER NOT NULL DEFAULT 0,
                tuesday     INTEGER NOT NULL DEFAULT 0,
                wednesday   INTEGER NOT NULL DEFAULT 0,
                thursday    INTEGER NOT NULL DEFAULT 0,
                friday      INTEGER NOT NULL DEFAULT 0,
                saturday    INTEGER NOT NULL DEFAULT 0,
                user_id     TEXT NOT NULL
            );

            INSERT INTO schema_version (version) VALUES (1);
            ",
        )?;
    }

    if version < 2 {
        info!("Running migration v2 (lookup indexes)");
        conn.execute_batch(
            "
            CREATE INDEX IF NOT EXISTS idx_alarms_user ON alarms(user_id);
            CREATE INDEX IF NOT EXISTS idx_users_username ON users(username);

            INSERT INTO schema_version (version) VALUES (2);
            ",
        )?;
    }

    info!("Database migrations complete");
    Ok(())
}
