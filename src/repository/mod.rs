use std::backtrace::Backtrace;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, Result};

use crate::db_migrations::migrate_db;
use crate::model::error::store_errors::StoreError;

pub mod metadata_repository;

/// Handle to the sqlite database file. Every operation opens its own connection and closes it when done,
/// so this is cheap to clone and safe to share between request handlers
#[derive(Debug, Clone)]
pub struct SqliteStore {
    location: PathBuf,
}

impl SqliteStore {
    pub fn new(location: impl Into<PathBuf>) -> SqliteStore {
        SqliteStore {
            location: location.into(),
        }
    }

    /// uses the database location from the config file
    pub fn from_config() -> SqliteStore {
        use crate::config::DASHBOARD_CONFIG;

        SqliteStore::new(DASHBOARD_CONFIG.database.location.as_str())
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// creates a new connection and returns it. Callers must handle closing the connection
    pub fn open_connection(&self) -> Result<Connection> {
        Connection::open_with_flags(&self.location, OpenFlags::default())
    }

    /// opens a connection, runs `action` against it, and closes the connection again.
    ///
    /// Any failure to connect or to run `action` is logged and reported as [`StoreError::Unavailable`];
    /// `description` is only used for the log message
    pub fn with_connection<T>(
        &self,
        description: &str,
        action: impl FnOnce(&Connection) -> Result<T>,
    ) -> std::result::Result<T, StoreError> {
        let con = match self.open_connection() {
            Ok(con) => con,
            Err(e) => {
                log::error!(
                    "Failed to get a connection to the database at {:?} to {description}: {e:?}\n{}",
                    self.location,
                    Backtrace::force_capture()
                );
                return Err(StoreError::Unavailable);
            }
        };
        let result = action(&con);
        close_connection(con);
        result.map_err(|e| {
            log::error!(
                "Failed to {description}: {e:?}\n{}",
                Backtrace::force_capture()
            );
            StoreError::Unavailable
        })
    }

    /// a single round trip to the database, used by the health check
    pub fn ping(&self) -> std::result::Result<(), StoreError> {
        self.with_connection("ping the database", metadata_repository::ping)
    }

    /// handles checking if the database exists and is up to the correct version.
    /// If not, it either creates or upgrades the database accordingly
    pub fn initialize_db(&self) -> Result<()> {
        let mut con = self.open_connection()?;
        let table_version = match metadata_repository::get_version(&con) {
            Ok(value) => value.parse::<u64>().unwrap_or_else(|_| {
                log::warn!("Database version {value} is not a number, re-running all migrations");
                1
            }),
            Err(_) => {
                // tables haven't been created yet
                create_db(&mut con)?;
                1
            }
        };
        let result = migrate_db(&con, table_version);
        close_connection(con);
        result
    }
}

/// closes the connection, logging instead of failing since there's nothing left to roll back by then
fn close_connection(con: Connection) {
    if let Err((_, e)) = con.close() {
        log::warn!("Failed to close database connection: {e:?}");
    }
}

/// runs init.sql on the database
fn create_db(con: &mut Connection) -> Result<()> {
    let tx = con.transaction()?;
    tx.execute_batch(include_str!("../assets/init.sql"))?;
    tx.commit()
}

#[cfg(test)]
mod tests {
    use super::metadata_repository::get_version;
    use crate::model::error::store_errors::StoreError;
    use crate::repository::SqliteStore;
    use crate::test::{cleanup, init_db_folder};

    #[test]
    fn initialize_db_migrates_to_latest_version() {
        let store = init_db_folder();
        let con = store.open_connection().unwrap();
        let version = get_version(&con).unwrap();
        con.close().unwrap();
        assert_eq!("3", version);
        cleanup();
    }

    #[test]
    fn initialize_db_twice_is_a_no_op() {
        let store = init_db_folder();
        store.initialize_db().unwrap();
        assert_eq!(Ok(()), store.ping());
        cleanup();
    }

    #[test]
    fn unreachable_database_is_unavailable() {
        let store = SqliteStore::new("./this_directory_does_not_exist/db.sqlite");
        assert_eq!(Err(StoreError::Unavailable), store.ping());
    }
}
