use rusqlite::Connection;

/// returns the current version of the database as a String
pub fn get_version(con: &Connection) -> Result<String, rusqlite::Error> {
    con.query_row(
        include_str!("../assets/queries/metadata/get_database_version.sql"),
        [],
        |row| row.get(0),
    )
}

pub fn ping(con: &Connection) -> Result<(), rusqlite::Error> {
    let _: i64 = con.query_row(include_str!("../assets/queries/metadata/ping.sql"), [], |row| {
        row.get(0)
    })?;
    Ok(())
}
