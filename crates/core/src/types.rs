/// Person records use SQLite `INTEGER PRIMARY KEY` ids.
pub type DbId = i64;
