//! Shared fixtures: the budget application's schema and seed helpers.

#![allow(dead_code)]

use std::path::Path;

use rusqlite::{params, Connection};

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS budget(
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL,
    shopname TEXT NOT NULL,
    category TEXT NOT NULL,
    purchasedate DATE NOT NULL,
    price REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS salary(
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL,
    salary REAL NOT NULL,
    recordtime DATE NOT NULL
);
";

pub fn create_db(path: &Path) -> Connection {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    conn
}

pub fn insert_purchase(conn: &Connection, id: i64, purchasedate: &str) {
    conn.execute(
        "INSERT INTO budget(id, username, shopname, category, purchasedate, price)
         VALUES (?1, 'alice', 'market', 'food', ?2, 9.5)",
        params![id, purchasedate],
    )
    .unwrap();
}

pub fn insert_salary(conn: &Connection, id: i64, recordtime: &str) {
    conn.execute(
        "INSERT INTO salary(id, username, salary, recordtime) VALUES (?1, 'alice', 3000.0, ?2)",
        params![id, recordtime],
    )
    .unwrap();
}

pub fn purchasedate(conn: &Connection, id: i64) -> String {
    conn.query_row("SELECT purchasedate FROM budget WHERE id = ?1", [id], |row| {
        row.get(0)
    })
    .unwrap()
}

pub fn recordtime(conn: &Connection, id: i64) -> String {
    conn.query_row("SELECT recordtime FROM salary WHERE id = ?1", [id], |row| {
        row.get(0)
    })
    .unwrap()
}
