#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rworker::core::project::ProjectLogic;
use rworker::db::initialize::init_db;
use rworker::db::pool::DbPool;
use rworker::models::{Milliseconds, Project};
use rworker::utils::date::local_datetime;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test with HOME pointed at a private temp directory, so the
/// user's real configuration is never read.
pub fn rwk(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rworker");
    cmd.env("HOME", temp_home(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworker_home", name));
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB through the CLI in test mode.
pub fn init_cli_db(name: &str, db_path: &str) {
    rwk(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// In-memory database with the schema applied.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn project(pool: &mut DbPool, name: &str) -> Project {
    ProjectLogic::create(pool, name).expect("create project")
}

/// Local wall-clock time as milliseconds.
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Milliseconds {
    let naive = NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap();
    Milliseconds::from_local(&local_datetime(naive))
}
