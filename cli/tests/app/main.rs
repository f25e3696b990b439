use castpath::Args;
use castpath::app::CastPathApp;
use castpath_core::NodeId;
use clap::Parser;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn create_database(dir: &Path) -> PathBuf {
    let path = dir.join("imdb.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE name_basics (nconst INTEGER PRIMARY KEY, primaryName TEXT NOT NULL);
         CREATE TABLE title_basics (tconst INTEGER PRIMARY KEY, primaryTitle TEXT NOT NULL);
         CREATE TABLE title_principals (tconst INTEGER, nconst INTEGER, category TEXT);
         INSERT INTO name_basics VALUES (1, 'Alice'), (2, 'Bob'), (3, 'Carol');
         INSERT INTO title_basics VALUES (10, 'MovieA');
         INSERT INTO title_principals VALUES (10, 1, 'actor'), (10, 2, 'actor'), (10, 3, 'director');",
    )
    .unwrap();
    path
}

fn app_for(database: &Path, snapshot: &Path, extra: &[&str]) -> CastPathApp {
    let database = database.to_str().unwrap();
    let snapshot = snapshot.to_str().unwrap();
    let mut argv = vec!["castpath", "--quiet", "--database", database, "--snapshot", snapshot];
    argv.extend_from_slice(extra);
    argv.push("Alice");

    CastPathApp::new(&Args::try_parse_from(argv).unwrap()).unwrap()
}

#[test]
fn test_second_load_uses_snapshot() {
    let dir = TempDir::new().unwrap();
    let database = create_database(dir.path());
    let snapshot = dir.path().join("graph.snapshot");

    let first = app_for(&database, &snapshot, &[]).load_graph().unwrap();
    assert!(!first.from_snapshot);
    assert!(snapshot.exists());

    let second = app_for(&database, &snapshot, &[]).load_graph().unwrap();
    assert!(second.from_snapshot);
    assert_eq!(second.graph, first.graph);
    assert_eq!(second.fingerprint, first.fingerprint);
}

#[test]
fn test_stale_snapshot_is_rebuilt() {
    let dir = TempDir::new().unwrap();
    let database = create_database(dir.path());
    let snapshot = dir.path().join("graph.snapshot");

    app_for(&database, &snapshot, &[]).load_graph().unwrap();

    let conn = Connection::open(&database).unwrap();
    conn.execute("INSERT INTO title_principals VALUES (10, 3, 'actor')", [])
        .unwrap();

    let reloaded = app_for(&database, &snapshot, &[]).load_graph().unwrap();
    assert!(!reloaded.from_snapshot);
    assert!(reloaded.graph.contains(NodeId::person(3)));
}

#[test]
fn test_rebuild_flag_skips_snapshot() {
    let dir = TempDir::new().unwrap();
    let database = create_database(dir.path());
    let snapshot = dir.path().join("graph.snapshot");

    app_for(&database, &snapshot, &[]).load_graph().unwrap();
    let rebuilt = app_for(&database, &snapshot, &["--rebuild"]).load_graph().unwrap();
    assert!(!rebuilt.from_snapshot);
}

#[test]
fn test_all_roles_changes_graph_and_fingerprint() {
    let dir = TempDir::new().unwrap();
    let database = create_database(dir.path());
    let snapshot = dir.path().join("graph.snapshot");

    let actors = app_for(&database, &snapshot, &[]).load_graph().unwrap();
    let everyone = app_for(&database, &snapshot, &["--all-roles"]).load_graph().unwrap();

    assert!(!everyone.from_snapshot);
    assert!(!actors.graph.contains(NodeId::person(3)));
    assert!(everyone.graph.contains(NodeId::person(3)));
    assert_ne!(actors.fingerprint, everyone.fingerprint);
}

#[test]
fn test_no_snapshot_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let database = create_database(dir.path());
    let argv = [
        "castpath",
        "--quiet",
        "--no-snapshot",
        "--database",
        database.to_str().unwrap(),
        "Alice",
    ];

    let app = CastPathApp::new(&Args::try_parse_from(argv).unwrap()).unwrap();
    assert!(app.snapshot_path.is_none());

    let loaded = app.load_graph().unwrap();
    assert!(!loaded.from_snapshot);
    assert_eq!(loaded.graph.node_count(), 3);
}

#[test]
fn test_missing_database_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.db");
    let argv = ["castpath", "--database", missing.to_str().unwrap(), "Alice"];

    assert!(CastPathApp::new(&Args::try_parse_from(argv).unwrap()).is_err());
}
