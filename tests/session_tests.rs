use predicates::str::contains;

mod common;
use common::Workspace;

#[test]
fn test_up_then_down_records_one_closed_session() {
    let ws = Workspace::new();

    ws.hs()
        .args(["up", "-y", "2025", "-m", "3"])
        .assert()
        .success()
        .stdout(contains("started"));

    assert!(ws.read_config().contains("cursor:"));
    assert_eq!(ws.count("SELECT COUNT(*) FROM record WHERE down_at IS NULL"), 1);

    ws.hs().arg("down").assert().success().stdout(contains("stopped"));

    assert_eq!(ws.count("SELECT COUNT(*) FROM record WHERE down_at IS NULL"), 0);
    assert_eq!(
        ws.count("SELECT COUNT(*) FROM record WHERE year = 2025 AND month = 3"),
        1
    );
}

#[test]
fn test_up_twice_fails_and_inserts_nothing() {
    let ws = Workspace::new();

    ws.hs().args(["up", "-y", "2025", "-m", "3"]).assert().success();
    let cfg_after_first = ws.read_config();

    ws.hs()
        .args(["up", "-y", "2025", "-m", "3"])
        .assert()
        .failure()
        .stderr(contains("not closed"));

    assert_eq!(ws.count("SELECT COUNT(*) FROM record"), 1);
    assert_eq!(ws.read_config(), cfg_after_first);
}

#[test]
fn test_down_without_session_fails() {
    let ws = Workspace::new();
    ws.seed(7, 2025, 3, 100, None);

    ws.hs()
        .arg("down")
        .assert()
        .failure()
        .stderr(contains("open session"));

    assert_eq!(ws.count("SELECT COUNT(*) FROM record WHERE down_at IS NULL"), 1);
}

#[test]
fn test_second_down_is_rejected() {
    let ws = Workspace::new();

    ws.hs().args(["up", "-y", "2025", "-m", "3"]).assert().success();
    ws.hs().arg("down").assert().success();

    let down_at = ws.count("SELECT down_at FROM record");

    ws.hs()
        .arg("down")
        .assert()
        .failure()
        .stderr(contains("already closed"));

    assert_eq!(ws.count("SELECT down_at FROM record"), down_at);
}

#[test]
fn test_up_after_down_starts_new_session() {
    let ws = Workspace::new();

    for _ in 0..2 {
        ws.hs().args(["up", "-y", "2025", "-m", "3"]).assert().success();
        ws.hs().arg("down").assert().success();
    }

    assert_eq!(ws.count("SELECT COUNT(*) FROM record"), 2);
    assert_eq!(ws.count("SELECT COUNT(*) FROM record WHERE down_at IS NULL"), 0);
}

#[test]
fn test_up_rejects_month_zero() {
    let ws = Workspace::new();

    ws.hs()
        .args(["up", "-m", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));

    assert_eq!(ws.count("SELECT COUNT(*) FROM record"), 0);
}

#[test]
fn test_up_refuses_open_session_left_by_other_store() {
    let ws = Workspace::new();
    let alt = ws.path().join("alt.db");

    ws.hs().args(["up", "-y", "2025", "-m", "3"]).assert().success();

    // alt.db has no open rows, so this run succeeds and moves the cursor
    // to a row that only exists in alt.db
    ws.hs()
        .args(["up", "-y", "2025", "-m", "3", "--db"])
        .arg(&alt)
        .assert()
        .success();

    ws.hs()
        .args(["up", "-y", "2025", "-m", "3"])
        .assert()
        .failure()
        .stderr(contains("not tracked by the cursor"));

    assert_eq!(ws.count("SELECT COUNT(*) FROM record"), 1);
    assert_eq!(ws.count("SELECT COUNT(*) FROM record WHERE down_at IS NULL"), 1);
}
