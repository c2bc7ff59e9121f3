use rworkhours::core::{LoginState, SessionController, Status};
use rworkhours::models::{DailyEntry, Project, Session};
use rworkhours::store::TimesStore;
use std::fs;

mod common;
use common::{STANDARD_DAY, day, hm, open};

#[test]
fn first_day_login_logout_records_totals() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_times.json");

    let mut ctl = open(&path, day(2026, 3, 2));
    assert_eq!(ctl.state(), LoginState::LoggedOut);

    let r = ctl.log_in_at(hm("09:00")).unwrap();
    assert_eq!(r, Status::Applied("Successfully logged in at 09:00".into()));
    assert!(ctl.is_logged_in());

    let r = ctl.log_out_at(hm("17:00")).unwrap();
    assert_eq!(r.text(), "Successfully logged out at 17:00");
    assert!(!ctl.is_logged_in());

    let today = ctl.today();
    assert_eq!(today.date, "03/02/26");
    assert_eq!(today.daily_total.as_deref(), Some("08:00"));
    assert_eq!(today.grand_total.as_deref(), Some("00:30"));
    assert_eq!(
        today.times,
        vec![Session {
            start: hm("09:00"),
            end: Some(hm("17:00")),
            project: None,
        }]
    );

    // persisted as well
    let reloaded = TimesStore::new(&path).load().unwrap();
    assert_eq!(reloaded, ctl.entries());
}

#[test]
fn second_day_builds_on_previous_balance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_times.json");

    let mut first = open(&path, day(2026, 3, 2));
    first.log_in_at(hm("09:00")).unwrap();
    first.log_out_at(hm("17:00")).unwrap();

    let mut second = open(&path, day(2026, 3, 3));
    assert_eq!(second.entries().len(), 2);
    assert_eq!(second.today().date, "03/03/26");

    second.log_in_at(hm("09:00")).unwrap();
    second.log_out_at(hm("16:30")).unwrap();

    assert_eq!(second.today().daily_total.as_deref(), Some("07:00"));
    assert_eq!(second.today().grand_total.as_deref(), Some("00:00"));
    assert_eq!(second.entries()[1].grand_total.as_deref(), Some("00:30"));
}

#[test]
fn two_sessions_on_one_day_accumulate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_times.json");

    let mut ctl = open(&path, day(2026, 3, 2));
    ctl.log_in_at(hm("08:00")).unwrap();
    ctl.log_out_at(hm("12:00")).unwrap();
    assert_eq!(ctl.today().grand_total.as_deref(), Some("-03:30"));

    ctl.log_in_at(hm("13:00")).unwrap();
    ctl.log_out_at(hm("16:45")).unwrap();

    assert_eq!(ctl.today().times.len(), 2);
    assert_eq!(ctl.today().daily_total.as_deref(), Some("07:45"));
    assert_eq!(ctl.today().grand_total.as_deref(), Some("00:15"));
}

#[test]
fn second_login_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_times.json");

    let mut ctl = open(&path, day(2026, 3, 2));
    ctl.log_in_at(hm("09:00")).unwrap();
    let before = fs::read(&path).unwrap();

    let r = ctl.log_in_at(hm("09:45")).unwrap();
    assert_eq!(r, Status::Unchanged("Already logged in at 09:00".into()));
    assert_eq!(ctl.today().times.len(), 1);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn logout_and_project_require_a_login() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_times.json");

    let mut ctl = open(&path, day(2026, 3, 2));
    ctl.log_in_at(hm("09:00")).unwrap();
    ctl.log_out_at(hm("10:00")).unwrap();
    let before = fs::read(&path).unwrap();

    let r = ctl.set_project(&Project::new("Project1")).unwrap();
    assert_eq!(r, Status::Unchanged("not logged in!".into()));

    let r = ctl.log_out_at(hm("11:00")).unwrap();
    assert_eq!(r, Status::Unchanged("Not logged in".into()));

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn project_is_kept_across_reload_and_logout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_times.json");

    let mut ctl = open(&path, day(2026, 3, 2));
    ctl.log_in_at(hm("09:00")).unwrap();
    ctl.set_project(&Project::new("Project1")).unwrap();
    let r = ctl.set_project(&Project::new("Project4")).unwrap();
    assert_eq!(r.text(), "project Project4 successfully chosen");

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("null"));

    // a new run on the same day is still logged in
    let mut again = open(&path, day(2026, 3, 2));
    assert!(again.is_logged_in());
    assert_eq!(again.welcome_message().text(), "Last logged in at 09:00");

    again.log_out_at(hm("12:00")).unwrap();
    let s = again.today().last_session().unwrap();
    assert_eq!(s.end, Some(hm("12:00")));
    assert_eq!(s.project.as_deref(), Some("Project4"));
}

#[test]
fn welcome_message_when_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let ctl = open(&dir.path().join("none.json"), day(2026, 3, 2));
    assert_eq!(ctl.welcome_message().text(), "Log in to start a session");
    assert!(!ctl.welcome_message().is_applied());
}

#[test]
fn session_left_open_yesterday_does_not_log_in_today() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_times.json");

    let mut yesterday = open(&path, day(2026, 3, 2));
    yesterday.log_in_at(hm("22:00")).unwrap();

    let ctl = open(&path, day(2026, 3, 3));
    assert_eq!(ctl.state(), LoginState::LoggedOut);
    assert_eq!(ctl.today().date, "03/03/26");
    assert!(ctl.today().times.is_empty());
    assert!(ctl.entries()[1].open_session().is_some());
}

#[test]
fn legacy_open_session_with_project_is_logged_in() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_times.json");
    fs::write(
        &path,
        r#"[{"date": "03/02/26", "times": [["08:00", "12:00"], ["13:00", "Project2"]],
            "daily total": "04:00", "grand total": "-03:30"}]"#,
    )
    .unwrap();

    let mut ctl = open(&path, day(2026, 3, 2));
    assert!(ctl.is_logged_in());

    ctl.log_out_at(hm("16:30")).unwrap();
    assert_eq!(ctl.today().daily_total.as_deref(), Some("07:30"));
    assert_eq!(ctl.today().grand_total.as_deref(), Some("00:00"));
    assert_eq!(
        ctl.today().last_session().unwrap().project.as_deref(),
        Some("Project2")
    );
}

#[test]
fn reversed_logout_fails_without_touching_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_times.json");

    let mut ctl = open(&path, day(2026, 3, 2));
    ctl.log_in_at(hm("10:00")).unwrap();
    let before = fs::read(&path).unwrap();

    assert!(ctl.log_out_at(hm("09:00")).is_err());
    assert!(ctl.is_logged_in());
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn failed_save_keeps_state_and_entry() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();
    let store = TimesStore::new(blocker.join("work_times.json"));

    let mut ctl = SessionController::from_entries(store, Vec::new(), STANDARD_DAY, day(2026, 3, 2));
    assert!(ctl.log_in_at(hm("09:00")).is_err());
    assert!(!ctl.is_logged_in());
    assert!(ctl.today().times.is_empty());
}

#[test]
fn today_entry_is_reused_and_kept_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_times.json");
    let mut older = DailyEntry::new(day(2026, 2, 27));
    older.grand_total = Some("01:00".into());
    TimesStore::new(&path).save(&[DailyEntry::new(day(2026, 3, 2)), older]).unwrap();

    let ctl = open(&path, day(2026, 3, 2));
    assert_eq!(ctl.entries().len(), 2);
    assert_eq!(ctl.today().date, "03/02/26");
}
