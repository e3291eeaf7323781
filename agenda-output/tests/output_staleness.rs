use std::fs;
use std::time::{Duration, SystemTime};

use agenda_core::{config::CONFIG_FILE, SAMPLE_DOCUMENT};
use agenda_output::{
    hash_store, render_agenda,
    staleness::{check, StalenessSignal},
    RenderJob, WriteResult,
};
use filetime::{set_file_mtime, FileTime};
use tempfile::TempDir;

fn project(with_config: bool, do_render: bool) -> (TempDir, RenderJob) {
    let dir = TempDir::new().expect("dir");
    fs::write(dir.path().join("data.json"), SAMPLE_DOCUMENT).expect("data");
    if with_config {
        fs::write(dir.path().join(CONFIG_FILE), "title: Quarterly Review\n").expect("config");
    }
    let job = RenderJob::at(dir.path()).expect("job");
    if do_render {
        render_agenda(&job, false).expect("render");
    }
    (dir, job)
}

fn touch_future(path: &std::path::Path) {
    let new = FileTime::from_system_time(SystemTime::now() + Duration::from_secs(120));
    set_file_mtime(path, new).expect("touch mtime");
}

#[test]
fn stale_when_data_is_newer_than_last_render() {
    let (dir, job) = project(false, true);
    touch_future(&dir.path().join("data.json"));

    match check(&job).expect("check") {
        StalenessSignal::Stale { reason } => assert!(reason.starts_with("data changed")),
        other => panic!("expected stale, got {other:?}"),
    }
}

#[test]
fn stale_when_config_is_newer_than_last_render() {
    let (dir, job) = project(true, true);
    touch_future(&dir.path().join(CONFIG_FILE));

    match check(&job).expect("check") {
        StalenessSignal::Stale { reason } => assert!(reason.starts_with("config changed")),
        other => panic!("expected stale, got {other:?}"),
    }
}

#[test]
fn old_inputs_do_not_make_output_stale() {
    let (dir, job) = project(true, true);
    let old = FileTime::from_system_time(SystemTime::now() - Duration::from_secs(24 * 60 * 60));
    set_file_mtime(dir.path().join("data.json"), old).expect("old data");
    set_file_mtime(dir.path().join(CONFIG_FILE), old).expect("old config");

    assert_eq!(check(&job).expect("check"), StalenessSignal::Current);
}

#[test]
fn rerender_after_stale_returns_to_current() {
    let (dir, job) = project(false, true);
    let data = dir.path().join("data.json");
    let edited = SAMPLE_DOCUMENT.replace("Harbor & Finch Family Trust", "Osprey Holdings");
    fs::write(&data, edited).expect("edit data");
    let old = FileTime::from_system_time(SystemTime::now() - Duration::from_secs(5));
    set_file_mtime(&data, old).expect("settle mtime");

    let result = render_agenda(&job, false).expect("re-render");
    assert!(matches!(result.write, WriteResult::Written { .. }));
    assert_eq!(check(&job).expect("check"), StalenessSignal::Current);
}

#[test]
fn modified_when_output_is_hand_edited() {
    let (_dir, job) = project(false, true);
    fs::write(&job.output, "<p>hand edit</p>\n").expect("edit output");
    assert_eq!(check(&job).expect("check"), StalenessSignal::Modified);
}

#[test]
fn never_rendered_before_first_render() {
    let (_dir, job) = project(true, false);
    assert!(!hash_store::store_path_for(&job.output).exists());
    assert_eq!(check(&job).expect("check"), StalenessSignal::NeverRendered);
}

#[test]
fn remote_sources_ignore_data_timestamps() {
    let (dir, job) = project(false, true);
    let job = job.with_source(agenda_core::DocumentSource::parse("https://example.com/data.json"));
    touch_future(&dir.path().join("data.json"));
    assert_eq!(check(&job).expect("check"), StalenessSignal::Current);
}
