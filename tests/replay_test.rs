//! スクリプト再生による採点〜CSV出力の統合テスト

use photo_score::replay::{parse_script, run_replay};
use photo_score::scanner;
use photo_score_common::{CsvOptions, LoadStatus, NavState, Notice, ScoringController};
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn photo_folder(names: &[&str]) -> tempfile::TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    for name in names {
        File::create(dir.path().join(name)).expect("ファイル作成失敗");
    }
    dir
}

fn controller_for(folder: &Path) -> (ScoringController<PathBuf>, LoadStatus) {
    let mut controller = ScoringController::new(CsvOptions::default());
    let files = scanner::scan_folder(folder, false).expect("スキャン失敗");
    let status = controller.on_files_selected(files);
    (controller, status)
}

#[test]
fn test_score_three_photos_and_export() {
    let photos = photo_folder(&["b.jpg", "a.jpg", "c.jpg", "notes.txt"]);
    let out = tempdir().expect("Failed to create temp dir");
    let (mut controller, status) = controller_for(photos.path());
    assert_eq!(status, LoadStatus::Loaded(3));

    let script = "name Kim\ninput 5\nArrowRight\ninput 0\nArrowRight\n0\nArrowRight\n";
    let steps = parse_script(script).expect("解析失敗");
    let report = run_replay(&mut controller, &steps, out.path()).expect("再生失敗");

    let path = report.exported.expect("CSVが出力されるはず");
    assert_eq!(path, out.path().join("Kim_점수.csv"));

    let bytes = std::fs::read(&path).expect("読み込み失敗");
    assert_eq!(
        String::from_utf8(bytes).expect("UTF-8のはず"),
        "\u{FEFF}photo,score\r\na,5\r\nb,1\r\nc,10\r\n"
    );
}

#[test]
fn test_incomplete_finish_then_fix_with_jump() {
    let photos = photo_folder(&["x.png", "y.png"]);
    let out = tempdir().expect("Failed to create temp dir");
    let (mut controller, _) = controller_for(photos.path());

    let script = "ArrowRight\n4\nArrowRight\njump 1\nslider 6\ndownload\nname Lee\ndownload\n";
    let steps = parse_script(script).expect("解析失敗");
    let report = run_replay(&mut controller, &steps, out.path()).expect("再生失敗");

    assert_eq!(
        report.notices,
        vec![
            Notice::UnscoredRemain.to_string(),
            Notice::NameRequired.to_string(),
        ]
    );

    let path = report.exported.expect("CSVが出力されるはず");
    let content = std::fs::read_to_string(path).expect("読み込み失敗");
    assert!(content.ends_with("photo,score\r\nx,6\r\ny,4\r\n"));
}

#[test]
fn test_empty_folder_stays_empty() {
    let photos = photo_folder(&["readme.md"]);
    let out = tempdir().expect("Failed to create temp dir");
    let (mut controller, status) = controller_for(photos.path());

    assert_eq!(status, LoadStatus::Empty);
    assert_eq!(controller.session().nav_state(), NavState::Empty);
    assert!(!controller.can_download());

    let steps = parse_script("name Kim\n5\nArrowRight\ndownload\n").expect("解析失敗");
    let report = run_replay(&mut controller, &steps, out.path()).expect("再生失敗");
    assert!(report.exported.is_none());
    assert!(report.notices.is_empty());
}

#[test]
fn test_jump_out_of_range_is_script_error() {
    let photos = photo_folder(&["a.jpg"]);
    let out = tempdir().expect("Failed to create temp dir");
    let (mut controller, _) = controller_for(photos.path());

    let steps = parse_script("jump 5").expect("解析失敗");
    let result = run_replay(&mut controller, &steps, out.path());
    assert!(matches!(
        result,
        Err(photo_score::error::PhotoScoreError::Script { line: 1, .. })
    ));
}

#[test]
fn test_digit_zero_commits_ten_on_navigation() {
    let photos = photo_folder(&["a.jpg", "b.jpg"]);
    let out = tempdir().expect("Failed to create temp dir");
    let (mut controller, _) = controller_for(photos.path());

    let steps = parse_script("0").expect("解析失敗");
    run_replay(&mut controller, &steps, out.path()).expect("再生失敗");
    assert_eq!(controller.session().input().text(), "10");
    assert!(controller.session().scores().get("a").is_none());

    let steps = parse_script("ArrowRight").expect("解析失敗");
    run_replay(&mut controller, &steps, out.path()).expect("再生失敗");
    assert_eq!(
        controller.session().scores().get("a").map(|s| s.value()),
        Some(10)
    );
}
