// 引数チェックと終了コードのテスト
use crate::fixtures::*;
use std::fs;

const USAGE: &str = "usage : batch_convert ${source_path} ${save_path} ${thread_count}";

#[test]
fn test_too_few_arguments_prints_usage() {
    let workspace = Workspace::new();

    let output = run_binary([workspace.source_path(), workspace.save_path()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output).trim(), USAGE);
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = run_binary(Vec::<&str>::new());

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains(USAGE));
}

#[test]
fn test_too_many_arguments_prints_usage() {
    let workspace = Workspace::new();

    let output = run_binary([workspace.source_path(), workspace.save_path(), "2", "extra"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains(USAGE));
}

#[test]
fn test_source_is_not_directory() {
    let workspace = Workspace::new();
    let file = workspace.source.path().join("game.ngf");
    fs::write(&file, b"dummy").unwrap();

    let output = run_binary([file.to_str().unwrap(), workspace.save_path(), "2"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output).trim(),
        "Please check the source folder path is valid!"
    );
}

#[test]
fn test_save_dir_missing() {
    let workspace = Workspace::new();
    let missing = workspace.save.path().join("missing");

    let output = run_binary([workspace.source_path(), missing.to_str().unwrap(), "2"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output).trim(),
        "Please check the save folder path is valid !"
    );
}

#[test]
fn test_invalid_thread_count() {
    let workspace = Workspace::new();

    for count in ["0", "-3", "many"] {
        let output = run_binary([workspace.source_path(), workspace.save_path(), count]);

        assert_eq!(output.status.code(), Some(1), "thread count {count}");
        assert!(stdout_of(&output).contains(count));
        assert!(!stdout_of(&output).contains("file count"));
    }
}

#[test]
fn test_help_exits_successfully() {
    let output = run_binary(["--help"]);

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("batch_convert"));
}
