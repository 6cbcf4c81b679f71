// 実際にツールを起動するエンドツーエンドテスト
// エントリ自体をシェルスクリプトにし、`sh` をツールとして使う
use crate::fixtures::*;
use std::fs;

#[test]
fn test_converts_every_entry() {
    let workspace = Workspace::new();
    let names = ["a.sh", "b.sh", "c.sh", "d.sh", "e.sh"];
    create_script_entries(workspace.source.path(), &names);

    let output = run_binary([
        workspace.source_path(),
        workspace.save_path(),
        "2",
        "--tool",
        "sh",
        "--tool-dir",
        workspace.source_path(),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("file count :5"));

    let mut rest: Vec<&str> = lines.collect();
    rest.sort();
    let expected: Vec<String> = names.iter().map(|n| format!("converted {n}")).collect();
    assert_eq!(rest, expected);

    for name in names {
        let written = workspace.save.path().join(format!("{name}.out"));
        assert_eq!(fs::read_to_string(written).unwrap().trim(), name);
    }
}

#[test]
fn test_empty_source_directory() {
    let workspace = Workspace::new();

    let output = run_binary([
        workspace.source_path(),
        workspace.save_path(),
        "4",
        "--tool",
        "sh",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "file count :0");
}

#[test]
fn test_subdirectories_are_counted() {
    let workspace = Workspace::new();
    create_script_entries(workspace.source.path(), &["a.sh"]);
    fs::create_dir(workspace.source.path().join("nested")).unwrap();

    let output = run_binary([
        workspace.source_path(),
        workspace.save_path(),
        "1",
        "--tool",
        "sh",
        "--tool-dir",
        workspace.source_path(),
    ]);

    // ディレクトリを sh に渡すと失敗するが、バッチ全体は成功扱い
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("file count :2"));
}

#[test]
fn test_missing_tool_does_not_fail_batch() {
    let workspace = Workspace::new();
    create_script_entries(workspace.source.path(), &["a.sh", "b.sh"]);

    let output = run_binary([
        workspace.source_path(),
        workspace.save_path(),
        "2",
        "--tool",
        "./no_such_tool.sh",
        "--tool-dir",
        workspace.save_path(),
    ]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "file count :2");
    assert!(stderr_of(&output).contains("conversion failed"));
    // パイプへのログには色付けしない
    assert!(!stderr_of(&output).contains('\x1b'));
}

#[test]
fn test_tool_from_environment() {
    let workspace = Workspace::new();
    create_script_entries(workspace.source.path(), &["only.sh"]);

    let output = base_command()
        .args([workspace.source_path(), workspace.save_path(), "1"])
        .env("BATCH_CONVERT_TOOL", "sh")
        .env("BATCH_CONVERT_TOOL_DIR", workspace.source_path())
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("converted only.sh"));
}

#[test]
fn test_json_report() {
    let workspace = Workspace::new();
    create_script_entries(workspace.source.path(), &["ok.sh"]);
    fs::write(workspace.source.path().join("bad.sh"), "exit 3\n").unwrap();
    let report_dir = tempfile::TempDir::new().unwrap();
    let report_path = report_dir.path().join("report.json");

    let output = run_binary([
        workspace.source_path(),
        workspace.save_path(),
        "2",
        "--tool",
        "sh",
        "--tool-dir",
        workspace.source_path(),
        "--report",
        report_path.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["summary"]["total_items"], 2);
    assert_eq!(json["summary"]["completed_items"], 2);
    assert_eq!(json["summary"]["nonzero_exit_items"], 1);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
}

#[test]
fn test_timeout_marks_item_failed() {
    let workspace = Workspace::new();
    fs::write(workspace.source.path().join("slow.sh"), "exec sleep 5\n").unwrap();
    let report_dir = tempfile::TempDir::new().unwrap();
    let report_path = report_dir.path().join("report.json");

    let output = run_binary([
        workspace.source_path(),
        workspace.save_path(),
        "1",
        "--tool",
        "sh",
        "--tool-dir",
        workspace.source_path(),
        "--timeout-secs",
        "1",
        "--report",
        report_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["summary"]["failed_items"], 1);
    assert_eq!(json["items"][0]["status"], "failed");
}

#[test]
fn test_huge_thread_count() {
    let workspace = Workspace::new();

    let output = run_binary([
        workspace.source_path(),
        workspace.save_path(),
        "1099511627776",
        "--tool",
        "sh",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "file count :0");

    create_script_entries(workspace.source.path(), &["one.sh"]);

    let output = run_binary([
        workspace.source_path(),
        workspace.save_path(),
        "1099511627776",
        "--tool",
        "sh",
        "--tool-dir",
        workspace.source_path(),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("converted one.sh"));
}

#[test]
fn test_relative_tool_dir() {
    let workspace = Workspace::new();
    create_script_entries(workspace.source.path(), &["a.sh"]);
    let base = tempfile::TempDir::new().unwrap();
    fs::create_dir(base.path().join("tools")).unwrap();
    std::os::unix::fs::symlink("/bin/sh", base.path().join("tools").join("tool")).unwrap();

    let output = base_command()
        .current_dir(base.path())
        .args([
            workspace.source_path(),
            workspace.save_path(),
            "1",
            "--tool",
            "./tool",
            "--tool-dir",
            "tools",
        ])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("converted a.sh"));
    assert!(!stderr_of(&output).contains("conversion failed"));
}
