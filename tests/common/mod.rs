#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn newsboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("newsboard").unwrap();
    cmd.env_remove("NEWSBOARD_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create a temp directory with an initialized board
pub fn init_board() -> TempDir {
    let temp = TempDir::new().unwrap();
    newsboard_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Add an item through the CLI and return its id
pub fn add_news(board: &Path, title: &str, content: &str) -> String {
    let output = newsboard_cmd()
        .current_dir(board)
        .arg("add")
        .arg(title)
        .arg(content)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

pub fn stored_news(board: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(board.join(".newsboard/storage/news.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

pub fn write_stored_news(board: &Path, raw: &str) {
    std::fs::write(board.join(".newsboard/storage/news.json"), raw).unwrap();
}
