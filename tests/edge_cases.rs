//! Edge case and error handling tests for filelister


use filelister::FileNode;
use harness::{TestDir, run_filelister, split_summary};
use std::fs;

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlink_to_file() {
    let dir = TestDir::new();
    dir.add_file("target.txt", "t");
    dir.add_symlink("target.txt", "link");

    let (stdout, _stderr, success) = run_filelister(dir.path(), &["-p", ".", "-o", "json"]);
    assert!(success);

    let (body, _) = split_summary(&stdout);
    let root: FileNode = serde_json::from_str(body).unwrap();
    let link = root.child("link").unwrap();
    assert!(link.is_link);
    assert_eq!(link.links_to, "target.txt");
    assert!(!link.is_dir);

    let (text, _, _) = run_filelister(dir.path(), &["-p", "."]);
    assert!(text.contains("link* (target.txt)\n"), "got: {}", text);
}

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.txt", "f");
    dir.add_symlink("..", "subdir/parent");

    let (stdout, _stderr, success) = run_filelister(dir.path(), &["-p", ".", "-r"]);
    assert!(success, "filelister should not hang on parent symlink");
    assert!(stdout.contains("subdir/\n"));
    assert!(stdout.contains("  parent* (..)\n"), "got: {}", stdout);
    assert!(stdout.ends_with("Total Directories: 1\n"));
}

#[test]
#[cfg(unix)]
fn test_broken_symlink() {
    let dir = TestDir::new();
    dir.add_file("real.txt", "r");
    dir.add_symlink("nonexistent.txt", "broken");

    let (stdout, _stderr, success) = run_filelister(dir.path(), &["-p", "."]);
    assert!(success, "filelister should handle broken symlinks");
    assert!(stdout.contains("real.txt\n"));
    assert!(stdout.contains("broken* (nonexistent.txt)\n"));
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
#[cfg(unix)]
fn test_unreadable_directory() {
    let dir = TestDir::new();
    dir.add_file("readable/file.txt", "r");
    dir.add_file("unreadable/hidden.txt", "h");
    dir.set_mode("unreadable", 0o000);

    let listable = fs::read_dir(dir.path().join("unreadable")).is_ok();
    let (stdout, stderr, success) = run_filelister(dir.path(), &["-p", ".", "-r"]);

    // Restore permissions for cleanup
    dir.set_mode("unreadable", 0o755);

    assert!(
        success,
        "filelister should handle unreadable directories gracefully"
    );
    assert!(stdout.contains("readable/\n  file.txt\n"), "got: {}", stdout);
    assert!(stdout.ends_with("Total Directories: 2\n"));
    if !listable {
        assert!(!stdout.contains("hidden.txt"));
        assert!(
            stderr.contains("filelister: Error reading directory"),
            "stderr: {}",
            stderr
        );
    }
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let dir = TestDir::new();
    dir.add_file("file with spaces.txt", "s");
    dir.add_file("dir with spaces/nested.txt", "n");

    let (stdout, _stderr, success) = run_filelister(dir.path(), &["-p", ".", "-r"]);
    assert!(success);
    assert!(stdout.contains("file with spaces.txt\n"));
    assert!(stdout.contains("dir with spaces/\n  nested.txt\n"));
}

#[test]
fn test_filename_with_unicode() {
    let dir = TestDir::new();
    dir.add_file("日本語.txt", "j");
    dir.add_file("émoji_🎉.txt", "e");
    dir.add_file("中文目录/文件.txt", "c");

    let (stdout, _stderr, success) = run_filelister(dir.path(), &["-p", ".", "-r", "-o", "yaml"]);
    assert!(success, "filelister should handle unicode filenames");
    assert!(stdout.contains("日本語.txt"));
    assert!(stdout.contains("émoji_🎉.txt"));
    assert!(stdout.contains("中文目录"));
    assert!(stdout.contains("文件.txt"));
}

// ============================================================================
// Root Path Variants
// ============================================================================

#[test]
fn test_root_is_a_file() {
    let dir = TestDir::new();
    dir.add_file("single.txt", "abc");

    let (stdout, _stderr, success) =
        run_filelister(dir.path(), &["-p", "single.txt", "-o", "json"]);
    assert!(success);

    let (body, summary) = split_summary(&stdout);
    let root: FileNode = serde_json::from_str(body).unwrap();
    assert_eq!(root.name, "single.txt");
    assert_eq!(root.size, 3);
    assert!(!root.is_dir);
    assert_eq!(summary, "Total files: 0\nTotal Directories: 0\n");
}

#[test]
fn test_absolute_root_uses_base_name() {
    let dir = TestDir::new();
    let project = dir.add_dir("project");
    dir.add_file("project/main.txt", "m");

    let project = project.to_string_lossy().to_string();
    let (stdout, _stderr, success) = run_filelister(dir.path(), &["-p", &project, "-o", "json"]);
    assert!(success);

    let (body, _) = split_summary(&stdout);
    let root: FileNode = serde_json::from_str(body).unwrap();
    assert_eq!(root.name, "project");
    assert_eq!(root.children[0].name, "main.txt");
}
