//! Edge case tests for dirsketch


use harness::{TestTree, run_dirsketch};

// ============================================================================
// Empty and Minimal Trees
// ============================================================================

#[test]
fn test_empty_directory_output_is_exactly_the_header() {
    let tree = TestTree::new();
    tree.add_dir("proj");

    let (stdout, _stderr, success) = run_dirsketch(tree.path(), &["proj"]);
    assert!(success);
    assert_eq!(stdout, "proj/\n");
}

#[test]
fn test_empty_subdirectory_is_listed() {
    let tree = TestTree::new();
    tree.add_dir("proj/empty");

    let (stdout, _stderr, success) = run_dirsketch(tree.path(), &["proj"]);
    assert!(success);
    assert_eq!(stdout, "proj/\n└── empty/\n");
}

#[test]
fn test_single_file() {
    let tree = TestTree::new();
    tree.add_file("proj/only.txt", "");

    let (stdout, _stderr, success) = run_dirsketch(tree.path(), &["proj"]);
    assert!(success);
    assert_eq!(stdout, "proj/\n└── only.txt\n");
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlinked_directory_skipped() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::new();
    tree.add_file("proj/real/file.txt", "");
    symlink(tree.path().join("proj/real"), tree.path().join("proj/link"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_dirsketch(tree.path(), &["proj"]);
    assert!(success);
    assert!(stdout.contains("real"));
    assert!(!stdout.contains("link"), "symlinked dir shown: {}", stdout);
}

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_no_infinite_loop() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::new();
    tree.add_file("proj/subdir/file.txt", "");
    symlink("..", tree.path().join("proj/subdir/parent")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_dirsketch(tree.path(), &["proj"]);
    assert!(success, "should not hang on parent symlink");
    assert!(stdout.contains("file.txt"));
    assert!(!stdout.contains("parent"));
}

#[test]
#[cfg(unix)]
fn test_symlinked_file_listed() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::new();
    tree.add_file("proj/target.txt", "");
    symlink(
        tree.path().join("proj/target.txt"),
        tree.path().join("proj/alias.txt"),
    )
    .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_dirsketch(tree.path(), &["proj"]);
    assert!(success);
    assert_eq!(stdout, "proj/\n├── alias.txt\n└── target.txt\n");
}

#[test]
#[cfg(unix)]
fn test_broken_symlink_omitted() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::new();
    tree.add_file("proj/real.txt", "");
    symlink("nonexistent.txt", tree.path().join("proj/broken.txt"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_dirsketch(tree.path(), &["proj"]);
    assert!(success);
    assert_eq!(stdout, "proj/\n└── real.txt\n");
}

// ============================================================================
// Names and Nesting
// ============================================================================

#[test]
fn test_unicode_names() {
    let tree = TestTree::new();
    tree.add_file("proj/résumé.txt", "");
    tree.add_dir("proj/数据");

    let (stdout, _stderr, success) = run_dirsketch(tree.path(), &["proj"]);
    assert!(success);
    assert!(stdout.contains("résumé.txt"));
    assert!(stdout.contains("数据/"));
}

#[test]
fn test_deep_nesting_prefixes() {
    let tree = TestTree::new();
    tree.add_file("proj/a/a.txt", "");
    tree.add_file("proj/a/b/c/leaf", "");
    tree.add_dir("proj/z");

    let (stdout, _stderr, success) = run_dirsketch(tree.path(), &["proj"]);
    assert!(success);
    let expected = "\
proj/
├── a/
│   ├── a.txt
│   └── b/
│       └── c/
│           └── leaf
└── z/
";
    assert_eq!(stdout, expected);
}

#[test]
fn test_glob_ignore_pattern() {
    let tree = TestTree::new();
    tree.add_dir("proj/build");
    tree.add_dir("proj/build_debug");
    tree.add_dir("proj/src");

    let (stdout, _stderr, success) = run_dirsketch(tree.path(), &["proj", "-I", "build*"]);
    assert!(success);
    assert!(!stdout.contains("build"));
    assert!(stdout.contains("src"));
}

#[test]
fn test_hidden_entries_are_listed() {
    let tree = TestTree::new();
    tree.add_file("proj/.hidden", "");
    tree.add_dir("proj/.config");

    let (stdout, _stderr, success) = run_dirsketch(tree.path(), &["proj"]);
    assert!(success);
    assert!(stdout.contains(".hidden"));
    assert!(stdout.contains(".config/"));
}
