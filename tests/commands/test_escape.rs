//! Tests for escape mode

use super::{stdout, teleji};

#[test]
fn test_escape_reads_message_text() {
    let output = teleji(&["escape"], &[("TgMessageText", "  v1.2 (rc-1)!  ")]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "v1\\.2 \\(rc\\-1\\)\\!\n");
}

#[test]
fn test_escape_reads_named_variable() {
    let output = teleji(
        &["escape", "CommitTitle"],
        &[("TgMessageText", "ignored"), ("CommitTitle", "fix: a_b")],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "fix: a\\_b\n");
}

#[test]
fn test_escape_needs_no_token() {
    let output = teleji(&["escape"], &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_escape_accepts_hyphenated_var_name() {
    let output = teleji(
        &["escape", "--version"],
        &[("TgMessageText", "ignored"), ("TgToken", "42:TEST"), ("TgChatId", "1")],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\n");
}
