//! Tests for version mode

use super::{stdout, teleji};
use teleji::commands::VERSION;

#[test]
fn test_version_word_prints_only_version() {
    let output = teleji(&["version"], &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}\n", VERSION));
}

#[test]
fn test_version_flag_ignores_environment() {
    let output = teleji(
        &["--version"],
        &[("TgChatId", "not-a-number"), ("TgMessageId", "1,2,3")],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}\n", VERSION));
}
