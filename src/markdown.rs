//! MarkdownV2 escaping helpers.
//!
//! See <https://core.telegram.org/bots/api#markdownv2-style>.

/// Parse mode forced by preformatted messages.
pub const MARKDOWN_V2: &str = "MarkdownV2";

/// Characters that must be backslash-escaped in MarkdownV2 text.
pub const RESERVED: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.',
    '!',
];

/// Characters that must be escaped inside a ``` code block.
pub const PRE_RESERVED: &[char] = &['\\', '`'];

/// Prefix every character from `reserved` with a backslash.
///
/// Each input character is looked at exactly once, so backslashes added here
/// are never escaped a second time.
pub fn escape_chars(text: &str, reserved: &[char]) -> String {
    let extra = text.chars().filter(|c| reserved.contains(c)).count();
    let mut escaped = String::with_capacity(text.len() + extra);
    for c in text.chars() {
        if reserved.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape plain text so it renders literally with `parse_mode=MarkdownV2`.
pub fn escape_markdown_v2(text: &str) -> String {
    escape_chars(text, RESERVED)
}

/// Wrap text in a fenced code block, escaping what the block requires.
pub fn preformat(text: &str) -> String {
    format!("```\n{}\n```", escape_chars(text, PRE_RESERVED))
}
