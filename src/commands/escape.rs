//! Print MarkdownV2-escaped text from an environment variable

use std::io::Write;

use crate::config::env_var;
use crate::error::Result;
use crate::markdown::escape_markdown_v2;

/// Escape the trimmed contents of a variable; unset reads as empty.
pub fn escape_value(value: Option<&str>) -> String {
    escape_markdown_v2(value.unwrap_or_default().trim())
}

/// Write the escaped value of `var_name` followed by a newline.
pub fn write_escaped<W: Write>(var_name: &str, out: &mut W) -> Result<()> {
    let value = env_var(var_name)?;
    writeln!(out, "{}", escape_value(value.as_deref()))?;
    Ok(())
}

/// CLI entry point
pub fn run(var_name: &str) -> Result<()> {
    write_escaped(var_name, &mut std::io::stdout())
}
