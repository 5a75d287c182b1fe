use anyhow::Result;

/// Copy text to the system clipboard.
///
/// Failures (headless session, denied access) bubble up as errors; the
/// caller reports them on the status line and carries on.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
