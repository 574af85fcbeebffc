//! Terminal state guard for guaranteed cleanup.
//!
//! Restores the terminal when the player exits, whether normally, via an
//! early `?` return, or a panic (together with [`install_panic_hook`]).

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Owns raw mode + alternate screen for as long as it lives
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Restore explicitly so errors can be reported; Drop becomes a no-op
    pub fn restore(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = restore_terminal() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

fn restore_terminal() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
    stdout.flush()?;
    Ok(())
}

/// Restore the terminal before the default hook prints the panic message
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore_terminal() {
            tracing::debug!(error = %e, "Failed to restore terminal in panic hook");
        }
        original_hook(panic_info);
    }));
}
