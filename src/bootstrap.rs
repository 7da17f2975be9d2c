use std::any::Any;
use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::logging;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "Unknown panic message".to_string()
    }
}

/// Logs the panic, leaves the alternate screen, then defers to the default hook
/// so the message also reaches the restored terminal.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        logging::error(&format!(
            "PANIC:\nMessage: {}\nLocation: {}",
            panic_message(panic_info.payload()),
            location
        ));

        if std::env::var("RUST_BACKTRACE").unwrap_or_default() == "1" {
            logging::error(&format!(
                "Backtrace:\n{:?}",
                std::backtrace::Backtrace::capture()
            ));
        }

        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(panic_info);
    }));
}

/// Raw mode, alternate screen and mouse capture for as long as the session lives.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        logging::debug("Enabled raw mode");

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        logging::debug("Entered alternate screen with mouse capture");

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;

        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            logging::error(&format!("Failed to disable raw mode: {}", err));
        }

        let backend = self.terminal.backend_mut();
        if let Err(err) = execute!(backend, LeaveAlternateScreen, DisableMouseCapture) {
            logging::error(&format!("Failed to leave alternate screen: {}", err));
        }

        if let Err(err) = self.terminal.show_cursor() {
            logging::error(&format!("Failed to show cursor: {}", err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payloads_are_readable() {
        let static_str: Box<dyn Any + Send> = Box::new("gate exploded");
        assert_eq!(panic_message(static_str.as_ref()), "gate exploded");

        let owned: Box<dyn Any + Send> = Box::new(String::from("nav item 9 out of range"));
        assert_eq!(panic_message(owned.as_ref()), "nav item 9 out of range");

        let other: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(other.as_ref()), "Unknown panic message");
    }
}
