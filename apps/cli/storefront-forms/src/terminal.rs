//! Terminal implementation of the page seams.
//!
//! Alerts are printed as lines; navigation resolves the target against the
//! page currently "open" and prints where the browser would have gone.

use storefront_client::page::{Navigator, Notifier, PageLocation};

use std::io::{Stdout, Write, stdout};
use std::sync::Mutex;

use log::{info, warn};
use url::Url;

const ALERT_PREFIX: &str = "[!] ";
const NAVIGATION_PREFIX: &str = "--> ";

#[derive(Debug)]
pub struct TerminalPage<W: Write = Stdout> {
    location: Mutex<PageLocation>,
    out: Mutex<W>,
    visited: Mutex<Vec<Url>>,
}

impl TerminalPage<Stdout> {
    pub fn stdout(location: PageLocation) -> Self {
        Self::new(location, stdout())
    }
}

impl<W: Write> TerminalPage<W> {
    pub fn new(location: PageLocation, out: W) -> Self {
        Self {
            location: Mutex::new(location),
            out: Mutex::new(out),
            visited: Mutex::new(Vec::new()),
        }
    }

    /// Open a different page, as when following a link from an e-mail.
    pub fn visit(&self, location: PageLocation) {
        if let Ok(mut current) = self.location.lock() {
            *current = location;
        }
    }

    pub fn location(&self) -> Option<PageLocation> {
        self.location.lock().ok().map(|location| location.clone())
    }

    /// Every URL navigated to, in order.
    pub fn visited(&self) -> Vec<Url> {
        self.visited
            .lock()
            .map(|visited| visited.clone())
            .unwrap_or_default()
    }

    pub fn into_output(self) -> Option<W> {
        self.out.into_inner().ok()
    }

    fn write_line(&self, prefix: &str, line: &str) {
        let Ok(mut out) = self.out.lock() else {
            warn!("Terminal output lock poisoned, dropping: {line}");
            return;
        };
        if let Err(e) = writeln!(out, "{prefix}{line}").and_then(|()| out.flush()) {
            warn!("Failed to write to terminal: {e}");
        }
    }
}

impl<W: Write> Notifier for TerminalPage<W> {
    fn alert(&self, message: &str) {
        self.write_line(ALERT_PREFIX, message);
    }
}

impl<W: Write> Navigator for TerminalPage<W> {
    fn assign(&self, path: &str) {
        let Some(current) = self.location() else {
            warn!("Page location unavailable, cannot navigate to {path}");
            return;
        };

        match current.resolve(path) {
            Ok(target) => {
                info!("Navigating to {target}");
                self.write_line(NAVIGATION_PREFIX, target.as_str());
                if let Ok(mut visited) = self.visited.lock() {
                    visited.push(target.clone());
                }
                self.visit(PageLocation::from(target));
            }
            Err(e) => warn!("Cannot navigate to {path}: {e}"),
        }
    }
}
