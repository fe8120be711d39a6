//! Process interrupt (SIGINT) handling.
//!
//! While a selector holds the terminal, an interrupt is turned into a
//! [`quickpick_core::selector::Key::Interrupt`] by the key reader. At any
//! other time it restores the terminal and exits with status 0.

use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use crate::selection::restore_terminal;

static CAPTURING: AtomicBool = AtomicBool::new(false);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Installs the process-wide handler. Call once, before any session starts.
pub fn install() {
    if let Err(e) = ctrlc::set_handler(on_interrupt) {
        warn!("Could not install interrupt handler: {e}");
    }
}

fn on_interrupt() {
    if CAPTURING.load(Ordering::SeqCst) {
        INTERRUPTED.store(true, Ordering::SeqCst);
        return;
    }

    restore_terminal();
    eprintln!();
    std::process::exit(0);
}

/// Marks whether a session currently owns the terminal input.
pub fn set_capturing(capturing: bool) {
    if capturing {
        INTERRUPTED.store(false, Ordering::SeqCst);
    }
    CAPTURING.store(capturing, Ordering::SeqCst);
}

/// Returns whether an interrupt arrived since the last call, and clears it.
pub fn take() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}
