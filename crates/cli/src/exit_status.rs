//! Process exit status for a finished command.

use quickpick_core::error::Result;

/// Success, including a cancelled selection or an interrupt.
pub const SUCCESS: u8 = 0;
/// Any reported error.
pub const FAILURE: u8 = 1;

/// Maps the result of a command to its exit status.
#[must_use]
pub fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => SUCCESS,
        Err(_) => FAILURE,
    }
}

/// Prints the error of a failed command on stderr and returns the exit status.
pub fn report(result: Result<()>) -> u8 {
    let status = exit_status(&result);
    if let Err(e) = result {
        eprintln!("{e}");
    }
    status
}
