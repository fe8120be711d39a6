//! Stash-and-switch completion for the branch picker.

use log::info;

use crate::error::{Error, Result};
use crate::git::{is_dirty, VersionControl};

/// The user-facing side of a branch switch.
pub trait SwitchInteraction {
    /// Asks whether uncommitted changes should be stashed.
    fn confirm_stash(&mut self) -> Result<bool>;

    /// Called right before the stash runs.
    fn stashing(&mut self) {}

    /// Called right before the checkout runs.
    fn switching(&mut self, _branch: &str) {}
}

/// Switches to `branch`, offering to stash first if the working tree is dirty.
///
/// # Errors
///
/// - [`Error::StashDeclined`] if the user does not want to stash; nothing is switched
/// - [`Error::ActionFailure`] if the stash or the checkout fails
pub fn stash_and_switch<V, I>(vcs: &V, interaction: &mut I, branch: &str) -> Result<()>
where
    V: VersionControl,
    I: SwitchInteraction,
{
    if is_dirty(vcs) {
        if !interaction.confirm_stash()? {
            info!("Stash declined, not switching to `{branch}`");
            return Err(Error::StashDeclined);
        }

        interaction.stashing();
        vcs.stash()
            .map_err(|_| Error::action_failure("stash changes. Aborting branch switch"))?;
    }

    interaction.switching(branch);
    vcs.checkout(branch)
}
