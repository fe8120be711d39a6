use std::io::{stderr, stdout};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use quickpick_cli::cli_args::{Args, Commands};
use quickpick_cli::selection::{install_panic_hook, CrosstermTerminal, TerminalPrompt, Theme};
use quickpick_cli::{exit_status, interrupt};
use quickpick_core::error::Result;
use quickpick_core::git::{recent_branches, Git};
use quickpick_core::selector::{Outcome, DEFAULT_TITLE};
use quickpick_core::session::Session;
use quickpick_core::settings::Settings;
use quickpick_core::switch::stash_and_switch;
use quickpick_core::{config, file_handling};

const SWITCH_TITLE: &str = "Select a branch:";

/// Load the settings file and apply command-line overrides
fn initialize_settings(args: &Args) -> Result<Settings> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    let mut settings = file_handling::get_settings(&config_path)?;
    args.apply_overrides(&mut settings);
    Ok(settings)
}

/// Pick one of `options` and print it on stdout.
///
/// The box is drawn on stderr so the choice can be captured, e.g.
/// `git checkout "$(qp pick main dev)"`.
fn pick(options: Vec<String>, settings: &Settings) -> Result<()> {
    let config = settings.selector_config(DEFAULT_TITLE);
    let terminal = CrosstermTerminal::new(stderr(), Theme::from_settings(&settings.theme)?);

    let mut session = Session::new(options, config, terminal)?;
    match session.run()? {
        Outcome::Selected(option) => println!("{option}"),
        Outcome::Cancelled => info!("Selection cancelled"),
    }

    Ok(())
}

/// Pick a recent branch, then stash if needed and switch to it
fn switch_branch(settings: &Settings, no_stash_prompt: bool) -> Result<()> {
    let git = Git;
    let branches = recent_branches(&git, settings.branches.recent_limit);

    let config = settings
        .selector_config(SWITCH_TITLE)
        .with_interactive_completion(true);
    let terminal = CrosstermTerminal::new(stdout(), Theme::from_settings(&settings.theme)?);

    let mut session = Session::new(branches, config, terminal)?;
    let outcome = session.run()?;
    // The terminal is released before anything else prompts
    drop(session);

    let Outcome::Selected(branch) = outcome else {
        info!("Branch selection cancelled");
        return Ok(());
    };

    let mut prompt = TerminalPrompt::new(settings.branches.stash_by_default, !no_stash_prompt);
    stash_and_switch(&git, &mut prompt, &branch)
}

fn execute() -> Result<()> {
    let args = Args::parse();
    let settings = initialize_settings(&args)?;

    match args.command {
        Commands::Pick { options } => pick(options, &settings),
        Commands::Switch { no_stash_prompt } => switch_branch(&settings, no_stash_prompt),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    install_panic_hook();
    interrupt::install();

    ExitCode::from(exit_status::report(execute()))
}
