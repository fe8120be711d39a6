//! Integration tests for quickpick-core
//!
//! These tests drive complete sessions against a scripted terminal and walk
//! the branch-switch workflow against an in-memory repository.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Write;
use std::rc::Rc;

use quickpick_core::{
    error::{Error, Result},
    file_handling::get_settings,
    frame::{Frame, SegmentKind},
    git::{recent_branches, VersionControl},
    selector::{Key, Outcome, SelectorConfig},
    session::Session,
    switch::{stash_and_switch, SwitchInteraction},
    terminal::Terminal,
};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Attach,
    Detach { clear: bool },
    Draw(Frame),
}

/// Replays keys and records everything done to the screen.
struct ScriptedTerminal {
    keys: VecDeque<Key>,
    rows: Option<usize>,
    log: Rc<RefCell<Vec<Event>>>,
}

impl ScriptedTerminal {
    fn new(keys: &[Key]) -> (Self, Rc<RefCell<Vec<Event>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let terminal = Self {
            keys: keys.iter().copied().collect(),
            rows: None,
            log: Rc::clone(&log),
        };
        (terminal, log)
    }
}

impl Terminal for ScriptedTerminal {
    fn attach(&mut self) -> Result<()> {
        self.log.borrow_mut().push(Event::Attach);
        Ok(())
    }

    fn detach(&mut self, clear: bool) -> Result<()> {
        self.log.borrow_mut().push(Event::Detach { clear });
        Ok(())
    }

    fn next_key(&mut self) -> Result<Key> {
        Ok(self.keys.pop_front().expect("script ran out of keys"))
    }

    fn rows(&self) -> Result<Option<usize>> {
        Ok(self.rows)
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.log.borrow_mut().push(Event::Draw(frame.clone()));
        Ok(())
    }
}

fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn typed(text: &str) -> Vec<Key> {
    text.chars().map(Key::Char).collect()
}

fn draws(log: &[Event]) -> Vec<&Frame> {
    log.iter()
        .filter_map(|event| match event {
            Event::Draw(frame) => Some(frame),
            _ => None,
        })
        .collect()
}

/// Type a filter, move down, confirm
#[test]
fn test_filter_navigate_select_session() {
    let mut keys = typed("fea");
    keys.extend([Key::Down, Key::Enter]);
    let (terminal, log) = ScriptedTerminal::new(&keys);

    let mut session = Session::new(
        options(&["main", "feature/a", "feature/b"]),
        SelectorConfig::default(),
        terminal,
    )
    .unwrap();

    let outcome = session.run().unwrap();
    assert_eq!(outcome, Outcome::Selected("feature/b".to_string()));

    let log = log.borrow();
    assert_eq!(log.first(), Some(&Event::Attach));
    assert_eq!(log.last(), Some(&Event::Detach { clear: false }));

    // initial draw, three characters, one Down; nothing after Enter
    let frames = draws(&log);
    assert_eq!(frames.len(), 5);

    let last = frames.last().unwrap();
    let rows: Vec<String> = last.lines.iter().map(|line| line.text()).collect();
    assert!(rows[2].starts_with("│ Filter: fea "));
    assert!(rows[4].starts_with("│   feature/a"));
    assert!(rows[5].starts_with("│ > feature/b"));
}

/// Enter on an empty view keeps the session going
#[test]
fn test_enter_with_no_matches_is_absorbed() {
    let mut keys = typed("zz");
    keys.extend([Key::Enter, Key::Interrupt]);
    let (terminal, log) = ScriptedTerminal::new(&keys);

    let mut session = Session::new(options(&["x"]), SelectorConfig::default(), terminal).unwrap();
    let outcome = session.run().unwrap();

    assert_eq!(outcome, Outcome::Cancelled);

    let log = log.borrow();
    let frames = draws(&log);
    // initial, z, z, absorbed Enter
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[2], frames[3]);
    assert_eq!(frames[3].lines[4].segments[1].kind, SegmentKind::NoMatches);
}

/// Interrupt mid-filter cancels and restores the terminal
#[test]
fn test_interrupt_mid_filter_cancels() {
    let mut keys = typed("ma");
    keys.push(Key::Interrupt);
    let (terminal, log) = ScriptedTerminal::new(&keys);

    let mut session = Session::new(
        options(&["main", "dev"]),
        SelectorConfig::default(),
        terminal,
    )
    .unwrap();

    assert_eq!(session.run().unwrap(), Outcome::Cancelled);
    assert!(!session.is_attached());
    assert!(matches!(log.borrow().last(), Some(Event::Detach { .. })));
}

/// Interactive completions get a cleared screen
#[test]
fn test_interactive_completion_clears_on_detach() {
    let (terminal, log) = ScriptedTerminal::new(&[Key::Enter]);
    let config = SelectorConfig::default().with_interactive_completion(true);

    let mut session = Session::new(options(&["main"]), config, terminal).unwrap();
    session.run().unwrap();

    assert_eq!(log.borrow().last(), Some(&Event::Detach { clear: true }));
}

/// Dropping an attached session gives the terminal back
#[test]
fn test_dropped_session_detaches() {
    let (terminal, log) = ScriptedTerminal::new(&[]);
    let mut session =
        Session::new(options(&["main"]), SelectorConfig::default(), terminal).unwrap();

    session.attach().unwrap();
    drop(session);

    assert_eq!(
        *log.borrow(),
        vec![Event::Attach, Event::Detach { clear: false }]
    );
}

/// Short terminals only show a window around the cursor
#[test]
fn test_session_scrolls_in_short_terminal() {
    let values: Vec<String> = (0..20).map(|i| format!("branch-{i:02}")).collect();
    let (mut terminal, log) = ScriptedTerminal::new(&[Key::Up, Key::Enter]);
    terminal.rows = Some(10);

    let mut session = Session::new(values, SelectorConfig::default(), terminal).unwrap();
    assert_eq!(
        session.run().unwrap(),
        Outcome::Selected("branch-19".to_string())
    );

    let log = log.borrow();
    let frames = draws(&log);
    let last = frames.last().unwrap();
    assert_eq!(last.lines.len(), 10);
    assert!(last.lines[8].text().starts_with("│ > branch-19"));
}

#[test]
fn test_settings_workflow() {
    let yaml_content = r#"
title: "Switch to:"
min_width: 40
filter:
  allow_space: true
  extra_characters: "/"
branches:
  recent_limit: 5
  stash_by_default: false
theme:
  highlight:
    name: "magenta"
  border:
    ansi: 45
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let settings = get_settings(&temp_path).unwrap();
    assert_eq!(settings.branches.recent_limit, 5);
    assert!(!settings.branches.stash_by_default);
    assert_eq!(settings.theme.border.as_ref().unwrap().ansi, Some(45));

    let config = settings.selector_config("Select a branch:");
    assert_eq!(config.title, "Switch to:");
    assert_eq!(config.min_width, 40);
    assert!(config.charset.allows('/'));
    assert!(config.charset.allows(' '));
}

struct Repository {
    current: Result<String>,
    reflog: Result<String>,
    branches: Result<String>,
    status: String,
    switched_to: RefCell<Option<String>>,
}

impl Repository {
    fn new(reflog: &str, branches: &str) -> Self {
        Self {
            current: Ok("main".to_string()),
            reflog: Ok(reflog.to_string()),
            branches: Ok(branches.to_string()),
            status: String::new(),
            switched_to: RefCell::new(None),
        }
    }
}

fn copy(result: &Result<String>) -> Result<String> {
    match result {
        Ok(value) => Ok(value.clone()),
        Err(e) => Err(Error::query_failure("git", e)),
    }
}

impl VersionControl for Repository {
    fn current_branch(&self) -> Result<String> {
        copy(&self.current)
    }

    fn reflog_subjects(&self) -> Result<String> {
        copy(&self.reflog)
    }

    fn local_branches(&self) -> Result<String> {
        copy(&self.branches)
    }

    fn status_porcelain(&self) -> Result<String> {
        Ok(self.status.clone())
    }

    fn stash(&self) -> Result<()> {
        Ok(())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        *self.switched_to.borrow_mut() = Some(branch.to_string());
        Ok(())
    }
}

#[test]
fn test_recent_branches_prefers_reflog() {
    let repository = Repository::new(
        "checkout: moving from main to dev\ncheckout: moving from topic to main",
        "dev\nmain\ntopic\nold",
    );
    assert_eq!(recent_branches(&repository, 17), vec!["dev"]);
}

#[test]
fn test_recent_branches_falls_back_to_local_branches() {
    let repository = Repository::new("commit: initial", "dev\nmain\ntopic");
    assert_eq!(recent_branches(&repository, 17), vec!["dev", "topic"]);

    let mut broken_reflog = Repository::new("", "dev\nmain");
    broken_reflog.reflog = Err(Error::EmptyInput);
    assert_eq!(recent_branches(&broken_reflog, 17), vec!["dev"]);
}

#[test]
fn test_recent_branches_query_failure_gives_empty_list() {
    let mut repository = Repository::new("checkout: moving from main to dev", "dev");
    repository.current = Err(Error::EmptyInput);
    assert!(recent_branches(&repository, 17).is_empty());

    // and the selector then refuses to start
    let (terminal, _) = ScriptedTerminal::new(&[]);
    let result = Session::new(
        recent_branches(&repository, 17),
        SelectorConfig::default(),
        terminal,
    );
    assert!(matches!(result, Err(Error::EmptyInput)));
}

struct Decline;

impl SwitchInteraction for Decline {
    fn confirm_stash(&mut self) -> Result<bool> {
        Ok(false)
    }
}

/// Dirty tree, user declines: nothing is switched
#[test]
fn test_pick_then_decline_stash() {
    let mut repository = Repository::new("checkout: moving from main to dev", "dev\nmain");
    repository.status = " M README.md\n".to_string();

    let (terminal, _) = ScriptedTerminal::new(&[Key::Enter]);
    let config = SelectorConfig::default().with_interactive_completion(true);
    let mut session =
        Session::new(recent_branches(&repository, 17), config, terminal).unwrap();

    let Outcome::Selected(branch) = session.run().unwrap() else {
        panic!("expected a selection");
    };
    assert_eq!(branch, "dev");

    let result = stash_and_switch(&repository, &mut Decline, &branch);
    assert!(matches!(result, Err(Error::StashDeclined)));
    assert!(repository.switched_to.borrow().is_none());
}
