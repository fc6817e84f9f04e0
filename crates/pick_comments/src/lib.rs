// crates/pick_comments/src/lib.rs

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use console_input::{yes_or_no, LineReader};
use feedback_store::CommentStore;

/// Prefix put in front of every chosen comment in the feedback text.
const BULLET: &str = "\t\u{2022} ";

/// One feedback-selection session for a single task.
///
/// Holds the stored comments loaded once at session start (the selectable
/// options, fixed for the session's lifetime) and the selection list built up
/// from them. The interactive loop in [`run_feedback_session`] drives the
/// transitions; the transitions themselves are plain methods so they can be
/// exercised without any I/O.
pub struct FeedbackSession {
    comments: Vec<String>,
    selection: Vec<String>,
}

/// What one line of menu input asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Append the stored comment at this zero-based index.
    Choose(usize),
    DeleteLast,
    AddNew,
    Exit,
}

impl FeedbackSession {
    pub fn new(comments: Vec<String>) -> Self {
        Self {
            comments,
            selection: Vec::new(),
        }
    }

    /// The stored comments available as numbered options.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// The selection list accumulated so far, bullet-prefixed.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Appends the stored comment at `index` to the selection list.
    pub fn choose(&mut self, index: usize) {
        let comment = self.comments[index].clone();
        self.selection.push(bullet_line(&comment));
    }

    /// Appends a freshly typed comment to the selection list.
    pub fn add(&mut self, text: &str) {
        self.selection.push(bullet_line(text));
    }

    /// Removes the most recent selection. Returns `false` when there is
    /// nothing to remove, leaving the session untouched.
    pub fn delete_last(&mut self) -> bool {
        self.selection.pop().is_some()
    }

    /// Consumes the session, joining the selection list with newlines and
    /// appending one trailing newline.
    pub fn into_feedback(self) -> String {
        let mut feedback = self.selection.join("\n");
        feedback.push('\n');
        feedback
    }
}

/// Maps one line of menu input onto an action. Numeric input selects a
/// stored comment and is validated against `option_count`; anything that is
/// neither a reserved key nor an in-range number is rejected as `None`.
pub fn parse_menu_action(text: &str, option_count: usize) -> Option<MenuAction> {
    match text {
        "b" => Some(MenuAction::DeleteLast),
        "n" => Some(MenuAction::AddNew),
        "e" => Some(MenuAction::Exit),
        _ => match text.parse::<usize>() {
            Ok(number) if number >= 1 && number <= option_count => {
                Some(MenuAction::Choose(number - 1))
            }
            _ => None,
        },
    }
}

/// Runs the interactive feedback loop for the task whose comment store lives
/// at `path`, and returns the joined feedback text.
///
/// Each iteration echoes the selection so far, redraws the menu of stored
/// comments plus the reserved actions, and applies one transition. New
/// comments are optionally persisted to the store before joining the
/// selection list.
pub fn run_feedback_session(
    input: &mut dyn LineReader,
    store: &mut dyn CommentStore,
    path: &Path,
) -> Result<String> {
    let comments = store.read(path)?;
    let mut session = FeedbackSession::new(comments);

    loop {
        if !session.selection().is_empty() {
            println!("{}", session.selection().join("\n"));
        }
        print_menu(session.comments());

        let text = input.read_line("Enter input: ")?;
        match parse_menu_action(&text, session.comments().len()) {
            None => {
                println!("{}", "Please input a valid option".red().bold());
                continue;
            }
            Some(MenuAction::DeleteLast) => {
                if !session.delete_last() {
                    println!("{}", "There is nothing to delete.".red().bold());
                    continue;
                }
            }
            Some(MenuAction::AddNew) => {
                let response = input.read_line("Add a comment: ")?;
                if yes_or_no(input, "Would you like to save?")? {
                    store.append(path, &response)?;
                }
                session.add(&response);
            }
            Some(MenuAction::Exit) => break,
            Some(MenuAction::Choose(index)) => session.choose(index),
        }
        println!();
    }

    Ok(session.into_feedback())
}

fn print_menu(comments: &[String]) {
    for (index, comment) in comments.iter().enumerate() {
        println!("[{}] {}", index + 1, trim_line_end(comment));
    }
    println!("[b] Delete a comment");
    println!("[n] Add a new comment");
    println!("[e] Exit");
}

fn bullet_line(text: &str) -> String {
    format!("{}{}", BULLET, trim_line_end(text))
}

fn trim_line_end(text: &str) -> &str {
    text.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_input::ScriptedLines;
    use feedback_store::{FileStore, MemoryStore};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn store_path() -> PathBuf {
        PathBuf::from("part a_task 1.txt")
    }

    #[test]
    fn test_parse_reserved_keys() {
        assert_eq!(parse_menu_action("b", 0), Some(MenuAction::DeleteLast));
        assert_eq!(parse_menu_action("n", 0), Some(MenuAction::AddNew));
        assert_eq!(parse_menu_action("e", 0), Some(MenuAction::Exit));
    }

    #[test]
    fn test_parse_numeric_options_validated_against_bounds() {
        assert_eq!(parse_menu_action("1", 2), Some(MenuAction::Choose(0)));
        assert_eq!(parse_menu_action("2", 2), Some(MenuAction::Choose(1)));
        assert_eq!(parse_menu_action("0", 2), None);
        assert_eq!(parse_menu_action("3", 2), None);
        assert_eq!(parse_menu_action("1", 0), None);
        assert_eq!(parse_menu_action("x", 2), None);
        assert_eq!(parse_menu_action("", 2), None);
        assert_eq!(parse_menu_action("-1", 2), None);
    }

    #[test]
    fn test_selection_length_tracks_actions() {
        let mut session =
            FeedbackSession::new(vec!["One\n".to_string(), "Two\n".to_string()]);
        session.choose(0);
        session.add("Three");
        session.choose(1);
        assert_eq!(session.selection().len(), 3);

        assert!(session.delete_last());
        assert_eq!(session.selection().len(), 2);
        assert!(session.delete_last());
        assert!(session.delete_last());
        // Deleting past empty reports failure and never goes negative.
        assert!(!session.delete_last());
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_selection_preserves_choice_order() {
        let mut session =
            FeedbackSession::new(vec!["One\n".to_string(), "Two\n".to_string()]);
        session.choose(1);
        session.choose(0);
        assert_eq!(session.selection(), ["\t\u{2022} Two", "\t\u{2022} One"]);
    }

    #[test]
    fn test_empty_session_feedback_is_a_single_newline() {
        let session = FeedbackSession::new(Vec::new());
        assert_eq!(session.into_feedback(), "\n");
    }

    #[test]
    fn test_session_with_stored_comments() {
        let path = store_path();
        let mut store = MemoryStore::with_comments(
            path.clone(),
            &["Good structure", "Needs more comments"],
        );
        let mut input = ScriptedLines::new(["1", "2", "e"]);

        let feedback = run_feedback_session(&mut input, &mut store, &path).unwrap();
        assert_eq!(
            feedback,
            "\t\u{2022} Good structure\n\t\u{2022} Needs more comments\n"
        );
    }

    #[test]
    fn test_new_comment_declined_save_leaves_store_untouched() {
        let path = store_path();
        let mut store = MemoryStore::new();
        let mut input = ScriptedLines::new(["n", "Great job", "n", "e"]);

        let feedback = run_feedback_session(&mut input, &mut store, &path).unwrap();
        assert_eq!(feedback, "\t\u{2022} Great job\n");
        assert_eq!(store.contents(&path), None);
    }

    #[test]
    fn test_new_comment_saved_to_store() {
        let path = store_path();
        let mut store = MemoryStore::new();
        let mut input = ScriptedLines::new(["n", "Watch your indentation", "y", "e"]);

        let feedback = run_feedback_session(&mut input, &mut store, &path).unwrap();
        assert_eq!(feedback, "\t\u{2022} Watch your indentation\n");
        assert_eq!(store.contents(&path), Some("Watch your indentation\n"));
    }

    #[test]
    fn test_delete_removes_last_selection() {
        let path = store_path();
        let mut store = MemoryStore::with_comments(path.clone(), &["One", "Two"]);
        let mut input = ScriptedLines::new(["1", "2", "b", "e"]);

        let feedback = run_feedback_session(&mut input, &mut store, &path).unwrap();
        assert_eq!(feedback, "\t\u{2022} One\n");
    }

    #[test]
    fn test_delete_on_empty_selection_is_reported_not_fatal() {
        let path = store_path();
        let mut store = MemoryStore::with_comments(path.clone(), &["One"]);
        let mut input = ScriptedLines::new(["b", "1", "e"]);

        let feedback = run_feedback_session(&mut input, &mut store, &path).unwrap();
        assert_eq!(feedback, "\t\u{2022} One\n");
    }

    #[test]
    fn test_invalid_input_leaves_selection_unchanged() {
        let path = store_path();
        let mut store = MemoryStore::with_comments(path.clone(), &["One"]);
        let mut input = ScriptedLines::new(["z", "7", "yes", "1", "e"]);

        let feedback = run_feedback_session(&mut input, &mut store, &path).unwrap();
        assert_eq!(feedback, "\t\u{2022} One\n");
    }

    #[test]
    fn test_saved_comment_round_trips_into_next_session() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("part a_task 1.txt");
        let mut store = FileStore;

        let mut input = ScriptedLines::new(["n", "Great job", "y", "e"]);
        run_feedback_session(&mut input, &mut store, &path).unwrap();

        // A fresh session against the same file offers the saved comment as
        // option 1.
        let mut input = ScriptedLines::new(["1", "e"]);
        let feedback = run_feedback_session(&mut input, &mut store, &path).unwrap();
        assert_eq!(feedback, "\t\u{2022} Great job\n");
    }

    #[test]
    fn test_eof_mid_session_propagates() {
        let path = store_path();
        let mut store = MemoryStore::new();
        let mut input = ScriptedLines::new(["n"]);
        assert!(run_feedback_session(&mut input, &mut store, &path).is_err());
    }
}
