// crates/grade_assignment/src/lib.rs

use std::path::Path;

use anyhow::Result;
use assignment_parts::Part;
use collect_mark::collect_mark;
use console_input::{yes_or_no, LineReader};
use feedback_store::{feedback_file_name, CommentStore};
use pick_comments::run_feedback_session;

/// Walks every part and task in order, collecting a mark for each task and,
/// when the user asks for it, a feedback session against that task's comment
/// store. Returns the aggregated feedback report.
pub fn mark_tasks(
    input: &mut dyn LineReader,
    store: &mut dyn CommentStore,
    parts: &[Part],
) -> Result<String> {
    let mut feedback = String::new();
    for part in parts {
        feedback.push_str(&part.name);
        feedback.push_str(":\n");
        println!("{}:", part.name);
        for task in &part.tasks {
            let mark_line = collect_mark(input, &task.name, task.max_mark)?;
            feedback.push_str(&mark_line);
            feedback.push('\n');
            if yes_or_no(input, "Would you like to give feedback?")? {
                let file_name = feedback_file_name(&part.name, &task.name);
                let session_feedback =
                    run_feedback_session(input, store, Path::new(&file_name))?;
                feedback.push_str(&session_feedback);
            }
        }
        feedback.push_str("\n\n");
    }
    Ok(feedback)
}
