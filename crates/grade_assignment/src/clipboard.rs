// crates/grade_assignment/src/clipboard.rs

use std::io::Write;
use std::process::{Command, Stdio};

/// Copies the feedback report to the clipboard using the `pbcopy` command.
/// If the environment variable `DISABLE_PBCOPY` is set, the function logs a
/// message and skips copying.
pub fn copy_to_clipboard(feedback: &str) {
    if std::env::var("DISABLE_PBCOPY").is_err() {
        let mut pbcopy = Command::new("pbcopy")
            .stdin(Stdio::piped())
            .spawn()
            .unwrap_or_else(|err| {
                eprintln!("Error running pbcopy: {}", err);
                std::process::exit(1);
            });
        {
            let pb_stdin = pbcopy.stdin.as_mut().expect("Failed to open pbcopy stdin");
            pb_stdin
                .write_all(feedback.as_bytes())
                .expect("Failed to write to pbcopy");
        }
        pbcopy.wait().expect("Failed to wait on pbcopy");
    } else {
        eprintln!("DISABLE_PBCOPY is set; skipping clipboard copy.");
    }
}
