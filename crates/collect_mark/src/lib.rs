// crates/collect_mark/src/lib.rs

use anyhow::Result;
use colored::Colorize;
use console_input::LineReader;

/// Prompts for the mark of one task until a valid one is entered, and
/// returns the report line `"{task_name} - {mark}"`.
///
/// A valid mark parses as a real number, is not negative, and — when
/// `max_mark` is positive — does not exceed `max_mark`. A `max_mark` of zero
/// or below means the task has no upper bound. Invalid input is reported and
/// reprompted; it never escapes as an error.
pub fn collect_mark(
    input: &mut dyn LineReader,
    task_name: &str,
    max_mark: f64,
) -> Result<String> {
    loop {
        let text = input.read_line(&format!("What was the mark for {}? ", task_name))?;
        let mark: f64 = match text.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                println!("{}", "Please input a valid number.".red().bold());
                continue;
            }
        };
        if mark < 0.0 {
            println!("{}", "Please input a valid number above 0.".red().bold());
        } else if max_mark > 0.0 && mark > max_mark {
            println!(
                "{}",
                format!(
                    "Please input a valid number less than or equal to {}.",
                    max_mark
                )
                .red()
                .bold()
            );
        } else {
            return Ok(format!("{} - {}", task_name, mark));
        }
    }
}
