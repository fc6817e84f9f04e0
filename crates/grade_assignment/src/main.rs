use anyhow::{Context, Result};
use clap::{Arg, Command};
use console_input::Console;
use feedback_store::FileStore;
use grade_assignment::mark_tasks;

mod clipboard;

fn main() -> Result<()> {
    let matches = Command::new("grade_assignment")
        .version("0.1.0")
        .about("Walks through an assignment's parts and tasks, collecting marks and reusable feedback comments")
        .arg(
            Arg::new("parts_file")
                .long("parts-file")
                .num_args(1)
                .default_value("parts.json")
                .help("JSON file describing the assignment's parts and tasks"),
        )
        .get_matches();

    let parts_file = matches.get_one::<String>("parts_file").unwrap();
    let parts = assignment_parts::load_parts(parts_file)
        .with_context(|| format!("Failed to load assignment parts from {}", parts_file))?;

    let mut input = Console;
    let mut store = FileStore;
    let feedback = mark_tasks(&mut input, &mut store, &parts)?;

    print!("\n\n{}", feedback);
    clipboard::copy_to_clipboard(&feedback);
    println!("Output copied to clipboard!");

    Ok(())
}
