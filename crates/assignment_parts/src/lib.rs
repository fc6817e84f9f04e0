// crates/assignment_parts/src/lib.rs

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One gradable unit within a part. A `max_mark` of zero or below means the
/// task has no upper bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub name: String,
    pub max_mark: f64,
}

/// A top-level grouping of tasks within an assignment, in grading order.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub tasks: Vec<Task>,
}

// Raw document shape: an array of parts, each mapping task names to their
// definitions. Task order in the JSON object is the grading order, which is
// why serde_json's preserve_order feature is required.
#[derive(Deserialize)]
struct PartSpec {
    name: String,
    #[serde(default)]
    tasks: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct TaskSpec {
    #[serde(default)]
    max_mark: f64,
}

/// Loads and validates the assignment description from a JSON file.
///
/// # Errors
///
/// Fails if the file cannot be opened, is not valid JSON of the expected
/// shape, or contains a task definition that does not deserialize.
pub fn load_parts<P: AsRef<Path>>(path: P) -> Result<Vec<Part>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Error opening {}", path.display()))?;
    let specs: Vec<PartSpec> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Error parsing {}", path.display()))?;
    specs.into_iter().map(part_from_spec).collect()
}

fn part_from_spec(spec: PartSpec) -> Result<Part> {
    let mut tasks = Vec::with_capacity(spec.tasks.len());
    for (name, value) in spec.tasks {
        let task: TaskSpec = serde_json::from_value(value)
            .with_context(|| format!("Invalid definition for task {}", name))?;
        tasks.push(Task {
            name,
            max_mark: task.max_mark,
        });
    }
    Ok(Part {
        name: spec.name,
        tasks,
    })
}
