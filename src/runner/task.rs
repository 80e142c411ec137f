//! Task execution
//!
//! A task is rendered against the caller's scope and then either spawned as
//! an external process (`core.Exec`) or resolved to another node and
//! evaluated recursively. Every execution emits exactly one success/failure
//! event.

use crate::error::{ConfigError, Result, TemplateResult};
use crate::node::{Task, EXEC_TASK};
use crate::runner::engine::Engine;
use crate::runner::{template, Outcome, Scope};
use std::process::Command as StdCommand;

impl Engine {
    /// Execute a single task against a scope
    ///
    /// Execution failures come back as `Outcome { success: false, .. }`; only
    /// configuration errors (missing or circular node definitions) escape as
    /// `Err`.
    pub fn execute_task(&mut self, task: &Task, scope: &Scope) -> Result<Outcome> {
        // Rendering happens in full before any process or recursion; a
        // malformed template fails the task, not the run
        let rendered = match render_task(task, scope) {
            Ok(rendered) => rendered,
            Err(e) => {
                let outcome = Outcome::failure(task.name.clone(), e.to_string());
                self.events.task_finished(&outcome);
                return Ok(outcome);
            }
        };

        let outcome = if rendered.is_exec() {
            run_exec(&rendered)
        } else {
            self.execute_reference(&rendered)?
        };

        self.events.task_finished(&outcome);
        Ok(outcome)
    }

    /// Resolve a node reference and evaluate it with the rendered parameters
    /// as the child scope
    fn execute_reference(&mut self, task: &Task) -> Result<Outcome> {
        let node = self.loader.load(&task.name)?;

        if self.stack.iter().any(|name| name == &node.name) {
            let chain = format!("{} -> {}", self.stack.join(" -> "), node.name);
            return Err(ConfigError::CircularReference(chain).into());
        }

        let child = self.evaluate(&node, &task.parameters)?;

        // The child's success and message carry through verbatim
        Ok(Outcome {
            success: child.success,
            message: child.message,
            summary: format!("{} {}", task.name, format_scope(&task.parameters)),
        })
    }
}

/// Render a task's parameters and args, producing a new task
///
/// The loaded definition is never mutated, so node definitions stay reusable
/// across invocations.
pub fn render_task(task: &Task, scope: &Scope) -> TemplateResult<Task> {
    Ok(Task {
        name: task.name.clone(),
        parameters: template::render_map(&task.parameters, scope)?,
        args: template::render_list(&task.args, scope)?,
    })
}

/// Spawn the built-in external process and capture its output
fn run_exec(task: &Task) -> Outcome {
    let summary = format!("{} {}", EXEC_TASK, task.args.join(" "));

    let (program, prog_args) = match task.args.split_first() {
        Some(split) => split,
        None => {
            return Outcome::failure(summary, "core.Exec requires at least one argument");
        }
    };

    match StdCommand::new(program).args(prog_args).output() {
        Ok(output) => {
            let mut message = String::from_utf8_lossy(&output.stdout).into_owned();
            message.push_str(&String::from_utf8_lossy(&output.stderr));

            Outcome {
                success: output.status.success(),
                message,
                summary,
            }
        }
        Err(e) => Outcome::failure(summary, e.to_string()),
    }
}

/// Deterministic rendering of a scope for summaries, sorted by key
pub(crate) fn format_scope(scope: &Scope) -> String {
    let mut pairs: Vec<String> = scope
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    pairs.sort();
    format!("[{}]", pairs.join(" "))
}
