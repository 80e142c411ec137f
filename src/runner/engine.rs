//! Node evaluation
//!
//! The engine applies the tests-gate-steps policy: when every declared test
//! passes the node is already satisfied and no step runs; otherwise steps run
//! in declared order until the first failure.

use crate::error::Result;
use crate::events::EventSender;
use crate::node::{Node, NodeLoader};
use crate::runner::task::format_scope;
use crate::runner::{Outcome, Scope};
use std::path::Path;

/// Evaluates nodes against the configured node storage
///
/// One engine drives one run. The evaluation stack tracks the chain of node
/// names currently being evaluated so reference cycles become configuration
/// errors instead of unbounded recursion.
pub struct Engine {
    pub(crate) loader: NodeLoader,
    pub(crate) events: EventSender,
    pub(crate) stack: Vec<String>,
}

impl Engine {
    /// Create an engine over a node loader and an event channel
    pub fn new(loader: NodeLoader, events: EventSender) -> Self {
        Engine {
            loader,
            events,
            stack: Vec::new(),
        }
    }

    /// Load the root node from an explicit path and evaluate it with an
    /// empty scope
    pub fn run(&mut self, root: &Path) -> Result<Outcome> {
        let node = self.loader.load_path(root)?;
        self.evaluate(&node, &Scope::new())
    }

    /// Evaluate a node: tests gate steps
    pub fn evaluate(&mut self, node: &Node, scope: &Scope) -> Result<Outcome> {
        self.events.entering_node(&node.name);

        self.stack.push(node.name.clone());
        let outcome = self.evaluate_gated(node, scope);
        self.stack.pop();

        outcome
    }

    fn evaluate_gated(&mut self, node: &Node, scope: &Scope) -> Result<Outcome> {
        let summary = format!("{} {}", node.name, format_scope(scope));

        if !node.tests.is_empty() && self.run_tests(node, scope)? {
            let outcome = Outcome::success(summary, format!("Tests passed for {}", node.name));
            self.events.tests_passed(&outcome.message);
            return Ok(outcome);
        }

        self.run_steps(node, scope, summary)
    }

    /// Run every test with the same scope and aggregate the results
    ///
    /// Tests never short-circuit: a failure is recorded and the remaining
    /// tests still run.
    fn run_tests(&mut self, node: &Node, scope: &Scope) -> Result<bool> {
        let mut passed = true;

        for test in &node.tests {
            if !self.execute_task(test, scope)?.success {
                passed = false;
            }
        }

        Ok(passed)
    }

    /// Run steps in declared order, stopping at the first failure
    fn run_steps(&mut self, node: &Node, scope: &Scope, summary: String) -> Result<Outcome> {
        for step in &node.steps {
            let outcome = self.execute_task(step, scope)?;

            if !outcome.success {
                return Ok(Outcome::failure(
                    summary,
                    format!("Steps failed for {}: {}", node.name, outcome.summary),
                ));
            }
        }

        Ok(Outcome::success(
            summary,
            format!("Steps passed for {}", node.name),
        ))
    }
}
