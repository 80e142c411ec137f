//! Integration tests for node evaluation

mod common;

use boxkite::error::{BoxkiteError, ConfigError};
use boxkite::events::EventKind;
use boxkite::node::NodeLoader;
use boxkite::runner::{Engine, Scope};
use common::{collecting_events, write_node};
use tempfile::TempDir;

fn engine_for(dir: &TempDir) -> (Engine, std::thread::JoinHandle<Vec<boxkite::events::Event>>) {
    let (events, collector) = collecting_events();
    (
        Engine::new(NodeLoader::new(dir.path().to_path_buf()), events),
        collector,
    )
}

#[test]
fn test_satisfied_node_runs_no_steps() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("step_ran");

    let root = write_node(
        dir.path(),
        "root",
        &format!(
            r#"
name: root
tests:
  - name: core.Exec
    args: ["true"]
steps:
  - name: core.Exec
    args: ["touch", "{}"]
"#,
            marker.display()
        ),
    );

    let (mut engine, collector) = engine_for(&dir);
    let outcome = engine.run(&root).unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.message, "Tests passed for root");
    assert!(!marker.exists());

    drop(engine);
    collector.join().unwrap();
}

#[test]
fn test_failed_tests_fall_through_to_steps() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("s1_ran");
    let third = dir.path().join("s3_ran");

    // T1 fails; S1 runs, S2 fails, S3 must never run
    let root = write_node(
        dir.path(),
        "root",
        &format!(
            r#"
name: root
tests:
  - name: core.Exec
    args: ["false"]
steps:
  - name: core.Exec
    args: ["touch", "{}"]
  - name: core.Exec
    args: ["false"]
  - name: core.Exec
    args: ["touch", "{}"]
"#,
            first.display(),
            third.display()
        ),
    );

    let (mut engine, collector) = engine_for(&dir);
    let outcome = engine.run(&root).unwrap();

    assert!(!outcome.success);
    assert!(outcome.message.contains("Steps failed for root"));
    assert!(outcome.message.contains("core.Exec false"));
    assert!(first.exists());
    assert!(!third.exists());

    drop(engine);
    collector.join().unwrap();
}

#[test]
fn test_every_test_runs_before_steps() {
    let dir = TempDir::new().unwrap();
    let second = dir.path().join("t2_ran");

    let root = write_node(
        dir.path(),
        "root",
        &format!(
            r#"
name: root
tests:
  - name: core.Exec
    args: ["false"]
  - name: core.Exec
    args: ["touch", "{}"]
"#,
            second.display()
        ),
    );

    let (mut engine, collector) = engine_for(&dir);
    let outcome = engine.run(&root).unwrap();

    // The second test ran even though the first had already failed
    assert!(second.exists());
    assert!(outcome.success);
    assert_eq!(outcome.message, "Steps passed for root");

    drop(engine);
    collector.join().unwrap();
}

#[test]
fn test_steps_only_node_succeeds() {
    let dir = TempDir::new().unwrap();

    let root = write_node(
        dir.path(),
        "root",
        r#"
name: root
steps:
  - name: core.Exec
    args: ["echo", "hi"]
"#,
    );

    let (mut engine, collector) = engine_for(&dir);
    let outcome = engine.run(&root).unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.message, "Steps passed for root");

    drop(engine);
    let events = collector.join().unwrap();
    let step = events
        .iter()
        .find(|e| e.kind == EventKind::TaskSuccess)
        .unwrap();
    assert_eq!(step.summary.as_deref(), Some("core.Exec echo hi"));
    assert_eq!(step.message, "hi\n");
}

#[test]
fn test_node_reference_with_parameters() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("made_by_child");

    write_node(
        dir.path(),
        "make-file",
        r#"
name: make-file
tests:
  - name: core.Exec
    args: ["test", "-f", "${file}"]
steps:
  - name: core.Exec
    args: ["touch", "${file}"]
"#,
    );

    let root = write_node(
        dir.path(),
        "root",
        &format!(
            r#"
name: root
steps:
  - name: make-file
    parameters:
      file: "{}"
"#,
            marker.display()
        ),
    );

    let (mut engine, collector) = engine_for(&dir);
    let outcome = engine.run(&root).unwrap();

    assert!(outcome.success);
    assert!(marker.exists());

    drop(engine);
    let events = collector.join().unwrap();
    // Both nodes were entered
    let entered: Vec<&str> = events
        .iter()
        .filter(|e| e.kind == EventKind::EnteringNode)
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(entered, vec!["root", "make-file"]);
}

#[test]
fn test_child_failure_propagates() {
    let dir = TempDir::new().unwrap();

    write_node(
        dir.path(),
        "broken",
        r#"
name: broken
steps:
  - name: core.Exec
    args: ["false"]
"#,
    );

    let root = write_node(
        dir.path(),
        "root",
        r#"
name: root
steps:
  - name: broken
"#,
    );

    let (mut engine, collector) = engine_for(&dir);
    let outcome = engine.run(&root).unwrap();

    assert!(!outcome.success);
    assert!(outcome.message.contains("Steps failed for root"));

    drop(engine);
    collector.join().unwrap();
}

#[test]
fn test_undeclared_node_reference_aborts_run() {
    let dir = TempDir::new().unwrap();

    let root = write_node(
        dir.path(),
        "root",
        r#"
name: root
steps:
  - name: no-such-node
"#,
    );

    let (mut engine, collector) = engine_for(&dir);
    let result = engine.run(&root);

    assert!(matches!(
        result,
        Err(BoxkiteError::Config(ConfigError::NodeNotFound { .. }))
    ));

    drop(engine);
    collector.join().unwrap();
}

#[test]
fn test_reference_cycle_aborts_run() {
    let dir = TempDir::new().unwrap();

    write_node(
        dir.path(),
        "a",
        r#"
name: a
steps:
  - name: b
"#,
    );
    write_node(
        dir.path(),
        "b",
        r#"
name: b
steps:
  - name: a
"#,
    );

    let root = write_node(
        dir.path(),
        "root",
        r#"
name: root
steps:
  - name: a
"#,
    );

    let (mut engine, collector) = engine_for(&dir);
    let result = engine.run(&root);

    match result {
        Err(BoxkiteError::Config(ConfigError::CircularReference(chain))) => {
            assert!(chain.contains("a -> b -> a"));
        }
        other => panic!("expected circular reference error, got {:?}", other),
    }

    drop(engine);
    collector.join().unwrap();
}
