//! Behaviour tests for the layer boundary lint, run against a temporary tree.
#![allow(non_snake_case)]

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use architecture_lint::{LintError, LintSource};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

#[derive(Default)]
struct LintWorld {
    sources: RefCell<Vec<LintSource>>,
    outcome: RefCell<Option<Result<(), LintError>>>,
}

impl LintWorld {
    fn add(&self, file: &str, contents: &str) {
        self.sources.borrow_mut().push(LintSource {
            file: PathBuf::from(file),
            contents: contents.to_owned(),
        });
    }
}

#[fixture]
fn world() -> LintWorld {
    LintWorld::default()
}

#[given("a correctly layered backend")]
fn layered_backend(world: &LintWorld) {
    world.add(
        "domain/user.rs",
        "use thiserror::Error; pub struct UserId(String);",
    );
    world.add(
        "inbound/http/users.rs",
        "use actix_web::web; use crate::domain::user::UserId; fn handler(_: web::Path<String>) {}",
    );
    world.add(
        "outbound/persistence/users.rs",
        "use diesel::prelude::*; use crate::domain::user::UserId; pub struct Repo;",
    );
}

#[given("an inbound module that imports crate::outbound")]
fn inbound_leak(world: &LintWorld) {
    world.add(
        "inbound/http/leaky.rs",
        "use crate::outbound::memory::InMemoryUserRepository;",
    );
}

#[given("an outbound module that imports crate::inbound")]
fn outbound_leak(world: &LintWorld) {
    world.add(
        "outbound/persistence/leaky.rs",
        "use crate::inbound::http::ApiResult;",
    );
}

#[given("a domain module that imports actix_web")]
fn domain_leak(world: &LintWorld) {
    world.add("domain/leaky.rs", "use actix_web::HttpResponse;");
}

#[given("an inbound test helper that imports crate::outbound")]
fn test_helper(world: &LintWorld) {
    world.add("inbound/http/test_utils.rs", "use crate::outbound::memory;");
}

#[when("the architecture lint runs")]
fn lint_runs(world: &LintWorld) {
    let dir = TempDir::new().expect("tempdir");
    let backend = dir.path().join("backend");
    for source in world.sources.borrow().iter() {
        let path = backend.join("src").join(&source.file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create source dirs");
        }
        fs::write(&path, &source.contents).expect("write source");
    }
    world
        .outcome
        .replace(Some(architecture_lint::lint_backend_sources(&backend)));
}

#[then("the lint succeeds")]
fn lint_succeeds(world: &LintWorld) {
    let outcome = world.outcome.borrow();
    let outcome = outcome.as_ref().expect("lint ran");
    assert!(outcome.is_ok(), "expected success, got {outcome:?}");
}

#[then("the lint reports {needle} in {file}")]
fn lint_reports(world: &LintWorld, needle: String, file: String) {
    let needle = needle.trim_matches('"');
    let file = PathBuf::from(file.trim_matches('"'));
    let outcome = world.outcome.borrow();
    let Some(Err(LintError::Violations(violations))) = outcome.as_ref() else {
        panic!("expected violations, got {outcome:?}");
    };
    assert!(
        violations
            .iter()
            .any(|v| v.file == file && v.message.contains(needle)),
        "no violation in {file:?} mentions {needle}: {violations:?}"
    );
    assert_eq!(violations.len(), 1, "only the leaky file fails: {violations:?}");
}

#[scenario(path = "tests/features/architecture_guardrails.feature")]
fn architecture_guardrails(world: LintWorld) {
    let _ = world;
}
