//! Unit tests for the layer boundary lint.

use std::path::PathBuf;

use rstest::rstest;

use super::*;

fn lint_one(file: &str, contents: &str) -> Result<(), LintError> {
    lint_sources(&[LintSource {
        file: PathBuf::from(file),
        contents: contents.to_owned(),
    }])
}

#[rstest]
#[case::domain_to_domain("inbound/http/users.rs", "use crate::domain::UserId;")]
#[case::inbound_web("inbound/http/users.rs", "use actix_web::web; use actix_session::Session;")]
#[case::inbound_openapi("inbound/http/articles.rs", "#[utoipa::path(get, path = \"/a\")] fn h() {}")]
#[case::outbound_orm("outbound/persistence/pool.rs", "use diesel_async::AsyncPgConnection;")]
#[case::outbound_memory("outbound/memory/users.rs", "use super::super::super::domain::User;")]
#[case::domain_clock("domain/article_service.rs", "use mockable::Clock; use tracing::info;")]
#[case::cfg_test_module(
    "outbound/memory/articles.rs",
    "#[cfg(test)] mod tests { use crate::inbound::http::state::HttpState; }"
)]
#[case::test_utils_file("inbound/http/test_utils.rs", "use crate::outbound::memory;")]
#[case::sibling_tests_file("domain/article_service_tests.rs", "use actix_rt::System;")]
fn accepts_layered_code(#[case] file: &str, #[case] contents: &str) {
    let result = lint_one(file, contents);
    assert!(result.is_ok(), "unexpected failure: {result:?}");
}

#[rstest]
#[case::inbound_to_outbound("inbound/http/users.rs", "use crate::outbound::memory::InMemoryUserRepository;", "crate::outbound")]
#[case::inbound_by_crate_name("inbound/http/users.rs", "use cafe::outbound::persistence::DbPool;", "crate::outbound")]
#[case::inbound_grouped("inbound/http/mod.rs", "use crate::{domain::Error, outbound::memory};", "crate::outbound")]
#[case::inbound_orm("inbound/http/users.rs", "use diesel::prelude::*;", "`diesel`")]
#[case::outbound_to_inbound("outbound/persistence/users.rs", "use super::super::inbound::http::ApiResult;", "crate::inbound")]
#[case::outbound_web("outbound/persistence/users.rs", "fn f() -> actix_web::HttpResponse { todo!() }", "`actix_web`")]
#[case::domain_web("domain/user.rs", "use actix_web::ResponseError;", "`actix_web`")]
#[case::domain_openapi("domain/error.rs", "use utoipa::ToSchema;", "`utoipa`")]
#[case::domain_orm("domain/article.rs", "use diesel::Queryable;", "`diesel`")]
#[case::domain_to_adapter("domain/ports/mod.rs", "use crate::inbound::http;", "crate::inbound")]
fn rejects_boundary_crossings(#[case] file: &str, #[case] contents: &str, #[case] needle: &str) {
    let Err(LintError::Violations(violations)) = lint_one(file, contents) else {
        panic!("expected violations for {file}");
    };
    assert!(
        violations.iter().any(|v| v.message.contains(needle)),
        "no violation mentions {needle}: {violations:?}"
    );
}

#[test]
fn repeated_paths_report_once() {
    let Err(LintError::Violations(violations)) = lint_one(
        "domain/user.rs",
        "use actix_web::web; fn a() -> actix_web::HttpResponse { todo!() }",
    ) else {
        panic!("expected violations");
    };
    assert_eq!(violations.len(), 1);
}

#[test]
fn files_outside_the_layers_are_rejected() {
    let err = lint_one("server/mod.rs", "fn main() {}").expect_err("unknown layer");
    assert!(matches!(err, LintError::Parse { .. }), "got {err:?}");
}

#[test]
fn unparsable_sources_surface_the_file() {
    let err = lint_one("domain/broken.rs", "fn (").expect_err("syntax error");
    assert!(err.to_string().contains("domain/broken.rs"), "got {err}");
}

#[test]
fn violation_report_lists_each_entry() {
    let err = LintError::Violations(vec![Violation {
        file: PathBuf::from("domain/user.rs"),
        message: "domain must not depend on crate::inbound".to_owned(),
    }]);
    assert_eq!(
        err.to_string(),
        "layer boundary violations:\n- domain/user.rs: domain must not depend on crate::inbound"
    );
}
