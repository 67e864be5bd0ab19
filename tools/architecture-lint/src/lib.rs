//! Layer boundary lint for the `cafe` backend.
//!
//! The backend is split into `domain` (entities, services, ports), `inbound`
//! adapters and `outbound` adapters. This lint parses every file under those
//! three trees with `syn` and rejects:
//!
//! - `domain` paths into either adapter tree, or into web, ORM or OpenAPI
//!   crates;
//! - `inbound` paths into `outbound` or the ORM crates;
//! - `outbound` paths into `inbound` or the web crates.
//!
//! Test-only code (`#[cfg(test)]` items, `tests.rs`, `*_tests.rs` and
//! `test_utils.rs` files) may compose layers freely and is skipped.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use syn::visit::Visit;

/// Name the backend library is imported under.
const CRATE_NAME: &str = "cafe";
const LAYER_DIRS: [&str; 3] = ["domain", "inbound", "outbound"];

const WEB_CRATES: &[&str] = &["actix", "actix_http", "actix_session", "actix_web", "awc"];
const ORM_CRATES: &[&str] = &["diesel", "diesel_async", "diesel_migrations"];
const OPENAPI_CRATES: &[&str] = &["utoipa", "utoipa_swagger_ui"];

/// One forbidden dependency found in one file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Violation {
    /// Path relative to `backend/src`.
    pub file: PathBuf,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("failed to read backend sources: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse {}: {message}", file.display())]
    Parse { file: PathBuf, message: String },
    #[error("{}", render_violations(.0))]
    Violations(Vec<Violation>),
}

fn render_violations(violations: &[Violation]) -> String {
    let mut out = String::from("layer boundary violations:");
    for violation in violations {
        out.push_str("\n- ");
        out.push_str(&violation.to_string());
    }
    out
}

/// A source file handed to the lint, path relative to `backend/src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    pub file: PathBuf,
    pub contents: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Domain,
    Inbound,
    Outbound,
}

impl Layer {
    fn of(relative: &Path) -> Option<Self> {
        match relative.components().next()?.as_os_str().to_str()? {
            "domain" => Some(Self::Domain),
            "inbound" => Some(Self::Inbound),
            "outbound" => Some(Self::Outbound),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    fn forbidden_modules(self) -> &'static [&'static str] {
        match self {
            Self::Domain => &["inbound", "outbound"],
            Self::Inbound => &["outbound"],
            Self::Outbound => &["inbound"],
        }
    }

    fn forbids_crate(self, root: &str) -> bool {
        let groups: &[&[&str]] = match self {
            Self::Domain => &[WEB_CRATES, ORM_CRATES, OPENAPI_CRATES],
            Self::Inbound => &[ORM_CRATES],
            Self::Outbound => &[WEB_CRATES],
        };
        groups.iter().any(|group| group.contains(&root))
    }
}

fn is_test_only_file(relative: &Path) -> bool {
    relative
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem == "tests" || stem == "test_utils" || stem.ends_with("_tests"))
        || relative.components().any(|c| c.as_os_str() == "tests")
}

/// Lint `backend_dir/src`.
pub fn lint_backend_sources(backend_dir: &Path) -> Result<(), LintError> {
    let src = backend_dir.join("src");
    let mut sources = Vec::new();
    for dir in LAYER_DIRS {
        let root = src.join(dir);
        if root.is_dir() {
            collect(&src, &root, &mut sources)?;
        }
    }
    lint_sources(&sources)
}

/// Lint in-memory sources.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), LintError> {
    let mut violations = BTreeSet::new();
    for source in sources {
        if is_test_only_file(&source.file) {
            continue;
        }
        let layer = Layer::of(&source.file).ok_or_else(|| LintError::Parse {
            file: source.file.clone(),
            message: "file is outside domain, inbound and outbound".to_owned(),
        })?;
        let parsed = syn::parse_file(&source.contents).map_err(|err| LintError::Parse {
            file: source.file.clone(),
            message: err.to_string(),
        })?;
        violations.extend(check(&source.file, layer, &parsed));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(LintError::Violations(violations.into_iter().collect()))
    }
}

fn check(file: &Path, layer: Layer, parsed: &syn::File) -> Vec<Violation> {
    let mut paths = PathCollector::default();
    paths.visit_file(parsed);

    let mut messages = BTreeSet::new();
    for segments in &paths.seen {
        if let Some(module) = internal_root(segments)
            && layer.forbidden_modules().contains(&module)
        {
            messages.insert(format!("{} must not depend on crate::{module}", layer.name()));
        }
        if let Some(root) = external_root(segments)
            && layer.forbids_crate(root)
        {
            messages.insert(format!("{} must not depend on external crate `{root}`", layer.name()));
        }
    }

    messages
        .into_iter()
        .map(|message| Violation {
            file: file.to_path_buf(),
            message,
        })
        .collect()
}

fn is_relative(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

/// The layer a path points into, for `crate::x`, `super::x`, `cafe::x` or a
/// bare `x` naming a layer.
fn internal_root(segments: &[String]) -> Option<&str> {
    let first = segments.first()?.as_str();
    if LAYER_DIRS.contains(&first) {
        return Some(first);
    }
    let rest = if is_relative(first) {
        segments.iter().find(|s| !is_relative(s))?
    } else if first == CRATE_NAME {
        segments.get(1)?
    } else {
        return None;
    };
    Some(rest.as_str())
}

fn external_root(segments: &[String]) -> Option<&str> {
    let root = segments.first()?.as_str();
    (!is_relative(root) && root != CRATE_NAME).then_some(root)
}

fn is_cfg_test(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Ident>()
                .is_ok_and(|ident| ident == "test")
    })
}

#[derive(Default)]
struct PathCollector {
    seen: BTreeSet<Vec<String>>,
}

impl PathCollector {
    fn use_tree(&mut self, tree: &syn::UseTree, mut prefix: Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.use_tree(&path.tree, prefix);
            }
            syn::UseTree::Name(name) => {
                prefix.push(name.ident.to_string());
                self.seen.insert(prefix);
            }
            syn::UseTree::Rename(rename) => {
                prefix.push(rename.ident.to_string());
                self.seen.insert(prefix);
            }
            syn::UseTree::Glob(_) => {
                prefix.push("*".to_owned());
                self.seen.insert(prefix);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.use_tree(item, prefix.clone());
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_item(&mut self, node: &'ast syn::Item) {
        let attrs = match node {
            syn::Item::Mod(item) => &item.attrs,
            syn::Item::Fn(item) => &item.attrs,
            syn::Item::Impl(item) => &item.attrs,
            syn::Item::Use(item) => &item.attrs,
            syn::Item::Struct(item) => &item.attrs,
            _ => return syn::visit::visit_item(self, node),
        };
        if !is_cfg_test(attrs) {
            syn::visit::visit_item(self, node);
        }
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.use_tree(&node.tree, Vec::new());
    }

    fn visit_path(&mut self, node: &'ast syn::Path) {
        let segments: Vec<String> = node.segments.iter().map(|s| s.ident.to_string()).collect();
        if !segments.is_empty() {
            self.seen.insert(segments);
        }
        syn::visit::visit_path(self, node);
    }
}

fn collect(src: &Path, dir: &Path, out: &mut Vec<LintSource>) -> Result<(), LintError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(src, &path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let file = path
                .strip_prefix(src)
                .map_err(|err| LintError::Parse {
                    file: path.clone(),
                    message: err.to_string(),
                })?
                .to_path_buf();
            let contents = fs::read_to_string(&path)?;
            out.push(LintSource { file, contents });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
