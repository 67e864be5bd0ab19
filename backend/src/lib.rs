//! Community board backend: members, a shared article board, and the
//! adapters that expose and persist them.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use inbound::http::trace::Trace;
