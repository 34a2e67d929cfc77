//! Test support: fixtures and PostgreSQL-backed contexts.

mod context;

pub(crate) use context::TestContext;
