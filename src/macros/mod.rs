//! Declarative macros for guard-this.

// Both macros use #[macro_export], which exports them at crate root
#[macro_use]
mod guard;
#[macro_use]
mod raise;
