//! Trait definitions for ThousandEyes operations.
//!
//! Each test type implements the traits it supports, encapsulating
//! per-endpoint differences in the implementations.

mod create;
mod delete;
mod get;
mod update;

pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use update::Update;
