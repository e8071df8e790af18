//! Entity to model mappers
//!
//! Conversions between domain entities (stream-core) and database models:
//! - `From<Model> for Entity`: convert database rows to domain objects
//! - column-pair helpers for binding polymorphic references

mod action;
mod action_type;
mod follow;

pub(crate) use action::ref_columns;
