//! # Command Layer
//!
//! The business logic of notz. Each operation lives in its own submodule as
//! a `run` (or similarly named) function taking the [`Store`] plus plain
//! arguments and returning plain data. Nothing here touches stdout, stderr,
//! or the process exit code; the CLI renders whatever comes back.
//!
//! Item operations ([`add`], [`list`], [`edit`], [`delete`], [`check`],
//! [`history`]) are parameterized by a [`Collection`] target and apply
//! identically to the active note space and to the fixed todo list. Space
//! operations ([`space`]) manage whole collections.
//!
//! Every operation runs as a single store transaction, so a failure leaves
//! the database exactly as it was.
//!
//! [`Store`]: crate::store::Store
//! [`Collection`]: crate::model::Collection

pub mod add;
pub mod check;
pub mod delete;
pub mod edit;
pub mod history;
pub mod list;
pub mod space;
