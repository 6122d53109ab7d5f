//! Bridge between the layout manager and wry webviews.
//!
//! Handles coordinate conversion, the `Container` implementation over the
//! host window, IPC message dispatch and keeping the prompt bar in place.

mod bounds;
mod container;
mod ipc_dispatch;
mod lifecycle;

pub(super) use container::WryContainer;
