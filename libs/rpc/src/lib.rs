//! Checked-in protobuf bindings for the todo API.
//!
//! Regenerate with `buf generate` from this directory after editing `proto/`.

mod generated;

pub use generated::{auth, todo};
