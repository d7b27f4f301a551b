//! Application layer: input handling and use cases
//!
//! This layer turns raw inputs into domain structures, runs the algorithms
//! and depends only on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod input;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use input::{InputSource, Notation};
