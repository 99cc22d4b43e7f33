//! JavaScript bindings, the surface the browser UI consumes.

pub mod diagram;
pub mod functions;
pub mod utils;
