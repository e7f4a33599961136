mod deployment;
mod project;

pub use deployment::*;
pub use project::*;
