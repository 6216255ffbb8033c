//! Command facade over the git executable.
//!
//! Every operation is one round trip: build the argument list, run git in
//! the repository directory, then parse stdout or classify the failure.

mod branches;
mod manager;
mod operations;
mod runner;
mod tree;

pub use manager::{GitCli, DEFAULT_PROGRAM};
