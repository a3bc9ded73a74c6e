//! Reinforcement-learning style environment over the core round API.

mod action;
mod config;
mod env;
mod error;
mod policy;
mod runner;
mod trace;

pub use action::*;
pub use config::*;
pub use env::*;
pub use error::*;
pub use policy::*;
pub use runner::*;
pub use trace::*;
