//! Source registry module.
//!
//! Orders live price sources and falls through them until one answers.

mod chain;

pub use chain::LiveSourceChain;
