//! Form acceptor communication

mod client;
mod traits;

pub use client::{resolve_endpoint, AcceptorClient};
pub use traits::{AcceptorClientTrait, SubmissionOutcome};

#[cfg(test)]
pub use traits::MockAcceptorClientTrait;
