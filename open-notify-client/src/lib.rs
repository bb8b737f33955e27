//! Client for the open-notify ISS tracking API.
//!
//! Wraps the three public endpoints (astronaut roster, current position,
//! pass prediction) behind [`Client`] and plain typed records.

mod astronauts;
mod client;
mod error;
mod passes;
mod position;

pub use crate::astronauts::Astronaut;
pub use crate::client::Client;
pub use crate::error::Error;
pub use crate::passes::Pass;
pub use crate::position::IssPosition;
