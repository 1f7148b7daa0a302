//! Data transfer types exchanged with the authorizations API.

pub mod authorization;
pub mod envelope;
pub mod request;

pub use authorization::*;
pub use envelope::*;
pub use request::*;
