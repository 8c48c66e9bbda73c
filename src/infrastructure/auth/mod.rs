//! Token issuance and time source

pub mod clock;
pub mod token;

pub use clock::{Clock, SystemClock};
pub use token::{TokenClaims, TokenConfig, TokenIssuer};
