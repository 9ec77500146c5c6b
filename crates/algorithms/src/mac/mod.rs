//! Message authentication codes
//!
//! HMAC is keyed by bytes and generic over the hash; CMAC and PMAC are keyed
//! by an already-expanded block cipher, which they own or borrow.

pub mod cmac;
pub mod hmac;
pub mod pmac;

pub use cmac::Cmac;
pub use hmac::{Hmac, HmacSha256};
pub use pmac::Pmac;
