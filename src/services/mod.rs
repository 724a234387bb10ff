//! Application service layer.
//!
//! The session ties the address book, the command handlers and the
//! repository together for one run of the assistant.

mod session;

pub use session::{Reply, Session};
