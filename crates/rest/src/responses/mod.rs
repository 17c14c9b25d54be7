//! Response payloads for the collection API.
//!
//! - [`write_status`] - `{"msg": "success" | "error"}` for updates and deletes

pub mod write_status;

pub use write_status::WriteStatus;
