/// Fixed-capacity message builder and output framing.
pub mod message;
/// Record header flags, TNF, and record descriptors.
pub mod record;

pub use message::{Framing, NdefMessage, NLEN_SIZE};
pub use record::{NdefRecord, Payload, PayloadEncode, Tnf};
