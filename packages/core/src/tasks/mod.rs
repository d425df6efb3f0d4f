pub mod errors;
pub mod interleave;
pub mod slot;

pub use errors::slot_error::SlotError;
pub use interleave::interleave;
pub use slot::Slot;
