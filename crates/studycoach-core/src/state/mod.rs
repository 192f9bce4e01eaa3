pub mod codec;
pub mod coerce;
pub mod slot;
pub mod store;

pub use coerce::{Attachment, Coerced, DEFAULT_TARGET_SCORE, MAX_ENTRIES_PER_DAY};
pub use slot::{FileSlot, MemorySlot, PersistenceSlot};
pub use store::{keys, StateStore};
