//! Repository modules for database operations

pub mod slots;

pub use slots::SlotRepository;
