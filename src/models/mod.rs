pub mod entry;
pub mod user;

pub use entry::{Emotion, Entry, EntryPatch, NewEntry, Trigger};
pub use user::{NewUser, User};
