pub mod contact;

pub use contact::{Contact, ContactBook};
