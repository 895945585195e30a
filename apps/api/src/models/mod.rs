pub mod chat;
pub mod transform;
