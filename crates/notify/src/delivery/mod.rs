//! External delivery channels for site notifications.

pub mod email;
