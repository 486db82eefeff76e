//! Types exchanged with the notification API.

mod notification;

pub use notification::*;
