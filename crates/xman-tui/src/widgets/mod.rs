//! UI widgets

mod board;
mod messages;
mod status;

pub use board::BoardWidget;
pub use messages::MessagesWidget;
pub use status::StatusWidget;
