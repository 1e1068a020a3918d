pub mod clock;
pub mod message;
pub mod screen;

pub use clock::{format_time, Clock, SystemClock};
pub use message::{Bubble, Message};
pub use screen::ChatScreen;
