use super::clock::{format_time, Clock};

const CAPTION_SEPARATOR: &str = " • ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub is_user: bool,
    pub timestamp: String,
}

impl Message {
    pub fn user(text: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::stamped(text.into(), true, clock)
    }

    pub fn agent(text: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::stamped(text.into(), false, clock)
    }

    fn stamped(text: String, is_user: bool, clock: &dyn Clock) -> Self {
        Self {
            text,
            is_user,
            timestamp: format_time(clock.now()),
        }
    }

    pub fn author_label(&self) -> &'static str {
        if self.is_user { "You" } else { "Agent" }
    }

    /// Line shown under the bubble text, e.g. `You • 3:47 PM`.
    pub fn caption(&self) -> String {
        format!("{}{}{}", self.author_label(), CAPTION_SEPARATOR, self.timestamp)
    }
}

/// Render-ready view of one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble<'a> {
    pub text: &'a str,
    pub caption: String,
    pub is_user: bool,
}

impl<'a> From<&'a Message> for Bubble<'a> {
    fn from(msg: &'a Message) -> Self {
        Self {
            text: &msg.text,
            caption: msg.caption(),
            is_user: msg.is_user,
        }
    }
}
