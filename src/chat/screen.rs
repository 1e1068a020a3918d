use super::clock::{Clock, SystemClock};
use super::message::{Bubble, Message};

type ChangeHook = Box<dyn FnMut(&ChatScreen)>;

/// State behind the chat screen: the append-only message list and the
/// input buffer. Mutated only from the UI thread.
pub struct ChatScreen {
    messages: Vec<Message>,
    input: String,
    clock: Box<dyn Clock>,
    on_change: Option<ChangeHook>,
}

impl Default for ChatScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatScreen {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            clock,
            on_change: None,
        }
    }

    /// Called after every append, once the new message is in the list.
    pub fn set_on_change(&mut self, hook: impl FnMut(&ChatScreen) + 'static) {
        self.on_change = Some(Box::new(hook));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Moves the buffer into a user message and returns the question to send.
    /// Whitespace-only input leaves everything untouched and returns `None`.
    pub fn submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let question = std::mem::take(&mut self.input);
        let msg = Message::user(question.clone(), self.clock.as_ref());
        self.push(msg);
        Some(question)
    }

    pub fn receive_reply(&mut self, text: impl Into<String>) {
        let msg = Message::agent(text, self.clock.as_ref());
        self.push(msg);
    }

    /// Oldest first. Each call starts over from the first message.
    pub fn bubbles(&self) -> impl Iterator<Item = Bubble<'_>> + '_ {
        self.bubbles_from(0)
    }

    pub fn bubbles_from(&self, start: usize) -> impl Iterator<Item = Bubble<'_>> + '_ {
        self.messages.iter().skip(start).map(Bubble::from)
    }

    fn push(&mut self, msg: Message) {
        self.messages.push(msg);
        if let Some(mut hook) = self.on_change.take() {
            hook(self);
            self.on_change = Some(hook);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::clock::FixedClock;
    use chrono::NaiveTime;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn screen() -> ChatScreen {
        ChatScreen::with_clock(Box::new(FixedClock(
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        )))
    }

    #[test]
    fn submit_appends_user_message_and_clears_input() {
        let mut s = screen();
        s.set_input("  what is rust?  ");
        let question = s.submit();
        assert_eq!(question.as_deref(), Some("  what is rust?  "));
        assert_eq!(s.input(), "");
        assert_eq!(s.messages().len(), 1);
        let msg = &s.messages()[0];
        assert!(msg.is_user);
        assert_eq!(msg.text, "  what is rust?  ");
        assert_eq!(msg.timestamp, "9:30 AM");
    }

    #[test]
    fn multi_line_input_is_sent_verbatim() {
        let mut s = screen();
        s.set_input("find flights\nto Lisbon\n");
        assert_eq!(s.submit().as_deref(), Some("find flights\nto Lisbon\n"));
        assert_eq!(s.messages()[0].text, "find flights\nto Lisbon\n");
        assert_eq!(s.input(), "");
    }

    #[test]
    fn blank_input_is_a_no_op() {
        for blank in ["", "   ", "\n\t "] {
            let mut s = screen();
            s.set_input(blank);
            assert_eq!(s.submit(), None);
            assert!(s.messages().is_empty());
            assert_eq!(s.input(), blank);
        }
    }

    #[test]
    fn replies_are_agent_messages_in_arrival_order() {
        let mut s = screen();
        s.set_input("first");
        s.submit();
        s.set_input("second");
        s.submit();
        s.receive_reply("answer two");
        s.receive_reply("answer one");

        let texts: Vec<_> = s.messages().iter().map(|m| (m.text.as_str(), m.is_user)).collect();
        assert_eq!(
            texts,
            vec![
                ("first", true),
                ("second", true),
                ("answer two", false),
                ("answer one", false),
            ]
        );
    }

    #[test]
    fn bubbles_restart_on_each_call() {
        let mut s = screen();
        s.set_input("hello");
        s.submit();
        s.receive_reply("hi");

        let captions: Vec<_> = s.bubbles().map(|b| b.caption).collect();
        assert_eq!(captions, vec!["You • 9:30 AM", "Agent • 9:30 AM"]);
        assert_eq!(s.bubbles().count(), 2);
        let tail: Vec<_> = s.bubbles_from(1).map(|b| b.text).collect();
        assert_eq!(tail, vec!["hi"]);
    }

    #[test]
    fn change_hook_fires_after_each_append() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut s = screen();
        {
            let seen = seen.clone();
            s.set_on_change(move |screen| seen.borrow_mut().push(screen.messages().len()));
        }
        s.set_input("  ");
        s.submit();
        s.set_input("ping");
        s.submit();
        s.receive_reply("pong");
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }
}
