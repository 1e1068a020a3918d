use gtk4::prelude::*;
use gtk4 as gtk;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::api::{settle_reply, ApiClient};
use crate::chat::{Bubble, ChatScreen};

const CSS: &str = r#"
.bubble { padding: 12px; border-radius: 8px; margin-bottom: 12px; }
.bubble.user { background-color: #DBEAFE; }
.bubble.agent { background-color: #F1F5F9; }
.bubble-text { font-size: 16px; }
.bubble-caption { font-size: 12px; color: #6B7280; margin-top: 4px; }
.chat-input { border: 1px solid #D1D5DB; border-radius: 20px; }
"#;

/// Registers bubble styling for the default display. Call once at startup.
pub fn install_css() {
    let provider = gtk::CssProvider::new();
    provider.load_from_data(CSS);
    if let Some(display) = gtk::gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

pub struct ChatView;

impl ChatView {
    pub fn new(client: ApiClient) -> gtk::Widget {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(16);
        root.set_margin_bottom(16);
        root.set_margin_start(16);
        root.set_margin_end(16);

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .build();
        let messages_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
        messages_box.set_valign(gtk::Align::End);
        scroller.set_child(Some(&messages_box));
        root.append(&scroller);

        // Input row. Enter inserts a newline; Ctrl+Enter or the button sends.
        let input_row = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        let input = gtk::TextView::builder()
            .wrap_mode(gtk::WrapMode::WordChar)
            .accepts_tab(false)
            .top_margin(8)
            .bottom_margin(8)
            .left_margin(12)
            .right_margin(12)
            .tooltip_text("Type your message (Ctrl+Enter to send)")
            .build();
        let input_scroller = gtk::ScrolledWindow::builder()
            .child(&input)
            .hexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .propagate_natural_height(true)
            .min_content_height(40)
            .max_content_height(120)
            .build();
        input_scroller.add_css_class("chat-input");
        let send_btn = gtk::Button::with_label("Send");
        send_btn.add_css_class("suggested-action");
        send_btn.set_valign(gtk::Align::End);
        input_row.append(&input_scroller);
        input_row.append(&send_btn);
        root.append(&input_row);

        let screen = Rc::new(RefCell::new(ChatScreen::new()));

        // Append-only list: render just the new tail, then jump to the bottom.
        {
            let messages_box = messages_box.clone();
            let scroller = scroller.clone();
            let rendered = Cell::new(0usize);
            screen.borrow_mut().set_on_change(move |screen| {
                for bubble in screen.bubbles_from(rendered.get()) {
                    messages_box.append(&bubble_widget(&bubble));
                }
                rendered.set(screen.messages().len());
                scroll_to_end(&scroller);
            });
        }

        let buffer = input.buffer();
        {
            let screen = screen.clone();
            buffer.connect_changed(move |b| {
                let text = b.text(&b.start_iter(), &b.end_iter(), false);
                screen.borrow_mut().set_input(text.as_str());
            });
        }

        // Send actions
        {
            let send: Rc<dyn Fn()> = Rc::new(move || {
                let question = screen.borrow_mut().submit();
                let Some(question) = question else {
                    return;
                };
                buffer.set_text("");

                let client = client.clone();
                let screen = screen.clone();
                crate::utils::run_async_to_main(
                    async move { client.ask(&question).await },
                    move |outcome| screen.borrow_mut().receive_reply(settle_reply(outcome)),
                );
            });
            {
                let send = send.clone();
                send_btn.connect_clicked(move |_| (send)());
            }
            {
                let send = send.clone();
                let keys = gtk::EventControllerKey::new();
                keys.connect_key_pressed(move |_, key, _, state| {
                    let enter = key == gtk::gdk::Key::Return || key == gtk::gdk::Key::KP_Enter;
                    if enter && state.contains(gtk::gdk::ModifierType::CONTROL_MASK) {
                        (send)();
                        glib::Propagation::Stop
                    } else {
                        glib::Propagation::Proceed
                    }
                });
                input.add_controller(keys);
            }
        }

        root.upcast()
    }
}

fn bubble_widget(bubble: &Bubble<'_>) -> gtk::Widget {
    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    container.add_css_class("bubble");
    if bubble.is_user {
        container.add_css_class("user");
        container.set_halign(gtk::Align::End);
    } else {
        container.add_css_class("agent");
        container.set_halign(gtk::Align::Start);
    }

    let text = gtk::Label::new(Some(bubble.text));
    text.add_css_class("bubble-text");
    text.set_wrap(true);
    text.set_wrap_mode(gtk::pango::WrapMode::WordChar);
    text.set_max_width_chars(40);
    text.set_xalign(0.0);
    text.set_selectable(true);

    let caption = gtk::Label::new(Some(&bubble.caption));
    caption.add_css_class("bubble-caption");
    caption.set_xalign(0.0);

    container.append(&text);
    container.append(&caption);
    container.upcast()
}

// The adjustment only learns the new upper bound after layout, hence the idle.
fn scroll_to_end(scroller: &gtk::ScrolledWindow) {
    let adj = scroller.vadjustment();
    glib::idle_add_local_once(move || adj.set_value(adj.upper()));
}
