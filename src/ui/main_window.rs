use adw::prelude::*;
use adw::Application;

use crate::api::ApiClient;
use crate::app::AppConfig;

pub fn show_main_window(app: &Application, config: &AppConfig) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("CodexWeb")
        .default_width(420)
        .default_height(720)
        .build();

    crate::ui::chat_view::install_css();

    let client = ApiClient::new(config.base_url.clone());
    let chat = crate::ui::chat_view::ChatView::new(client);

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk4::Label::new(Some("CodexWeb"));
    title.add_css_class("title-2");
    header.set_title_widget(Some(&title));
    container.append(&header);
    container.append(&chat);
    window.set_content(Some(&container));
    window.present();
}
