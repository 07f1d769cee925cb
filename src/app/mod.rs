// SPDX-License-Identifier: MPL-2.0
//! Application root state for the notification demo.
//!
//! The `App` struct wires a card gallery and a notification list together
//! with localization and theming, and drives their transitions with a tick
//! subscription that only runs while something is moving.

pub mod config;
pub mod gallery;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::feed::{self, NotificationFeed};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::list;
use config::Config;
use gallery::Gallery;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Key of the warning card shown when an explicit feed cannot be loaded.
pub const FEED_WARNING_KEY: &str = "notification-feed-load-error";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: Theme,
    gallery: Gallery,
    list: list::State,
    feed: NotificationFeed,
    /// Clock for transitions: the instant of the last processed message.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cards", &self.gallery.entries().len())
            .field("list_visible", &self.list.is_visible())
            .field("notifications", &self.feed.notifications.len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let now = Instant::now();
        Self {
            gallery: Gallery::new(&i18n, now),
            i18n,
            theme: Theme::Light,
            list: list::State::mounted_at(now),
            feed: NotificationFeed::sample(),
            now,
        }
    }
}

/// Builds the window settings from the configured geometry.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();
    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load();
    let window = window_settings(&config);

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, config_warning) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, &config, config_warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from CLI flags and loaded settings.
    fn new(flags: Flags, config: &Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let now = Instant::now();
        let i18n = I18n::new(flags.lang.clone(), config);
        let mut gallery = Gallery::new(&i18n, now);

        let feed = match flags.feed_path {
            Some(path) => match feed::load_from_path(&path) {
                Ok(feed) => feed,
                Err(err) => {
                    log::warn!("{err}; the notification list starts empty");
                    gallery.push("error", i18n.tr(FEED_WARNING_KEY), None, now);
                    NotificationFeed::default()
                }
            },
            None => NotificationFeed::sample(),
        };

        // Show warnings for config loading issues
        if let Some(key) = config_warning {
            gallery.push("warning", i18n.tr(&key), None, now);
        }

        log::info!(
            "starting with {} card(s) and {} notification(s)",
            gallery.entries().len(),
            feed.notifications.len()
        );

        let app = App {
            theme: config.general.theme_mode.to_theme(),
            i18n,
            gallery,
            list: list::State::mounted_at(now),
            feed,
            now,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Whether any transition still needs animation frames.
    fn is_animating(&self) -> bool {
        self.gallery.is_animating(self.now) || self.list.is_animating(self.now)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.is_animating())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            list: &mut self.list,
            gallery: &mut self.gallery,
            now: &mut self.now,
        };

        match message {
            Message::List(list_message) => {
                update::handle_list_message(&mut ctx, list_message, Instant::now());
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message, Instant::now());
            }
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            list: &self.list,
            notifications: &self.feed.notifications,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::motion;
    use crate::ui::notifications::list::Body;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    fn english_flags() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        }
    }

    fn settle(app: &mut App) {
        let later = app.now + Duration::from_secs(1);
        let _ = app.update(Message::Tick(later));
    }

    #[test]
    fn new_app_uses_sample_feed_without_feed_flag() {
        let (app, _task) = App::new(english_flags(), &Config::default(), None);
        assert_eq!(app.feed, NotificationFeed::sample());
        assert_eq!(app.gallery.entries().len(), 5);
        assert_eq!(app.title(), "Toastboard");
    }

    #[test]
    fn new_app_loads_feed_from_flag() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("feed.toml");
        fs::write(&path, "[[notifications]]\nmessage = \"Disk full\"\n").expect("write");

        let flags = Flags {
            feed_path: Some(path),
            ..english_flags()
        };
        let (app, _task) = App::new(flags, &Config::default(), None);
        assert_eq!(app.feed.notifications.len(), 1);
        assert_eq!(app.feed.notifications[0].message, "Disk full");
    }

    #[test]
    fn unreadable_feed_starts_empty_with_error_card() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            feed_path: Some(temp_dir.path().join("absent.toml")),
            ..english_flags()
        };
        let (app, _task) = App::new(flags, &Config::default(), None);

        assert!(app.feed.is_empty());
        assert_eq!(body_of(&app), Body::Empty);
        let last = app.gallery.entries().last().expect("error card");
        assert_eq!(last.tag, "error");
        assert_eq!(last.message, app.i18n.tr(FEED_WARNING_KEY));
    }

    #[test]
    fn config_warning_becomes_warning_card() {
        let (app, _task) = App::new(
            english_flags(),
            &Config::default(),
            Some(config::LOAD_WARNING_KEY.to_string()),
        );
        let last = app.gallery.entries().last().expect("warning card");
        assert_eq!(last.tag, "warning");
        assert_eq!(last.message, app.i18n.tr(config::LOAD_WARNING_KEY));
    }

    fn body_of(app: &App) -> Body<'_> {
        list::body(&app.list, &app.feed.notifications)
    }

    #[test]
    fn list_toggle_round_trips_through_update() {
        let mut app = App::default();
        assert!(matches!(body_of(&app), Body::Items(_)));

        let _ = app.update(Message::List(list::Message::ToggleVisibility));
        assert_eq!(body_of(&app), Body::Hidden);

        let _ = app.update(Message::List(list::Message::ToggleVisibility));
        assert!(matches!(body_of(&app), Body::Items(_)));
    }

    #[test]
    fn dismissed_card_is_removed_after_its_exit() {
        let mut app = App::default();
        let id = app.gallery.entries()[0].id;

        let _ = app.update(Message::Gallery(gallery::Message::Dismiss(id)));
        assert_eq!(app.gallery.entries().len(), 5);
        assert!(app.is_animating());

        settle(&mut app);
        assert_eq!(app.gallery.entries().len(), 4);
        assert!(!app.is_animating());
    }

    #[test]
    fn ticks_stop_once_transitions_finish() {
        let mut app = App::default();
        assert!(app.is_animating());

        let _ = app.update(Message::Tick(app.now + motion::CARD.duration));
        assert!(!app.is_animating());

        let _ = app.update(Message::List(list::Message::ToggleVisibility));
        assert!(app.is_animating());
        settle(&mut app);
        assert!(!app.is_animating());
    }

    #[test]
    fn reset_restores_the_default_cards() {
        let mut app = App::default();
        let ids: Vec<_> = app.gallery.entries().iter().map(|e| e.id).collect();
        for id in ids {
            let _ = app.update(Message::Gallery(gallery::Message::Dismiss(id)));
        }
        settle(&mut app);
        assert!(app.gallery.entries().is_empty());

        let _ = app.update(Message::Gallery(gallery::Message::Reset));
        assert_eq!(app.gallery.entries().len(), 5);
    }

    #[test]
    fn window_settings_follow_config() {
        let mut config = Config::default();
        config.window.width = Some(600);
        config.window.height = Some(100);
        let settings = window_settings(&config);
        assert_eq!(settings.size.width, 600.0);
        assert_eq!(settings.size.height, config::MIN_WINDOW_HEIGHT as f32);
    }

    #[test]
    fn view_renders_in_every_state() {
        let mut app = App::default();
        let _ = app.view();
        let _ = app.update(Message::List(list::Message::ToggleVisibility));
        let _ = app.view();
        settle(&mut app);
        let _ = app.view();
    }
}
