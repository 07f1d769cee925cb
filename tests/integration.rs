// SPDX-License-Identifier: MPL-2.0
use std::fs;
use std::time::Instant;
use tempfile::tempdir;
use toastboard::config::{self, Config};
use toastboard::feed;
use toastboard::i18n::fluent::I18n;
use toastboard::ui::notifications::list::{self, Body};
use toastboard::ui::notifications::{NotificationCard, NotificationRecord, Severity, StyleClass};

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("notification-list-hide"), "Hide");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("notification-list-hide"), "Masquer");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_card_resolves_every_tag() {
    let cases = [
        (Some("info"), StyleClass::Info, "ℹ️"),
        (Some("success"), StyleClass::Success, "✅"),
        (Some("warning"), StyleClass::Warning, "⚠️"),
        (Some("error"), StyleClass::Error, "❌"),
        (Some("critical"), StyleClass::Info, "ℹ️"),
        (Some("Warning"), StyleClass::Info, "ℹ️"),
        (None, StyleClass::Info, "ℹ️"),
    ];

    for (tag, class, icon) in cases {
        let card = NotificationCard::<()>::new("message").severity(Severity::from_tag(tag));
        let variant = card.contents().variant;
        assert_eq!(variant.class, class, "tag {tag:?}");
        assert_eq!(variant.icon, icon, "tag {tag:?}");
    }
}

#[test]
fn test_card_optional_parts() {
    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Closed,
    }

    let bare = NotificationCard::<Message>::new("Saved").kind("success");
    let contents = bare.contents();
    assert!(contents.timestamp.is_none());
    assert!(contents.dismiss.is_none());

    let empty_timestamp = NotificationCard::<Message>::new("Saved").timestamp("");
    assert!(empty_timestamp.contents().timestamp.is_none());

    let full = NotificationCard::new("Saved")
        .timestamp("2 minutes ago")
        .on_close(Message::Closed);
    let contents = full.contents();
    assert_eq!(contents.timestamp, Some("2 minutes ago"));
    assert_eq!(contents.dismiss, Some(&Message::Closed));
}

#[test]
fn test_feed_file_drives_the_list() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("feed.toml");
    fs::write(
        &path,
        r#"
[[notifications]]
message = "A"
timestamp = "t1"

[[notifications]]
message = "B"
timestamp = "t2"
"#,
    )
    .expect("Failed to write feed");

    let feed = feed::load_from_path(&path).expect("Failed to load feed");
    let mut state = list::State::new();

    let Body::Items(items) = list::body(&state, &feed.notifications) else {
        panic!("expected items");
    };
    assert_eq!(items.len(), 2);
    assert_eq!((items[0].message, items[0].timestamp), ("A", "t1"));
    assert_eq!((items[1].message, items[1].timestamp), ("B", "t2"));

    list::update(&mut state, list::Message::ToggleVisibility, Instant::now());
    assert_eq!(list::body(&state, &feed.notifications), Body::Hidden);
}

#[test]
fn test_empty_list_shows_placeholder() {
    let state = list::State::new();
    let records: Vec<NotificationRecord> = Vec::new();
    assert_eq!(list::body(&state, &records), Body::Empty);

    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    assert_eq!(i18n.tr("notification-list-empty"), "No notifications available.");
}
