// SPDX-License-Identifier: MPL-2.0
//! `toastboard` provides two notification ("toast") components for Iced:
//! a severity-tinted [`NotificationCard`](ui::notifications::NotificationCard)
//! and a [`notification list`](ui::notifications::list) with a show/hide
//! toggle, plus a small demo application hosting both.

#![doc(html_root_url = "https://docs.rs/toastboard/0.1.0")]

pub mod app;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod ui;

pub use app::config;
