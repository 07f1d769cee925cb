// SPDX-License-Identifier: MPL-2.0
//! Localized strings.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`. The
//! active locale comes from the `--lang` flag, then the config file, then the
//! OS locale, and finally `en-US`.

pub mod fluent;
