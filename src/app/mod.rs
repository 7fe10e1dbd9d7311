// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns the one [`LanguageService`] and lends it to the settings
//! screen. Startup resolves the language in this order: `--lang`, the
//! persisted preference, the device locales, then the default language.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::{ConfigStore, LanguageService, LocaleCatalog, PreferenceStore, SystemLocales};
use crate::ui::language_switcher;
use crate::ui::settings;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: LanguageService,
    settings: settings::State,
    /// Translation key of a warning raised while loading the config.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", self.i18n.current())
            .field("sheet_open", &self.settings.switcher().is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 360;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the language service and the settings screen from flags
    /// and the persisted config.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let app = Self::with_store(flags, Box::new(ConfigStore::new()), None);
        (app, Task::none())
    }

    /// `config_dir` overrides where the persisted preference is read from.
    fn with_store(
        flags: Flags,
        store: Box<dyn PreferenceStore>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let catalog = LocaleCatalog::load(flags.i18n_dir.as_deref().map(Path::new));
        if let Err(err) = catalog.validate() {
            tracing::warn!(error = %err, "translation catalog is incomplete");
        }

        let (config, config_warning) = config::load_with_override(config_dir);
        let requested = [flags.lang.as_deref(), config.general.language.as_deref()];
        let mut i18n = LanguageService::with_requested(catalog, store, &SystemLocales, &requested);
        let settings = settings::State::mount(&mut i18n);

        Self {
            i18n,
            settings,
            config_warning,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("app.title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.settings.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let message = match message {
            Message::Settings(message) => message,
            Message::Tick(now) => {
                settings::Message::Switcher(language_switcher::Message::Tick(now))
            }
            Message::EscapePressed => settings::Message::Switcher(language_switcher::Message::Dismiss),
        };

        if settings::update(&mut self.settings, message, &mut self.i18n)
            == settings::Event::LanguageSheetClosed
        {
            tracing::debug!(language = %self.i18n.current(), "language sheet closed");
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        settings::view(settings::ViewContext {
            i18n: &self.i18n,
            state: &self.settings,
            warning_key: self.config_warning.as_deref(),
        })
        .map(Message::Settings)
    }
}
