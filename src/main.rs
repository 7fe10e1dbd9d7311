// SPDX-License-Identifier: MPL-2.0
use iced_lingua::app::{self, Flags};
use iced_lingua::logging;

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
        i18n_dir: opt_value(&mut args, "--i18n-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(flag = key, error = %err, "invalid command-line value");
            None
        }
    }
}
