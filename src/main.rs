// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use toastboard::app::{self, paths, Flags};

const HELP: &str = "\
toastboard - notification card and list demo

USAGE:
    toastboard [OPTIONS]

OPTIONS:
    --lang <TAG>          UI language (e.g. en-US, fr)
    --feed <PATH>         TOML file of notifications for the list
    --config-dir <PATH>   Directory holding settings.toml
    -v, --verbose         Debug-level logging
    -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let level = if args.contains(["-v", "--verbose"]) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .with_module_level("toastboard", level)
        .with_colors(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let parsed = (|| -> Result<(Flags, Option<String>), pico_args::Error> {
        let flags = Flags {
            lang: args.opt_value_from_str("--lang")?,
            feed_path: args.opt_value_from_str::<_, PathBuf>("--feed")?,
        };
        let config_dir = args.opt_value_from_str("--config-dir")?;
        Ok((flags, config_dir))
    })();

    let (flags, config_dir) = match parsed {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        log::warn!("ignoring unrecognized arguments: {unused:?}");
    }

    paths::init_cli_override(config_dir);
    app::run(flags)
}
