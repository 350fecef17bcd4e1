// SPDX-License-Identifier: MPL-2.0
//! Command-line entry point.

use med_enhancer::app::{self, paths, Flags};

const HELP: &str = "\
med_enhancer - desktop client for a medical-image enhancement service

USAGE:
  med_enhancer [OPTIONS] [IMAGE]

ARGS:
  [IMAGE]                  Image file to load on startup

OPTIONS:
  --lang <LOCALE>          Locale override in BCP-47 form (e.g. fr, en-US)
  --service-url <URL>      Enhancement service base URL for this run
  --config-dir <DIR>       Config directory override (settings.toml)
  --data-dir <DIR>         Data directory override (state files)
  -h, --help               Print help
  -V, --version            Print version
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("med_enhancer {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        service_url: args.opt_value_from_str("--service-url").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or(None),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    // Directory overrides must be in place before anything touches the
    // config or state files.
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}
