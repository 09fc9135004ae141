// SPDX-License-Identifier: MPL-2.0
use fade_toast::app::{self, Flags};

const HELP: &str = "\
fade_toast - single fading toast demo

USAGE:
  fade_toast [OPTIONS]

OPTIONS:
  --policy <replace|drop>   What a new toast does while one is showing
  --duration-ms <MS>        Default display time (default: 3000)
  --fade-ms <MS>            Fade-in/fade-out length (default: 200)
  --config-dir <PATH>       Directory holding settings.toml
  -h, --help                Print this help

ENVIRONMENT:
  FADE_TOAST_CONFIG_DIR     Config directory when --config-dir is absent
  RUST_LOG                  Log filter (default: info)
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match Flags::parse(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
