// SPDX-License-Identifier: MPL-2.0
use yatra_notify::app::{self, Flags};

const HELP: &str = "\
Yatra Notify

USAGE:
  yatra_notify [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
  --lang <TAG>             Interface language, e.g. en-US or ne-NP
  --config-dir <DIR>       Directory holding settings.toml
  --i18n-dir <DIR>         Directory of .ftl files overriding the built-in translations
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
