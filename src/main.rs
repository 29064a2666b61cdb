// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};

const HELP: &str = "\
iced_folio - photography portfolio gallery and lightbox viewer

USAGE:
  iced_folio [OPTIONS] [MANIFEST]

ARGS:
  <MANIFEST>            Manifest path or URL, overriding the configured one

OPTIONS:
  --manifest <SOURCE>   Same as the positional argument
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("iced_folio=info".parse().unwrap()),
        )
        .init();

    let manifest: Option<String> = args.opt_value_from_str("--manifest").unwrap();
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap();
    let manifest = manifest.or_else(|| {
        args.finish()
            .into_iter()
            .next()
            .and_then(|arg| arg.into_string().ok())
    });

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        manifest,
        config_dir,
    })
}
