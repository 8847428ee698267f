// SPDX-License-Identifier: MPL-2.0
use showdisplay::app::command::{self, ConsoleCommand, ParseError};
use showdisplay::app::{config, paths, Command, ControlSession, Flags, StatusMessage};
use showdisplay::application::port::DisplayProvider;
use showdisplay::application::query::{Preview, PreviewContent};
use showdisplay::i18n::fluent::I18n;
use showdisplay::infrastructure::{HeadlessDisplay, ImageRsDecoder};
use chrono::Utc;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
showdisplay [--lang LANG] [--config-dir DIR] [FILES...]

Reads one command per line from standard input. Type 'help' for the list.";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let files = args.finish().into_iter().map(PathBuf::from).collect();

    Ok(Some(Flags {
        lang,
        config_dir,
        files,
    }))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(flags) = parse_flags()? else {
        println!("{HELP}");
        return Ok(());
    };

    paths::init_cli_overrides(flags.config_dir);
    let (config, config_warning) = config::load();
    let i18n = I18n::new(flags.lang, &config);
    if let Some(key) = config_warning {
        println!("{}", StatusMessage::warning(i18n.tr(&key)));
    }

    let provider = HeadlessDisplay::new(config.display.surface_bounds());
    let mut session =
        ControlSession::new(provider, Box::new(ImageRsDecoder::new()), &config, i18n);

    if !flags.files.is_empty() {
        println!("{}", session.update(Command::AddFiles(flags.files)));
    }
    println!("{}", session.i18n().tr("status-ready"));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        match command::parse_line(&line) {
            Ok(ConsoleCommand::Session(command)) => println!("{}", session.update(command)),
            Ok(ConsoleCommand::List) => print_list(&session),
            Ok(ConsoleCommand::Status) => print_status(&session),
            Ok(ConsoleCommand::Export(path)) => match path.or_else(default_report_path) {
                Some(path) => {
                    let result = session.export_diagnostics(&path);
                    println!("{}", session.export_status(&result));
                }
                None => println!(
                    "{}",
                    StatusMessage::warning(session.i18n().tr("warning-no-export-dir"))
                ),
            },
            Ok(ConsoleCommand::Help) => println!("{}", command::USAGE),
            Ok(ConsoleCommand::Quit) => break,
            Err(ParseError::Empty) => {}
            Err(err) => println!(
                "{}",
                StatusMessage::warning(session.i18n().tr_with_args(
                    "error-command",
                    &[("reason", err.to_string().as_str().into())]
                ))
            ),
        }
        stdout.flush()?;
    }

    // Dropping the session releases the playback engine before exit.
    drop(session);
    Ok(())
}

/// Timestamped report inside the config directory, created on demand.
fn default_report_path() -> Option<PathBuf> {
    let dir = paths::resolve_config_dir(None)?;
    if let Err(err) = fs::create_dir_all(dir.path()) {
        log::warn!("Cannot create {}: {err}", dir.path().display());
    }
    Some(dir.report_file(Utc::now()))
}

fn print_list<P: DisplayProvider>(session: &ControlSession<P>) {
    let catalog = session.catalog();
    for (index, entry) in catalog.iter().enumerate() {
        let marker = if session.has_selection() && index == catalog.selected_index() {
            '>'
        } else {
            ' '
        };
        println!(
            "{marker} {index:>3}  {:<5}  {}",
            entry.kind().label(),
            entry.display_name()
        );
    }
    println!(
        "{}",
        session
            .i18n()
            .tr_with_args("status-total-files", &[("count", catalog.count().into())])
    );
}

fn print_status<P: DisplayProvider>(session: &ControlSession<P>) {
    let display = session.display();
    let active = display
        .and_then(|display| display.active_entry())
        .map_or("-", |entry| entry.display_name());
    println!(
        "display: {}  state: {}  active: {active}",
        if display.is_some() { "open" } else { "closed" },
        session.presentation_state(),
    );

    if let Some(preview) = session.preview() {
        print_preview(session.i18n(), preview);
    }
}

fn print_preview(i18n: &I18n, preview: &Preview) {
    let kind = preview.kind().label().to_uppercase();
    let size = preview
        .size_mb()
        .map_or_else(|| "?".to_string(), |mb| format!("{mb:.2}"));
    let path = preview.path().display().to_string();

    println!("{}", i18n.tr_with_args("preview-name", &[("name", preview.name().into())]));
    println!("{}", i18n.tr_with_args("preview-type", &[("kind", kind.as_str().into())]));
    println!("{}", i18n.tr_with_args("preview-size", &[("size", size.as_str().into())]));
    println!("{}", i18n.tr_with_args("preview-path", &[("path", path.as_str().into())]));

    match preview.content() {
        PreviewContent::Thumbnail(image) => {
            println!("[thumbnail {}x{}]", image.width(), image.height());
        }
        PreviewContent::VideoPlaceholder => println!("{}", i18n.tr("preview-video-placeholder")),
        PreviewContent::Unavailable(reason) => println!(
            "{}",
            i18n.tr_with_args("preview-unavailable", &[("reason", reason.as_str().into())])
        ),
    }
}
