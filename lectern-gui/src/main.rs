#![windows_subsystem = "windows"]

use std::{error::Error, path::PathBuf, process};

use tracing::{error, info};

use lectern_gui::{
    config::Config, dir::LecternDirectory, logger, state::State, VERSION,
};
use lectern_ui::{component::text, font};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(LecternDirectory),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: lectern-gui [OPTIONS]

Options:
    --datadir <PATH>    Path of lectern datadir
    -v, --version       Display lectern-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--datadir" {
            if let Some(a) = iter.next() {
                res.push(Arg::DatadirPath(LecternDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else {
            return Err(format!("Unknown argument '{}'", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let datadir = match args.as_slice() {
        [] => LecternDirectory::new_default()?,
        [Arg::DatadirPath(datadir_path)] => datadir_path.clone(),
        _ => {
            return Err("Unknown args combination".into());
        }
    };
    if !datadir.exists() {
        datadir.init()?;
    }

    let config = Config::from_file_or_default(&datadir.config_path())?;
    let log_level = match logger::parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    logger::setup_logger(log_level, &datadir)?;
    setup_panic_hook();

    info!("lectern-gui {} using {}", VERSION, datadir.path().display());

    let settings = iced::Settings {
        id: Some("Lectern".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        min_size: Some(iced::Size {
            width: 800.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    let mut state = State::new(&config)?;
    let init = state.init();

    if let Err(e) = iced::application(State::title, State::update, State::view)
        .theme(State::theme)
        .subscription(State::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || (state, init))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        process::exit(1);
    }));
}
