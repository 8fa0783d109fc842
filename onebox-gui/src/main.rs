#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process, str::FromStr};

use iced::{Settings, Size};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

use onebox_ui::{component::text, font, theme};

use onebox_gui::{
    app::{
        config::{Config, ConfigError, DEFAULT_FILE_NAME},
        App,
    },
    dir::StudioDirectory,
    logger::setup_logger,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(StudioDirectory),
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
Usage: onebox-studio [OPTIONS]

Options:
    --datadir <PATH>    Path of the onebox datadir
    -v, --version       Display onebox-studio version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate().skip(1) {
        if arg == "--datadir" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::DatadirPath(StudioDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{}'", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let datadir = match args.as_slice() {
        [] => StudioDirectory::new_default()?,
        [Arg::DatadirPath(datadir)] => datadir.clone(),
        _ => {
            return Err("Unknown args combination".into());
        }
    };
    datadir.init()?;

    let config = match Config::from_file(&datadir.path().join(DEFAULT_FILE_NAME)) {
        Ok(config) => config,
        Err(ConfigError::NotFound) => Config::default(),
        Err(e) => {
            return Err(format!("Failed to read configuration file: {}", e).into());
        }
    };

    let log_level = if let Ok(l) = std::env::var("LOG_LEVEL") {
        LevelFilter::from_str(&l)?
    } else {
        config.log_level()?
    };

    setup_panic_hook();

    if let Err(e) = setup_logger(log_level, datadir.clone()) {
        eprintln!("Failed to set up logging: {}", e);
    }

    let settings = Settings {
        id: Some("onebox-studio".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 1280.0,
            height: 800.0,
        },
        min_size: Some(Size {
            width: 1000.0,
            height: 650.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .subscription(App::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(App::new)
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
            .unwrap_or("'unknown'");
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

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["onebox-studio".into(), "--meth".into()]).is_err());
        assert!(parse_args(vec!["onebox-studio".into(), "--datadir".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::DatadirPath(StudioDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(
                "onebox-studio --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
        assert_eq!(
            Some(vec![]),
            parse_args(vec!["onebox-studio".into()]).ok()
        );
    }
}
