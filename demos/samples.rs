// std imports
use std::process;

// third-party imports
use env_logger::{self as logger};

// local imports
use minire::{Result, is_match};

const MINIRE_DEBUG_LOG: &str = "MINIRE_DEBUG_LOG";
const MINIRE_DEBUG_LOG_STYLE: &str = "MINIRE_DEBUG_LOG_STYLE";

const SAMPLES: &[(&str, &str, bool)] = &[
    ("^a[bc]*d$", "abcbcd", true),
    ("a[xyz]+z", "axyzxyzxz", true),
    ("^[A-Z]+[0-9]*$", "HELLO123", true),
    (".[aeiou]*.", "baiiiz", true),
    ("^[^0-9]*$", "NoDigitsHere", true),
    ("h[ae]*llo", "hello", true),
    ("^colou?r$", "color", true),
    ("ab*bc", "abbc", true),
    ("^a[bc]*d$", "abcecd", false),
    ("^[A-Z]+[0-9]*$", "Hello123", false),
    ("^h[ae]*llo$", "hxllo", false),
];

// ---

fn bootstrap() {
    if std::env::var(MINIRE_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(MINIRE_DEBUG_LOG).write_style(MINIRE_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .init()
    }
}

fn run() -> Result<bool> {
    bootstrap();

    let mut ok = true;
    for &(pattern, text, expected) in SAMPLES {
        let matched = is_match(pattern, text)?;
        let status = if matched == expected { "ok" } else { "UNEXPECTED" };
        println!("{matched:5}  {pattern:16} {text:16} {status}");
        ok &= matched == expected;
    }

    Ok(ok)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    }
}
