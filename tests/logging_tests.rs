use log::LevelFilter;
use naval_duel::{init_logging, parse_log_level};

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level(None), LevelFilter::Info);
    assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_log_level(Some(" WARN ")), LevelFilter::Warn);
    assert_eq!(parse_log_level(Some("off")), LevelFilter::Off);
    assert_eq!(parse_log_level(Some("")), LevelFilter::Info);
    assert_eq!(parse_log_level(Some("loud")), LevelFilter::Info);
}

#[test]
fn test_init_logging_twice_keeps_first_logger() {
    let first = init_logging();
    assert_eq!(log::max_level(), first);
    let second = init_logging();
    assert_eq!(second, first);
    assert_eq!(log::max_level(), first);
}
