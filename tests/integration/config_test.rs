//! Integration tests for configuration loading

use super::helpers::{ms, temp_config};
use wisp_term::sim::{Event, Phase, ViewStateMachine};
use wisp_term::Config;

#[test]
fn config_file_drives_the_simulation() {
    let (_dir, path) = temp_config(
        r#"
        [timing]
        start_delay_ms = 100
        per_char_ms = 50
        completion_delay_ms = 200

        [terminal]
        command = "go"
        "#,
    );
    let config = Config::load_from(&path).unwrap();
    let mut machine = ViewStateMachine::new(config.script());

    machine.dispatch(Event::VisibilityTriggered).unwrap();
    machine.advance_by(ms(150));
    assert_eq!(machine.state().typed_prefix, "go");

    // start + 2 chars + completion
    machine.advance_by(ms(249));
    assert_eq!(machine.state().phase, Phase::Typing);
    machine.advance_by(ms(1));
    assert_eq!(machine.state().phase, Phase::Menu);
}

#[test]
fn monitor_metrics_come_from_config() {
    let (_dir, path) = temp_config(
        r#"
        [monitor]
        pnl_today_cents = -1005
        win_rate = 41.0
        "#,
    );
    let config = Config::load_from(&path).unwrap();
    let tiles = config.script().monitor.tiles();

    assert_eq!(tiles[0].value, "-$10.05");
    assert_eq!(tiles[1].value, "41.0%");
    assert_eq!(tiles[2].value, "3");
    assert_eq!(tiles[3].value, "12");
}

#[test]
fn saved_defaults_load_back_identically() {
    let (dir, _) = temp_config("");
    let path = dir.path().join("sub").join("config.toml");

    Config::default().save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}
