use super::*;

#[test]
fn defaults_match_the_batch_launchers() {
    let settings = Settings::from_config(&Config::from_map(Vec::<(String, String)>::new()));
    assert_eq!(settings.interpreter, "python");
    assert_eq!(settings.min_version, "3.8");
    assert_eq!(settings.download_url, "https://www.python.org/downloads/");
    assert!(settings.pause);
    assert!(!settings.propagate_exit);
    assert_eq!(settings.color, ColorMode::Auto);
    assert!(settings.profiles_path.ends_with("profiles.json"));
}

#[test]
fn rc_parsing_skips_comments_and_blank_lines() {
    let map = parse_rc(
        "# launcher settings\n\
         \n\
         PYLAUNCH_INTERPRETER = python3\n\
         PYLAUNCH_PAUSE=false\n\
         not a pair\n",
    );
    assert_eq!(map.len(), 2);
    assert_eq!(map["PYLAUNCH_INTERPRETER"], "python3");
    assert_eq!(map["PYLAUNCH_PAUSE"], "false");
}

#[test]
fn bools_accept_common_spellings() {
    for v in ["true", "TRUE", "1", "yes", "on"] {
        let cfg = Config::from_map([("PYLAUNCH_PAUSE", v)]);
        assert!(cfg.get_bool("PYLAUNCH_PAUSE"), "{v} should be true");
    }
    for v in ["false", "0", "no", ""] {
        let cfg = Config::from_map([("PYLAUNCH_PAUSE", v)]);
        assert!(!cfg.get_bool("PYLAUNCH_PAUSE"), "{v} should be false");
    }
}

#[test]
fn unknown_color_falls_back_to_auto() {
    let cfg = Config::from_map([("PYLAUNCH_COLOR", "purple")]);
    assert_eq!(Settings::from_config(&cfg).color, ColorMode::Auto);
}

#[test]
fn cli_overrides_win_over_config() {
    let cfg = Config::from_map([
        ("PYLAUNCH_INTERPRETER", "python3"),
        ("PYLAUNCH_PAUSE", "true"),
        ("PYLAUNCH_COLOR", "always"),
    ]);
    let settings = Settings::from_config(&cfg).apply(&Overrides {
        interpreter: Some("py".into()),
        no_pause: true,
        propagate_exit: true,
        no_color: true,
    });
    assert_eq!(settings.interpreter, "py");
    assert!(!settings.pause);
    assert!(settings.propagate_exit);
    assert_eq!(settings.color, ColorMode::Never);
}

#[test]
fn empty_overrides_leave_settings_alone() {
    let cfg = Config::from_map([("PYLAUNCH_INTERPRETER", "python3")]);
    let base = Settings::from_config(&cfg);
    assert_eq!(base.clone().apply(&Overrides::default()), base);
}

#[test]
fn pylaunch_prefix_is_a_config_key() {
    assert!(is_config_key("PYLAUNCH_INTERPRETER"));
    assert!(is_config_key("PYLAUNCH_FUTURE_KNOB"));
    assert!(!is_config_key("PATH"));
}
