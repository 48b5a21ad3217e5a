//! Environment overrides live in their own test binary: the process
//! environment is shared by every test in a binary.

use initiative_core::config::InitiativeConfig;

#[test]
fn env_overrides_beat_defaults_and_bad_values_are_ignored() {
    std::env::set_var("INITIATIVE_GROUP_SLICES", "200");
    std::env::set_var("INITIATIVE_LOG_LEVEL", "debug");
    std::env::set_var("INITIATIVE_SINGLE_UNIT_SLICES", "lots");
    std::env::set_var("INITIATIVE_JSON_LOGS", "true");

    let config = InitiativeConfig::load(None).unwrap();
    assert_eq!(config.quadrature.group_slices, 200);
    assert_eq!(config.observability.log_level, "debug");
    assert!(config.observability.json_logs);
    assert_eq!(config.quadrature.single_unit_slices, 60);

    std::env::set_var("INITIATIVE_GROUP_SLICES", "0");
    assert!(InitiativeConfig::load(None).is_err());

    for key in [
        "INITIATIVE_GROUP_SLICES",
        "INITIATIVE_LOG_LEVEL",
        "INITIATIVE_SINGLE_UNIT_SLICES",
        "INITIATIVE_JSON_LOGS",
    ] {
        std::env::remove_var(key);
    }
}
