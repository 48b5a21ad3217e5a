use test_fixtures::{
    fixture_exists, list_fixtures, load_fixture, load_fixture_value, load_golden_scenarios,
    GoldenScenario,
};

#[test]
fn golden_directory_is_listed_in_order() {
    let files = list_fixtures("golden");
    assert!(files.len() >= 9);
    let names: Vec<_> = files.iter().filter_map(|p| p.file_name()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn missing_subdirectory_lists_nothing() {
    assert!(list_fixtures("no-such-dir").is_empty());
    assert!(!fixture_exists("golden/no-such-file.json"));
}

#[test]
fn single_fixture_loads_typed_and_raw() {
    let path = "golden/01_versus_even_single.json";
    assert!(fixture_exists(path));

    let scenario: GoldenScenario = load_fixture(path);
    assert_eq!(scenario.mode, "versus");
    assert_eq!(scenario.allies, vec![10_000]);

    let raw = load_fixture_value(path);
    assert_eq!(raw["name"], scenario.name.as_str());
}

#[test]
fn golden_scenarios_match_their_files() {
    let scenarios = load_golden_scenarios();
    let files = list_fixtures("golden");
    assert_eq!(scenarios.len(), files.len());
    for (scenario, path) in scenarios.iter().zip(&files) {
        let name = path.file_name().unwrap().to_string_lossy();
        let direct: GoldenScenario = load_fixture(&format!("golden/{name}"));
        assert_eq!(scenario.name, direct.name);
        assert_eq!(scenario.allies, direct.allies);
    }
}

#[test]
fn every_golden_scenario_is_well_formed() {
    for scenario in load_golden_scenarios() {
        let expected = &scenario.expected;
        assert!(expected.tolerance > 0.0, "{}", scenario.name);
        assert!(scenario.mode == "versus" || scenario.mode == "solo");
        if expected.insufficient_data {
            assert!(expected.per_unit.is_empty(), "{}", scenario.name);
        } else {
            assert_eq!(expected.ranking.len(), expected.per_unit.len(), "{}", scenario.name);
        }
    }
}
