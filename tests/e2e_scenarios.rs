//! E2E tests for the scenario table, firmware resolution and filtering

use analogue_harness::scenario::{firmware_path, harness_firmware_path, table, BoardError};
use analogue_harness::{Board, Direction, ScenarioFilter, Tier, HARNESS_BOARD};
use std::path::{Path, PathBuf};

#[test]
fn test_table_covers_both_directions_and_all_tiers() {
    let scenarios = table::all();
    for direction in [Direction::Input, Direction::Output] {
        for tier in Tier::ALL {
            assert!(
                scenarios
                    .iter()
                    .any(|s| s.direction == direction && s.tier == tier),
                "No {} scenarios for {}",
                direction,
                tier
            );
        }
    }
}

#[test]
fn test_table_uses_supported_sample_rates() {
    let rates = [44100, 48000, 88200, 96000, 176400, 192000];
    for scenario in table::all() {
        assert!(
            rates.contains(&scenario.sample_rate),
            "{} has unusual rate",
            scenario.id()
        );
    }
}

#[test]
fn test_uac1_configs_limited_to_48k() {
    for scenario in table::all().iter().filter(|s| s.config.starts_with('1')) {
        assert!(scenario.sample_rate <= 48000, "{}", scenario.id());
    }
}

#[test]
fn test_firmware_path_layout() {
    assert_eq!(
        firmware_path(Path::new("/xmos"), Board::Xk216Mc, "2i10o10xxxxxx"),
        PathBuf::from(
            "/xmos/sw_usb_audio/app_usb_aud_xk_216_mc/bin/2i10o10xxxxxx/app_usb_aud_xk_216_mc_2i10o10xxxxxx.xe"
        )
    );
}

#[test]
fn test_harness_firmware_path_layout() {
    assert_eq!(
        harness_firmware_path(Path::new("/xmos"), HARNESS_BOARD, None),
        PathBuf::from(
            "/xmos/sw_audio_analyzer/app_audio_analyzer_xcore200_mc/bin/app_audio_analyzer_xcore200_mc.xe"
        )
    );
    assert_eq!(
        harness_firmware_path(Path::new("/xmos"), HARNESS_BOARD, Some("spdif_test")),
        PathBuf::from(
            "/xmos/sw_audio_analyzer/app_audio_analyzer_xcore200_mc/bin/spdif_test/app_audio_analyzer_xcore200_mc_spdif_test.xe"
        )
    );
}

#[test]
fn test_every_scenario_resolves_a_product() {
    for scenario in table::all() {
        let product = scenario.product_name().unwrap();
        let uac1 = scenario.config.starts_with('1');
        assert_eq!(product.ends_with("(UAC1.0)"), uac1, "{}", scenario.id());
        match scenario.board {
            Board::Xk216Mc => assert!(product.starts_with("XMOS xCORE-200 MC")),
            Board::XkEvkXu316 => assert!(product.starts_with("XMOS xCORE (")),
        }
    }
}

#[test]
fn test_unrecognised_config_and_board() {
    assert!(matches!(
        Board::Xk216Mc.product_name("3i2o2"),
        Err(BoardError::UnrecognisedConfig { .. })
    ));
    assert!(matches!(
        Board::XkEvkXu316.product_name(""),
        Err(BoardError::UnrecognisedConfig { .. })
    ));

    let err = "xk_316_mc".parse::<Board>().unwrap_err();
    assert_eq!(err, BoardError::UnrecognisedBoard("xk_316_mc".into()));
    assert_eq!(err.to_string(), "Unrecognised board xk_316_mc");
}

#[test]
fn test_filter_everything_by_default() {
    assert_eq!(ScenarioFilter::new().select().len(), table::all().len());
}

#[test]
fn test_filter_combines_criteria() {
    let selected = ScenarioFilter::new()
        .tiers(&[Tier::Nightly, Tier::Weekend])
        .direction(Some(Direction::Output))
        .pattern(Some("*-192000-*"))
        .unwrap()
        .select();

    assert!(!selected.is_empty());
    for scenario in &selected {
        assert_eq!(scenario.direction, Direction::Output);
        assert_ne!(scenario.tier, Tier::Smoke);
        assert_eq!(scenario.sample_rate, 192000);
    }
}

#[test]
fn test_filter_keeps_table_order() {
    let all = table::all();
    let selected = ScenarioFilter::new().tiers(&[Tier::Smoke]).select();
    let positions: Vec<usize> = selected
        .iter()
        .map(|s| all.iter().position(|a| a == s).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_scenario_serializes_for_listing() {
    let scenario = table::all()[0];
    let json = serde_json::to_value(scenario).unwrap();
    assert_eq!(json["direction"], "in");
    assert_eq!(json["tier"], "smoke");
    assert_eq!(json["board"], "xk_216_mc");
    assert_eq!(json["config"], "1i2o2xxxxxx");
    assert_eq!(json["sample_rate"], 48000);
}
