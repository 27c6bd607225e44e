//! Scenario table
//!
//! Each row is (board, firmware config, sample rate, duration in seconds,
//! expectation file). Smoke rows run for 10 seconds, nightly rows for ten
//! minutes and weekend rows for half an hour.

use super::board::Board::{self, XkEvkXu316, Xk216Mc};
use super::{Scenario, Tier};
use crate::analysis::Direction;

type Row = (Board, &'static str, u32, u32, &'static str);

const IN_2CH: &str = "mc_analogue_input_2ch.json";
const IN_8CH: &str = "mc_analogue_input_8ch.json";
const OUT_2CH: &str = "mc_analogue_output_2ch.json";
const OUT_8CH: &str = "mc_analogue_output_8ch.json";
const OUT_8CH_PAIRED: &str = "mc_analogue_output_8ch_paired.json";

const INPUT_SMOKE: &[Row] = &[
    (Xk216Mc, "1i2o2xxxxxx", 48000, 10, IN_2CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8", 96000, 10, IN_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8_slave", 48000, 10, IN_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8_slave", 96000, 10, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx", 192000, 10, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 192000, 10, IN_8CH),
    (Xk216Mc, "2i10o10msxxxx", 192000, 10, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 192000, 10, IN_8CH),
    (Xk216Mc, "2i10o10xssxxx", 192000, 10, IN_8CH),
    (XkEvkXu316, "1i2o2", 48000, 10, IN_2CH),
    (XkEvkXu316, "2i2o2", 48000, 10, IN_2CH),
];

const INPUT_NIGHTLY: &[Row] = &[
    (Xk216Mc, "1i2o2xxxxxx", 44100, 600, IN_2CH),
    (Xk216Mc, "1i2o2xxxxxx", 48000, 600, IN_2CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8", 44100, 600, IN_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8_slave", 44100, 600, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx", 48000, 600, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 192000, 600, IN_8CH),
    (Xk216Mc, "2i10o10msxxxx", 48000, 600, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 48000, 600, IN_8CH),
    (Xk216Mc, "2i10o10xssxxx", 48000, 600, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxd", 48000, 600, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxd", 192000, 600, IN_8CH),
    (XkEvkXu316, "1i2o2", 44100, 600, IN_2CH),
    (XkEvkXu316, "2i2o2", 44100, 600, IN_2CH),
    (XkEvkXu316, "2i2o2", 192000, 600, IN_2CH),
];

const INPUT_WEEKEND: &[Row] = &[
    (Xk216Mc, "1i2o2xxxxxx", 44100, 1800, IN_2CH),
    (Xk216Mc, "1i2o2xxxxxx", 48000, 1800, IN_2CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8", 48000, 1800, IN_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8", 88200, 1800, IN_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8", 96000, 1800, IN_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8_slave", 48000, 1800, IN_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8_slave", 88200, 1800, IN_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8_slave", 96000, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx", 44100, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx", 88200, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx", 96000, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx", 176400, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 44100, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 48000, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 88200, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 96000, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 176400, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 192000, 1800, IN_8CH),
    (Xk216Mc, "2i10o10msxxxx", 44100, 1800, IN_8CH),
    (Xk216Mc, "2i10o10msxxxx", 88200, 1800, IN_8CH),
    (Xk216Mc, "2i10o10msxxxx", 96000, 1800, IN_8CH),
    (Xk216Mc, "2i10o10msxxxx", 176400, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 44100, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 48000, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 96000, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 176400, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 48000, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xssxxx", 44100, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xssxxx", 88200, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xssxxx", 96000, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xssxxx", 176400, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxd", 44100, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxd", 88200, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxd", 96000, 1800, IN_8CH),
    (Xk216Mc, "2i10o10xsxxxd", 176400, 1800, IN_8CH),
    (XkEvkXu316, "1i2o2", 44100, 1800, IN_2CH),
    (XkEvkXu316, "1i2o2", 48000, 1800, IN_2CH),
    (XkEvkXu316, "2i2o2", 44100, 1800, IN_2CH),
    (XkEvkXu316, "2i2o2", 88200, 1800, IN_2CH),
    (XkEvkXu316, "2i2o2", 96000, 1800, IN_2CH),
    (XkEvkXu316, "2i2o2", 176400, 1800, IN_2CH),
];

const OUTPUT_SMOKE: &[Row] = &[
    (Xk216Mc, "1i2o2xxxxxx", 48000, 10, OUT_2CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8", 96000, 10, OUT_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8_slave", 48000, 10, OUT_8CH_PAIRED),
    (Xk216Mc, "2i8o8xxxxx_tdm8_slave", 96000, 10, OUT_8CH_PAIRED),
    (Xk216Mc, "2i10o10xxxxxx", 192000, 10, OUT_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 192000, 10, OUT_8CH),
    (Xk216Mc, "2i10o10msxxxx", 192000, 10, OUT_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 192000, 10, OUT_8CH),
    (Xk216Mc, "2i10o10xssxxx", 192000, 10, OUT_8CH),
    (XkEvkXu316, "1i2o2", 48000, 10, OUT_2CH),
    (XkEvkXu316, "2i2o2", 48000, 10, OUT_2CH),
];

const OUTPUT_NIGHTLY: &[Row] = &[
    (Xk216Mc, "1i2o2xxxxxx", 44100, 600, OUT_2CH),
    (Xk216Mc, "1i2o2xxxxxx", 48000, 600, OUT_2CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8", 44100, 600, OUT_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8_slave", 44100, 600, OUT_8CH_PAIRED),
    (Xk216Mc, "2i10o10xxxxxx", 48000, 600, OUT_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 192000, 600, OUT_8CH),
    (Xk216Mc, "2i10o10msxxxx", 48000, 600, OUT_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 48000, 600, OUT_8CH),
    (Xk216Mc, "2i10o10xssxxx", 48000, 600, OUT_8CH),
    (XkEvkXu316, "1i2o2", 44100, 600, OUT_2CH),
    (XkEvkXu316, "2i2o2", 44100, 600, OUT_2CH),
    (XkEvkXu316, "2i2o2", 192000, 600, OUT_2CH),
];

const OUTPUT_WEEKEND: &[Row] = &[
    (Xk216Mc, "1i2o2xxxxxx", 44100, 1800, OUT_2CH),
    (Xk216Mc, "1i2o2xxxxxx", 48000, 1800, OUT_2CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8", 48000, 1800, OUT_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8", 88200, 1800, OUT_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8", 96000, 1800, OUT_8CH),
    (Xk216Mc, "2i8o8xxxxx_tdm8_slave", 48000, 1800, OUT_8CH_PAIRED),
    (Xk216Mc, "2i8o8xxxxx_tdm8_slave", 88200, 1800, OUT_8CH_PAIRED),
    (Xk216Mc, "2i8o8xxxxx_tdm8_slave", 96000, 1800, OUT_8CH_PAIRED),
    (Xk216Mc, "2i10o10xxxxxx", 44100, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xxxxxx", 88200, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xxxxxx", 96000, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xxxxxx", 176400, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 44100, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 48000, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 88200, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 96000, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 176400, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xxxxxx_slave", 192000, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10msxxxx", 44100, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10msxxxx", 88200, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10msxxxx", 96000, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10msxxxx", 176400, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 44100, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 88200, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 96000, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xsxxxx_mix8", 176400, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xssxxx", 44100, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xssxxx", 88200, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xssxxx", 96000, 1800, OUT_8CH),
    (Xk216Mc, "2i10o10xssxxx", 176400, 1800, OUT_8CH),
    (XkEvkXu316, "1i2o2", 44100, 1800, OUT_2CH),
    (XkEvkXu316, "1i2o2", 48000, 1800, OUT_2CH),
    (XkEvkXu316, "2i2o2", 44100, 1800, OUT_2CH),
    (XkEvkXu316, "2i2o2", 88200, 1800, OUT_2CH),
    (XkEvkXu316, "2i2o2", 96000, 1800, OUT_2CH),
    (XkEvkXu316, "2i2o2", 176400, 1800, OUT_2CH),
];
fn rows(direction: Direction, tier: Tier) -> &'static [Row] {
    match (direction, tier) {
        (Direction::Input, Tier::Smoke) => INPUT_SMOKE,
        (Direction::Input, Tier::Nightly) => INPUT_NIGHTLY,
        (Direction::Input, Tier::Weekend) => INPUT_WEEKEND,
        (Direction::Output, Tier::Smoke) => OUTPUT_SMOKE,
        (Direction::Output, Tier::Nightly) => OUTPUT_NIGHTLY,
        (Direction::Output, Tier::Weekend) => OUTPUT_WEEKEND,
    }
}

/// Every scenario in the table, inputs first, then by tier and row order
pub fn all() -> Vec<Scenario> {
    [Direction::Input, Direction::Output]
        .into_iter()
        .flat_map(|direction| Tier::ALL.into_iter().map(move |tier| (direction, tier)))
        .flat_map(|(direction, tier)| {
            rows(direction, tier).iter().map(
                move |&(board, config, sample_rate, duration_secs, expectation_file)| Scenario {
                    direction,
                    tier,
                    board,
                    config,
                    sample_rate,
                    duration_secs,
                    expectation_file,
                },
            )
        })
        .collect()
}
