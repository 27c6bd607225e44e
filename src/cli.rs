use analogue_harness::{Board, Direction, HarnessConfig, ScenarioFilter, Tier};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "analogue-harness",
    version,
    about = "Analogue regression tests for multichannel USB audio firmware",
    long_about = "Flashes the device under test and the audio analyzer harness with xrun,\n\
                  waits for the device to enumerate, plays or captures tones with xsig\n\
                  and checks the analyser report channel by channel."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (default: <data dir>/analogue-harness/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// List scenarios from the table
    List(ListArgs),
    /// Show the product name and firmware images for a board and config
    Resolve(ResolveArgs),
    /// List devices visible to the audio host
    Devices,
    /// Check a captured analyser report against an expectation file
    Verify(VerifyArgs),
    /// Run scenarios on hardware
    Run(RunArgs),
}

/// Scenario selection shared by `list` and `run`
#[derive(Args, Debug, Default)]
pub struct SelectArgs {
    /// Tiers to include (smoke, nightly, weekend); all tiers when omitted
    #[arg(long = "tier", num_args = 1..)]
    pub tiers: Vec<Tier>,

    /// Only run one direction (in, out)
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Glob over scenario ids, e.g. "in-xk_evk_xu316-*"
    #[arg(long)]
    pub filter: Option<String>,
}

impl SelectArgs {
    pub fn to_filter(&self) -> anyhow::Result<ScenarioFilter> {
        Ok(ScenarioFilter::new()
            .tiers(&self.tiers)
            .direction(self.direction)
            .pattern(self.filter.as_deref())?)
    }
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Board name (xk_216_mc, xk_evk_xu316)
    pub board: Board,

    /// Firmware build config, e.g. 2i10o10xxxxxx
    #[arg(value_name = "CONFIG")]
    pub build_config: String,

    /// Sandbox root (overrides config and XMOS_ROOT)
    #[arg(long)]
    pub xmos_root: Option<PathBuf>,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// xsig JSON config listing the expected tones
    #[arg(long)]
    pub expectations: PathBuf,

    /// Which section of the expectation file to check against (in, out)
    #[arg(long)]
    pub direction: Direction,

    /// Captured analyser report; read from stdin when omitted
    pub report: Option<PathBuf>,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Sandbox root holding sw_usb_audio and sw_audio_analyzer
    #[arg(long)]
    pub xmos_root: Option<PathBuf>,

    /// Directory of xsig JSON configs
    #[arg(long)]
    pub xsig_config_root: Option<PathBuf>,

    /// Path to xsig
    #[arg(long)]
    pub xsig: Option<PathBuf>,

    /// Path to xrun
    #[arg(long)]
    pub xrun: Option<PathBuf>,

    /// xTAG adapter id of the device under test
    #[arg(long)]
    pub dut_adapter: Option<String>,

    /// xTAG adapter id of the measurement harness
    #[arg(long)]
    pub harness_adapter: Option<String>,

    /// Seconds to wait for the device to enumerate
    #[arg(long)]
    pub device_timeout: Option<u64>,

    /// Write a JSON run report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl RunArgs {
    /// Apply command line overrides on top of the loaded config
    pub fn apply(&self, mut config: HarnessConfig) -> HarnessConfig {
        if let Some(root) = &self.xmos_root {
            config.xmos_root = Some(root.clone());
        }
        if let Some(root) = &self.xsig_config_root {
            config.xsig_config_root = Some(root.clone());
        }
        if let Some(xsig) = &self.xsig {
            config.xsig_path = xsig.clone();
        }
        if let Some(xrun) = &self.xrun {
            config.xrun_path = xrun.clone();
        }
        if let Some(id) = &self.dut_adapter {
            config.dut_adapter = Some(id.clone());
        }
        if let Some(id) = &self.harness_adapter {
            config.harness_adapter = Some(id.clone());
        }
        if let Some(secs) = self.device_timeout {
            config.device_timeout_secs = secs;
        }
        config
    }
}
