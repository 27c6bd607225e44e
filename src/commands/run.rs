use crate::cli::RunArgs;
use crate::exit_codes;
use analogue_harness::device::ensure_host_audio;
use analogue_harness::harness::AdapterPool;
use analogue_harness::{Harness, HarnessConfig};
use anyhow::Result;

pub fn execute(args: RunArgs, config: HarnessConfig) -> Result<i32> {
    let config = args.apply(config);
    let scenarios = args.select.to_filter()?.select();
    if scenarios.is_empty() {
        println!("No scenarios selected.");
        return Ok(exit_codes::SUCCESS);
    }

    let mut pool = AdapterPool::from_config(&config)?;
    let mut harness = Harness::new(&config)?;
    ensure_host_audio()?;
    tracing::info!(
        scenarios = scenarios.len(),
        xmos_root = %harness.xmos_root().display(),
        "Starting run"
    );

    let report = harness.run_all(&scenarios, &mut pool);
    print!("{}", report.render());

    if let Some(path) = &args.report {
        report.save(path)?;
    }

    if report.all_passed() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::VERIFICATION_FAILED)
    }
}
