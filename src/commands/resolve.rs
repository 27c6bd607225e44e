use crate::cli::ResolveArgs;
use crate::exit_codes;
use analogue_harness::scenario::{firmware_path, harness_firmware_path};
use analogue_harness::{HarnessConfig, HARNESS_BOARD};
use anyhow::Result;

pub fn execute(args: ResolveArgs, mut config: HarnessConfig) -> Result<i32> {
    if let Some(root) = args.xmos_root {
        config.xmos_root = Some(root);
    }
    let root = config.xmos_root()?;

    let product = args.board.product_name(&args.build_config)?;
    println!("Product name:     {}", product);
    println!(
        "Device firmware:  {}",
        firmware_path(root, args.board, &args.build_config).display()
    );
    println!(
        "Harness firmware: {}",
        harness_firmware_path(root, HARNESS_BOARD, None).display()
    );
    Ok(exit_codes::SUCCESS)
}
