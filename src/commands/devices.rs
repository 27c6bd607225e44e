use crate::exit_codes;
use analogue_harness::device::default_enumerator;
use anyhow::Result;

pub fn execute() -> Result<i32> {
    let mut enumerator = default_enumerator();
    enumerator.refresh()?;
    let devices = enumerator.list_devices()?;

    if devices.is_empty() {
        println!("No audio devices found.");
    } else {
        println!("Found {} device(s):", devices.len());
        for (i, name) in devices.iter().enumerate() {
            println!("  {}. {}", i + 1, name);
        }
    }
    Ok(exit_codes::SUCCESS)
}
