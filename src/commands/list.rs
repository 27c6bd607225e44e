use crate::cli::ListArgs;
use crate::exit_codes;
use anyhow::Result;

pub fn execute(args: ListArgs) -> Result<i32> {
    let scenarios = args.select.to_filter()?.select();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scenarios)?);
        return Ok(exit_codes::SUCCESS);
    }

    for scenario in &scenarios {
        println!(
            "{:<8} {:<52} {}",
            scenario.tier.name(),
            scenario.id(),
            scenario.expectation_file
        );
    }
    println!();
    println!("{} scenario(s)", scenarios.len());
    Ok(exit_codes::SUCCESS)
}
