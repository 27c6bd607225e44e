use crate::cli::VerifyArgs;
use crate::exit_codes;
use analogue_harness::{verify, ExpectationSet};
use anyhow::{Context, Result};
use std::io::Read;

pub fn execute(args: VerifyArgs) -> Result<i32> {
    let expected = ExpectationSet::load(&args.expectations)?
        .frequencies(args.direction)?
        .to_vec();

    let report = match &args.report {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Reading report {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Reading report from stdin")?;
            buf
        }
    };

    let lines: Vec<&str> = report.lines().collect();
    let verdict = verify(&lines, &expected);
    println!("{}", verdict);

    if verdict.is_pass() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::VERIFICATION_FAILED)
    }
}
