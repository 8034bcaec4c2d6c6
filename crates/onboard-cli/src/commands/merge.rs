//! Merge command implementation.

use crate::cli::MergeArgs;
use crate::error::Result;
use crate::output::Formatter;
use onboard_domain::{ClientProfile, ExtractedIdentityRecord};
use std::fs;
use std::path::Path;

/// Execute the merge command.
pub async fn execute_merge(args: MergeArgs, formatter: &Formatter) -> Result<()> {
    let record: ExtractedIdentityRecord = serde_json::from_str(&fs::read_to_string(&args.record)?)?;
    let mut profile = read_profile(&args.profile)?;

    let changed = profile.merge_extracted(&record);

    if args.write && !changed.is_empty() {
        write_profile(&args.profile, &profile)?;
    }

    println!("{}", formatter.format_merge(&changed, &profile)?);
    if args.write && !changed.is_empty() && !formatter.is_json() {
        println!("{}", formatter.success(&format!("Wrote {}", args.profile.display())));
    }

    Ok(())
}

/// Read a profile file, starting blank if it does not exist.
pub fn read_profile(path: &Path) -> Result<ClientProfile> {
    if !path.exists() {
        return Ok(ClientProfile::default());
    }
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

/// Write a profile file as pretty JSON.
pub fn write_profile(path: &Path, profile: &ClientProfile) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(profile)?)?;
    Ok(())
}
