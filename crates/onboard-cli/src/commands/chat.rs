//! Chat command implementation.

use crate::cli::ChatArgs;
use crate::commands::merge::{read_profile, write_profile};
use crate::error::Result;
use crate::output::Formatter;
use onboard_extractor::extract_client_details;

/// Execute the chat command.
pub async fn execute_chat(args: ChatArgs, formatter: &Formatter) -> Result<()> {
    let details = extract_client_details(&args.message);
    println!("{}", formatter.format_details(&details)?);

    if let Some(path) = &args.merge_into {
        let mut profile = read_profile(path)?;
        let changed = profile.merge_details(&details);
        if !changed.is_empty() {
            write_profile(path, &profile)?;
        }
        if !formatter.is_json() {
            println!("{}", formatter.format_merge(&changed, &profile)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;

    #[tokio::test]
    async fn test_chat_merges_contact_details() {
        let dir = tempfile::tempdir().unwrap();
        let profile_path = dir.path().join("profile.json");
        fs::write(
            &profile_path,
            r#"{"firstName":"Maria","idNumber":"4455667788","city":"Boston"}"#,
        )
        .unwrap();

        let args = ChatArgs {
            message: "my email is maria@example.com and my phone is 555-987-6543".to_string(),
            merge_into: Some(profile_path.clone()),
        };
        execute_chat(args, &Formatter::new(OutputFormat::Json, false))
            .await
            .unwrap();

        let profile = read_profile(&profile_path).unwrap();
        assert_eq!(profile.email, "maria@example.com");
        assert_eq!(profile.phone, "555-987-6543");
        assert_eq!(profile.first_name, "Maria");
        assert_eq!(profile.id_number, "4455667788");
        assert_eq!(profile.city, "Boston");
    }

    #[tokio::test]
    async fn test_chat_without_details_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let profile_path = dir.path().join("profile.json");

        let args = ChatArgs {
            message: "hello there".to_string(),
            merge_into: Some(profile_path.clone()),
        };
        execute_chat(args, &Formatter::new(OutputFormat::Table, false))
            .await
            .unwrap();

        assert!(!profile_path.exists());
    }
}
