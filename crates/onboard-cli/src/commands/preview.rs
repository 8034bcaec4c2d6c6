//! Preview command implementation.

use crate::cli::PreviewArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use onboard_sdk::{build_preview, load_document, Preview};

/// Execute the preview command.
pub async fn execute_preview(args: PreviewArgs, formatter: &Formatter) -> Result<()> {
    let document = load_document(&args.file).await?;
    let preview = build_preview(&document).await?;

    if args.data_url {
        return match preview {
            Preview::Image { data_url } => {
                println!("{}", data_url);
                Ok(())
            }
            Preview::Placeholder { .. } => Err(CliError::InvalidInput(format!(
                "'{}' ({}) has no image preview",
                document.name, document.media_type
            ))),
        };
    }

    println!("{}", formatter.format_document(&document, &preview)?);
    Ok(())
}
