use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Core, ParseOptions};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::Upload;
use crate::ui::messages::{header, info};
use crate::ui::tables::render_events;
use crate::utils::formatting::describe_stats;
use crate::utils::path::expand_tilde;

/// Handle the `events` command: the diagnostic view of what survived parsing.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Events {
        input,
        out,
        format,
        day_first,
        force,
    } = cmd
    {
        let upload = Upload::from_path(&expand_tilde(input))?;
        let opts = ParseOptions {
            day_first: *day_first || cfg.day_first,
        };

        let Some(output) = Core::process(&upload, opts)? else {
            info("No data parsed.");
            return Ok(());
        };

        match out {
            Some(file) => {
                ExportLogic::export_events(&output.events, *format, file, *force)?;
            }
            None => {
                header(format!("Events: {}", upload.filename));
                print!("{}", render_events(&output.events));
                println!();
                info(describe_stats(&output.stats, output.events.len()));
            }
        }
    }
    Ok(())
}
