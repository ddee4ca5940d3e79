use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ParseOptions, Pipeline};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::Upload;
use crate::ui::messages::{header, info};
use crate::ui::tables::{render_attendance, render_events};
use crate::utils::formatting::describe_stats;
use crate::utils::path::expand_tilde;

/// Handle the `process` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        input,
        out,
        format,
        no_export,
        events,
        day_first,
        force,
    } = cmd
    {
        let upload = Upload::from_path(&expand_tilde(input))?;
        let opts = ParseOptions {
            day_first: *day_first || cfg.day_first,
        };

        let mut pipeline = Pipeline::new(opts);
        let Some(output) = pipeline.run(&upload)? else {
            info("No data parsed.");
            return Ok(());
        };

        header(format!("Attendance: {}", upload.filename));
        print!("{}", render_attendance(&output.table));
        println!();
        info(describe_stats(&output.stats, output.events.len()));

        if *events || cfg.show_events {
            println!();
            header("Parsed, filtered, de-bursted rows");
            print!("{}", render_events(&output.events));
        }

        if !*no_export {
            let file = out.as_deref().unwrap_or(cfg.output_file.as_str());
            let fmt = format.unwrap_or(cfg.export_format);
            ExportLogic::export_table(&output.table, fmt, file, *force)?;
        }
    }
    Ok(())
}
