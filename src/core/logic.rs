use crate::core::calculator::{aggregate_days, build_table};
use crate::core::decoder::{self, DecodeCache};
use crate::core::parser::{self, ParseOptions, PipelineStats};
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceTable, DayAggregate, EventRecord, Upload};

/// Everything one run of the pipeline produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub events: Vec<EventRecord>,
    pub days: Vec<DayAggregate>,
    pub table: AttendanceTable,
    pub stats: PipelineStats,
}

pub struct Core;

impl Core {
    /// Decoded text → output. `Ok(None)` is the "no data parsed" path: an
    /// empty file, a blank header or no row surviving the filters.
    pub fn process_text(text: &str, opts: ParseOptions) -> AppResult<Option<PipelineOutput>> {
        let parsed = match parser::parse(text, opts) {
            Ok(p) => p,
            Err(AppError::MalformedHeader) => {
                tracing::debug!("no header line, nothing to aggregate");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if parsed.events.is_empty() {
            tracing::debug!("no events survived filtering");
            return Ok(None);
        }

        let days = aggregate_days(&parsed.events);
        let table = build_table(&days);

        tracing::debug!(
            events = parsed.events.len(),
            days = days.len(),
            people = table.rows.len(),
            dates = table.dates.len(),
            "attendance table built"
        );

        Ok(Some(PipelineOutput {
            events: parsed.events,
            days,
            table,
            stats: parsed.stats,
        }))
    }

    /// One-shot run without memoization.
    pub fn process(upload: &Upload, opts: ParseOptions) -> AppResult<Option<PipelineOutput>> {
        tracing::debug!(file = %upload.filename, bytes = upload.bytes.len(), "processing upload");
        let text = decoder::decode(&upload.bytes)?;
        Self::process_text(&text, opts)
    }
}

/// Pipeline that keeps decoded text around between runs on identical content.
#[derive(Debug, Default)]
pub struct Pipeline {
    cache: DecodeCache,
    opts: ParseOptions,
}

impl Pipeline {
    pub fn new(opts: ParseOptions) -> Self {
        Self {
            cache: DecodeCache::new(),
            opts,
        }
    }

    pub fn run(&mut self, upload: &Upload) -> AppResult<Option<PipelineOutput>> {
        tracing::debug!(file = %upload.filename, bytes = upload.bytes.len(), "processing upload");
        let text = self.cache.decode(&upload.bytes)?;
        Core::process_text(&text, self.opts)
    }

    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }
}
