// src/rollout/sinks.rs
#![forbid(unsafe_code)]

/// One periodic row emitted by the runner.
///
/// Transport struct: runner/stats compute fields, sinks only format/emit.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub episode: u64,
    pub episodes_total: u64,

    /// Episodes per second.
    pub eps: f64,
    /// Live moves per second.
    pub mps: f64,

    pub avg_score: f64,
    pub max_score: u64,
    pub min_score: u64,

    /// Average fraction of the board's initial value collected.
    pub avg_collect_ratio: f64,
    pub avg_ticks: f64,
    pub stalled: u64,
}

/// Sink interface for periodic reporting.
pub trait RolloutSink {
    fn on_report_row(&mut self, row: &ReportRow, pb: Option<&indicatif::ProgressBar>);
}

/// Default sink: does nothing.
#[derive(Default)]
pub struct NoopSink;

impl RolloutSink for NoopSink {
    fn on_report_row(&mut self, _row: &ReportRow, _pb: Option<&indicatif::ProgressBar>) {}
}

/// Human-readable periodic table sink.
///
/// Cadence (every N episodes) is handled by Runner. This sink prints whenever called.
pub struct TableSink {
    header_every: u64,
    rows_printed: u64,
}

impl TableSink {
    const DEFAULT_HEADER_EVERY: u64 = 20;

    /// If `header_every == 0`, a reasonable default is used.
    pub fn new(header_every: u64) -> Self {
        Self {
            header_every: if header_every == 0 {
                Self::DEFAULT_HEADER_EVERY
            } else {
                header_every
            },
            rows_printed: 0,
        }
    }

    fn header_line(&self) -> String {
        // Keep widths aligned with row_line() below.
        format!(
            "{:>17} {:>8} {:>9} {:>9} {:>6} {:>6} {:>8} {:>7} {:>7}",
            "episode/total", "eps", "moves/s", "avgScore", "max", "min", "collect", "ticks", "stall",
        )
    }

    fn sep_line(&self) -> String {
        "-".repeat(self.header_line().len())
    }

    fn row_line(&self, r: &ReportRow) -> String {
        format!(
            "{:>8}/{:<8} {:>8.2} {:>9.1} {:>9.2} {:>6} {:>6} {:>8.3} {:>7.2} {:>7}",
            r.episode,
            r.episodes_total,
            r.eps,
            r.mps,
            r.avg_score,
            r.max_score,
            r.min_score,
            r.avg_collect_ratio,
            r.avg_ticks,
            r.stalled,
        )
    }
}

impl RolloutSink for TableSink {
    fn on_report_row(&mut self, row: &ReportRow, pb: Option<&indicatif::ProgressBar>) {
        let mut lines: Vec<String> = Vec::new();

        if self.rows_printed == 0 || (self.rows_printed % self.header_every == 0) {
            lines.push(self.header_line());
            lines.push(self.sep_line());
        }

        lines.push(self.row_line(row));
        self.rows_printed += 1;

        if let Some(pb) = pb {
            for l in lines {
                pb.println(l);
            }
        } else {
            for l in lines {
                println!("{l}");
            }
        }
    }
}
