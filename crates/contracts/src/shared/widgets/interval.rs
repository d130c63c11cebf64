use super::props::{Interval, PropsUpdate};

fn parse_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Appends `{start, end}` to `data` when both bounds parse as numbers.
///
/// Bounds are not checked against each other: `end < start` is kept as is.
pub fn add_interval(data: &[Interval], start: &str, end: &str) -> Option<Vec<Interval>> {
    let start = parse_bound(start)?;
    let end = parse_bound(end)?;
    let mut next = data.to_vec();
    next.push(Interval { start, end });
    Some(next)
}

/// Display line of one interval
pub fn describe(interval: &Interval) -> String {
    format!("Start: {}s, End: {}s", interval.start, interval.end)
}

/// Pending input of the interval entry form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalForm {
    start: String,
    end: String,
}

impl IntervalForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn set_start(&mut self, raw: impl Into<String>) {
        self.start = raw.into();
    }

    pub fn set_end(&mut self, raw: impl Into<String>) {
        self.end = raw.into();
    }

    /// Submits the pending bounds against the host's current `data`.
    /// Inputs are cleared only when the interval was accepted.
    pub fn submit(&mut self, data: &[Interval]) -> Option<PropsUpdate> {
        let next = add_interval(data, &self.start, &self.end)?;
        self.start.clear();
        self.end.clear();
        Some(PropsUpdate::Data { data: next })
    }
}
