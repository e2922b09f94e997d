use crate::results::{Finding, Status};

/// Points a single check contributes for each status
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusPoints {
    pub good: f64,
    pub warning: f64,
    pub bad: f64,
}

impl StatusPoints {
    pub fn points(&self, status: Status) -> f64 {
        match status {
            Status::Good => self.good,
            Status::Warning => self.warning,
            Status::Bad => self.bad,
        }
    }
}

/// Every check is worth the same share of 100
pub const STATUS_POINTS: StatusPoints = StatusPoints {
    good: 25.0,
    warning: 12.5,
    bad: 0.0,
};

/// Sums the per-check points and rounds half up, so 37.5 becomes 38
pub fn aggregate<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> u8 {
    let total: f64 = findings
        .into_iter()
        .map(|finding| STATUS_POINTS.points(finding.status))
        .sum();

    // Totals are non-negative, so floor(x + 0.5) is round-half-up
    (total + 0.5).floor().clamp(0.0, 100.0) as u8
}
