/// Days in one displayed month.
pub const DAYS_PER_MONTH: i64 = 30;
/// Days in one displayed year.
pub const DAYS_PER_YEAR: i64 = 365;

/// Simulation clock.
/// Elapsed time is counted in simulated days and advances by `speed` once per frame,
/// so the apparent rate depends on the host's refresh rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimClock {
    elapsed: f64,
    speed: f64,
}

impl SimClock {
    pub fn new(speed: f64) -> Self {
        Self {
            elapsed: 0.0,
            speed,
        }
    }

    /// Advance by one frame.
    pub fn tick(&mut self) {
        self.elapsed += self.speed;
    }

    /// Set the per-frame speed. Zero pauses, negative runs time backward.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn set_elapsed(&mut self, elapsed: f64) {
        self.elapsed = elapsed;
    }

    /// Elapsed time as "D days, M months, Y years".
    pub fn format(&self) -> String {
        format_time(self.elapsed)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Format elapsed days on a flat 30-day month / 365-day year calendar.
///
/// Remainders truncate toward zero and divisions floor, so negative times
/// produce negative fields (e.g. -1 day is "-1 days, -1 months, -1 years").
/// A non-finite time is not a date: NaN fields print as `NaN` and an infinite
/// year count as `Infinity`.
pub fn format_time(elapsed: f64) -> String {
    let total_days = elapsed.floor();
    let years = (total_days / DAYS_PER_YEAR as f64).floor();
    let months = ((total_days % DAYS_PER_YEAR as f64) / DAYS_PER_MONTH as f64).floor();
    let days = total_days % DAYS_PER_MONTH as f64;
    format!(
        "{} days, {} months, {} years",
        count_text(days),
        count_text(months),
        count_text(years)
    )
}

fn count_text(count: f64) -> String {
    if count.is_nan() {
        "NaN".to_string()
    } else if count.is_infinite() {
        if count > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        // Adding zero folds -0 into 0
        format!("{:.0}", count + 0.0)
    }
}

/// Speed as shown next to the slider: one decimal place.
pub fn format_speed(speed: f64) -> String {
    format!("{speed:.1}")
}
