/// A text display update emitted by the simulation.
/// The host owns the actual display elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    /// Elapsed-time readout, e.g. "Time: 5 days, 0 months, 0 years".
    Time(String),
    /// Selected-body description. Empty after a reset.
    Description(String),
    /// Speed readout next to the slider, e.g. "1.0".
    Speed(String),
}

/// Receiver for display updates.
pub trait DisplaySink {
    fn show(&mut self, event: DisplayEvent);
}

/// Latest value of every display, for hosts that poll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub time: String,
    pub description: String,
    pub speed: String,
}

impl DisplaySink for DisplayState {
    fn show(&mut self, event: DisplayEvent) {
        match event {
            DisplayEvent::Time(text) => self.time = text,
            DisplayEvent::Description(text) => self.description = text,
            DisplayEvent::Speed(text) => self.speed = text,
        }
    }
}

impl DisplaySink for Vec<DisplayEvent> {
    fn show(&mut self, event: DisplayEvent) {
        self.push(event);
    }
}
