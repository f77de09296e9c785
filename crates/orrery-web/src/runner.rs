use orrery_engine::{
    Command, CommandQueue, DisplayState, DrawContext, FrameScheduler, InputEvent, Orrery,
};

/// Drives an [`Orrery`] against a drawing surface.
///
/// The wasm exports keep one runner in a `thread_local!` and forward host
/// events to it, because wasm-bindgen cannot export generic structs directly.
/// Commands are queued as they arrive and applied at the start of the next
/// frame, so the simulation only changes between frames.
pub struct OrreryRunner<S: DrawContext> {
    orrery: Orrery,
    commands: CommandQueue,
    surface: S,
    display: DisplayState,
    frames: u64,
}

impl<S: DrawContext> OrreryRunner<S> {
    pub fn new(orrery: Orrery, surface: S) -> Self {
        let mut display = DisplayState::default();
        display.speed = orrery_engine::format_speed(orrery.clock().speed());
        Self {
            orrery,
            commands: CommandQueue::new(),
            surface,
            display,
            frames: 0,
        }
    }

    /// Queue a command for the next frame.
    pub fn push(&mut self, command: impl Into<Command>) {
        self.commands.push(command);
    }

    /// Queue a raw pointer event.
    pub fn push_input(&mut self, event: InputEvent) {
        self.commands.push(event);
    }

    /// Run one frame: apply queued commands, draw, advance time, publish the
    /// display texts, then ask the host for the next frame.
    pub fn frame(&mut self, scheduler: &mut impl FrameScheduler) {
        for command in self.commands.drain() {
            self.orrery.apply(command);
        }

        self.orrery.frame(&mut self.surface);
        self.orrery.flush_events(&mut self.display);
        self.frames += 1;

        scheduler.request_frame();
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    // ---- Display accessors (read by the page after each frame) ----

    pub fn time_text(&self) -> &str {
        &self.display.time
    }

    pub fn description_text(&self) -> &str {
        &self.display.description
    }

    pub fn speed_text(&self) -> &str {
        &self.display.speed
    }
}

/// One tick of the animation loop.
///
/// Runs a frame when a runner exists. Without one (the loop was started
/// before `orrery_init`, or init failed) the next frame is still requested,
/// so the loop picks the runner up once it appears. Returns whether a frame
/// was drawn.
pub fn drive_frame<S: DrawContext>(
    runner: Option<&mut OrreryRunner<S>>,
    scheduler: &mut impl FrameScheduler,
) -> bool {
    match runner {
        Some(runner) => {
            runner.frame(scheduler);
            true
        }
        None => {
            scheduler.request_frame();
            false
        }
    }
}
