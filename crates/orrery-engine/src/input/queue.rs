use glam::DVec2;

use crate::input::command::{Command, PanCommand};

/// Raw pointer input from the host, in surface-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button was pressed at (x, y).
    PointerDown { x: f64, y: f64 },
    /// The pointer moved to (x, y).
    PointerMove { x: f64, y: f64 },
    /// A button was released at (x, y).
    PointerUp { x: f64, y: f64 },
    /// The pointer left the surface.
    PointerLeave,
    /// Wheel scrolled by `delta_y` with the pointer at (x, y).
    Wheel { x: f64, y: f64, delta_y: f64 },
}

impl InputEvent {
    /// The command this input stands for.
    pub fn to_command(self) -> Command {
        match self {
            InputEvent::PointerDown { x, y } => Command::Pan(PanCommand::Begin(DVec2::new(x, y))),
            InputEvent::PointerMove { x, y } => Command::Pan(PanCommand::Move(DVec2::new(x, y))),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => Command::Pan(PanCommand::End),
            InputEvent::Wheel { x, y, delta_y } => Command::Zoom {
                pointer: DVec2::new(x, y),
                delta_y,
            },
        }
    }
}

impl From<InputEvent> for Command {
    fn from(event: InputEvent) -> Self {
        event.to_command()
    }
}

/// Commands waiting for the next frame.
///
/// Host handlers may fire several times between frames (a burst of pointer
/// moves, an edit followed by a reset). Everything queued is applied in
/// arrival order before the frame is drawn.
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(32),
        }
    }

    /// Queue a command, translating raw input on the way in.
    pub fn push(&mut self, command: impl Into<Command>) {
        self.commands.push(command.into());
    }

    /// Hand over everything queued so far, leaving the queue empty for
    /// commands that arrive while the batch is applied.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Pending commands, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = CommandQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(Command::Reset);
        assert_eq!(q.len(), 2);
        assert_eq!(q.iter().last(), Some(&Command::Reset));
        let commands = q.drain();
        assert_eq!(commands.len(), 2);
        assert!(q.is_empty());
        assert_eq!(commands[0], Command::Pan(PanCommand::Begin(DVec2::new(10.0, 20.0))));
        assert_eq!(commands[1], Command::Reset);
    }

    #[test]
    fn pointer_up_and_leave_both_end_drag() {
        assert_eq!(
            InputEvent::PointerUp { x: 1.0, y: 2.0 }.to_command(),
            Command::Pan(PanCommand::End)
        );
        assert_eq!(InputEvent::PointerLeave.to_command(), Command::Pan(PanCommand::End));
    }

    #[test]
    fn wheel_becomes_zoom() {
        let command: Command = InputEvent::Wheel { x: 3.0, y: 4.0, delta_y: -120.0 }.into();
        match command {
            Command::Zoom { pointer, delta_y } => {
                assert_eq!(pointer, DVec2::new(3.0, 4.0));
                assert_eq!(delta_y, -120.0);
            }
            _ => panic!("Expected Zoom command"),
        }
    }
}
