//! Command executor that records instead of drawing.

use std::sync::Arc;

use nebula_ui::command::{Command, CommandExecutor};
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct Recording {
    /// Commands of the current (or last finished) frame.
    commands: Vec<Command>,
    frames: usize,
    in_frame: bool,
}

/// A [`CommandExecutor`] that keeps the commands it receives.
///
/// Clones share one log, so a test can hand a clone to code that takes the
/// executor by value and still inspect what was drawn.
///
/// # Example
///
/// ```rust
/// use nebula_test_utils::RecordingExecutor;
/// use nebula_ui::{Color, Command, CommandList};
///
/// let mut list = CommandList::new();
/// list.push(Command::Clear { color: Color::BLACK });
///
/// let recorder = RecordingExecutor::new();
/// list.execute(&mut recorder.clone());
///
/// assert_eq!(recorder.frames(), 1);
/// assert_eq!(recorder.commands().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    recording: Arc<Mutex<Recording>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the current or last finished frame.
    pub fn commands(&self) -> Vec<Command> {
        self.recording.lock().commands.clone()
    }

    /// Number of finished frames.
    pub fn frames(&self) -> usize {
        self.recording.lock().frames
    }

    pub fn count(&self, predicate: impl Fn(&Command) -> bool) -> usize {
        self.recording.lock().commands.iter().filter(|c| predicate(c)).count()
    }

    /// Text of every `Text` command, in paint order.
    pub fn texts(&self) -> Vec<String> {
        self.recording
            .lock()
            .commands
            .iter()
            .filter_map(|command| match command {
                Command::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        let mut recording = self.recording.lock();
        recording.commands.clear();
        recording.frames = 0;
    }
}

impl CommandExecutor for RecordingExecutor {
    fn begin_frame(&mut self) {
        let mut recording = self.recording.lock();
        recording.commands.clear();
        recording.in_frame = true;
    }

    fn execute(&mut self, command: &Command) {
        self.recording.lock().commands.push(command.clone());
    }

    fn end_frame(&mut self) {
        let mut recording = self.recording.lock();
        if recording.in_frame {
            recording.frames += 1;
            recording.in_frame = false;
        }
    }
}

/// True when every `Save` has a matching `Restore` and no `Restore` comes first.
pub fn save_restore_balanced(commands: &[Command]) -> bool {
    let mut depth = 0usize;
    for command in commands {
        match command {
            Command::Save => depth += 1,
            Command::Restore => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_ui::{Color, CommandList};

    #[test]
    fn test_each_frame_replaces_the_log() {
        let recorder = RecordingExecutor::new();
        let mut list = CommandList::new();
        list.push(Command::Clear { color: Color::BLACK });
        list.push(Command::Save);
        list.push(Command::Restore);

        list.execute(&mut recorder.clone());
        list.execute(&mut recorder.clone());

        assert_eq!(recorder.frames(), 2);
        assert_eq!(recorder.commands().len(), 3);
        assert_eq!(recorder.count(|c| matches!(c, Command::Save)), 1);
    }

    #[test]
    fn test_balance_check() {
        assert!(save_restore_balanced(&[Command::Save, Command::Restore]));
        assert!(!save_restore_balanced(&[Command::Restore, Command::Save]));
        assert!(!save_restore_balanced(&[Command::Save]));
    }
}
