//! Pointer tracking: turns per-frame host samples into pointer commands.

use particle_field_core::commands::PointerCommand;

/// Pointer state as observed by the host this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Hover position relative to the field's top-left corner, if over the field.
    pub position: Option<(f64, f64)>,
    pub primary_down: bool,
}

/// Emits commands only on changes between consecutive samples.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last: PointerSample,
}

impl PointerTracker {
    pub fn update(&mut self, sample: PointerSample) -> Vec<PointerCommand> {
        let mut commands = Vec::new();

        match sample.position {
            Some((x, y)) if self.last.position != sample.position => {
                commands.push(PointerCommand::Moved { x, y });
            }
            None if self.last.position.is_some() => commands.push(PointerCommand::Left),
            _ => {}
        }

        if sample.primary_down != self.last.primary_down {
            commands.push(if sample.primary_down {
                PointerCommand::PrimaryPressed
            } else {
                PointerCommand::PrimaryReleased
            });
        }

        self.last = sample;
        commands
    }
}
