//! Completion percentage of a project.

use crate::types::Project;

/// Resolve the 0-100 completion value shown on a card.
///
/// An explicit `progress` wins and is clamped into range; otherwise a
/// completed project is at 100 and anything else at 0.
pub fn resolve_progress(project: &Project) -> u8 {
    match project.progress {
        Some(value) => value.clamp(0, 100) as u8,
        None if project.status.is_completed() => 100,
        None => 0,
    }
}
