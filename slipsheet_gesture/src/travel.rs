// Copyright 2025 the Slipsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live drag-to-offset tracking: map a cumulative translation onto the sheet's
//! travel range.

use crate::types::{SheetMetrics, SheetState};

/// Result of tracking one drag sample against the sheet's travel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Travel {
    /// The sheet moved; apply this live offset unanimated.
    Moved(f64),
    /// The drag points in the direction the sheet cannot travel from its
    /// current state; the offset is unchanged.
    Unmoved,
    /// An upward drag from [`SheetState::Collapsed`] covered the full travel
    /// distance. The caller must commit to [`SheetState::Expanded`]
    /// immediately instead of continuing to track the drag.
    FullTravel,
}

/// Maps a cumulative vertical translation onto a live offset.
///
/// Drags are one-directional per state: from `Expanded` only downward
/// (`translation_y > 0`) motion moves the sheet, from `Collapsed` only upward
/// (`translation_y < 0`) motion does. Anything else is [`Travel::Unmoved`],
/// never an error.
///
/// The returned offset magnitude never exceeds `metrics.height()`, so the
/// live offset stays within the sheet's travel range for any input. Pure and
/// side-effect free; call it on every `Changed` sample.
#[must_use]
pub fn track(metrics: &SheetMetrics, state: SheetState, translation_y: f64) -> Travel {
    if !translation_y.is_finite() {
        return Travel::Unmoved;
    }
    match state {
        SheetState::Expanded => {
            if translation_y <= 0.0 {
                return Travel::Unmoved;
            }
            // Dragging down reveals less of the sheet; clamp at zero so a drag
            // past the travel range cannot push the top edge below the
            // container's bottom edge.
            Travel::Moved(-(metrics.height() - translation_y).max(0.0))
        }
        SheetState::Collapsed => {
            if translation_y >= 0.0 {
                return Travel::Unmoved;
            }
            let proposed = -(metrics.collapsed_offset() + translation_y.abs());
            if proposed.abs() >= metrics.height() {
                return Travel::FullTravel;
            }
            Travel::Moved(proposed)
        }
    }
}
