//! Application-wide constants.
//!
//! Storage locations, upload timing, UI styling and the render prompt handed
//! to the image generation worker. Nothing in here has behavior beyond a few
//! lookup helpers.

pub use crate::config::WORKER_URL;

// ============================================================================
// Storage
// ============================================================================

/// Logical storage locations used by the hosted upload pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoragePaths {
    pub root: &'static str,
    pub sources: &'static str,
    pub renders: &'static str,
}

impl StoragePaths {
    /// Every path nested under `root`, excluding `root` itself.
    pub fn nested(&self) -> [&'static str; 2] {
        [self.sources, self.renders]
    }
}

pub const STORAGE_PATHS: StoragePaths = StoragePaths {
    root: "roomify",
    sources: "roomify/sources",
    renders: "roomify/renders",
};

// ============================================================================
// Timing
// ============================================================================

/// Delay before the share button label reverts after copying a link
pub const SHARE_STATUS_RESET_DELAY_MS: u64 = 1500;

/// Percentage added to the upload progress bar on every tick
pub const PROGRESS_INCREMENT: u8 = 15;

/// Delay between upload completion and the widget returning to idle
pub const REDIRECT_DELAY_MS: u64 = 600;

/// Interval between two progress ticks
pub const PROGRESS_INTERVAL_MS: u64 = 100;

/// Finer progress step used by the render status indicator
pub const PROGRESS_STEP: u8 = 5;

/// Number of ticks needed for `increment` to reach 100%.
pub const fn ticks_to_complete(increment: u8) -> u64 {
    if increment == 0 {
        return u64::MAX;
    }
    (100 + increment as u64 - 1) / increment as u64
}

// ============================================================================
// UI
// ============================================================================

/// CSS-style cell size of the blueprint grid overlay
pub const GRID_OVERLAY_SIZE: &str = "60px 60px";

/// Accent colour of the grid overlay and progress bar
pub const GRID_COLOR: &str = "#3B82F6";

/// Grid cell edge in points, parsed out of [`GRID_OVERLAY_SIZE`].
pub fn grid_cell_size() -> f32 {
    GRID_OVERLAY_SIZE
        .split_whitespace()
        .next()
        .and_then(|cell| cell.trim_end_matches("px").parse().ok())
        .unwrap_or(60.0)
}

// ============================================================================
// Worker
// ============================================================================

/// HTTP statuses the hosted worker answers with when the session is not valid
pub const UNAUTHORIZED_STATUSES: [u16; 2] = [401, 403];

pub fn is_unauthorized_status(status: u16) -> bool {
    UNAUTHORIZED_STATUSES.contains(&status)
}

/// Edge length in pixels of the square image requested from the renderer
pub const IMAGE_RENDER_DIMENSION: u32 = 1024;

/// Instructions sent alongside the uploaded floor plan when requesting a render.
pub const ROOMIFY_RENDER_PROMPT: &str = r#"TASK: Convert the input 2D floor plan into a **photorealistic, top-down 3D architectural render**.

STRICT REQUIREMENTS (do not violate):
1) **REMOVE ALL TEXT**: Do not render any letters, numbers, labels, dimensions, or annotations. Floors must be continuous where text used to be.
2) **GEOMETRY MUST MATCH**: Walls, rooms, doors, and windows must follow the exact lines and positions in the plan. Do not shift or resize.
3) **TOP-DOWN ONLY**: Orthographic top-down view. No perspective tilt.
4) **CLEAN, REALISTIC OUTPUT**: Crisp edges, balanced lighting, and realistic materials. No sketch or hand-drawn look.
5) **NO EXTRA CONTENT**: Do not add rooms, furniture, or objects that are not clearly indicated by the plan.

STRUCTURE & DETAILS:
- **Walls**: Extrude precisely from the plan lines. Consistent wall height and thickness.
- **Doors**: Convert door swing arcs into open doors, aligned to the plan.
- **Windows**: Convert thin perimeter lines into realistic glass windows.

FURNITURE & ROOM MAPPING (only where icons or fixtures are clearly shown):
- Bed icon -> realistic bed with duvet and pillows.
- Sofa icon -> modern sectional or sofa.
- Dining table icon -> table with chairs.
- Kitchen icon -> counters with sink and stove.
- Bathroom icons -> toilet, sink, and tub or shower.
- Office or study icons -> desk, chair, and minimal shelving.
- Porch, patio or balcony icons -> outdoor seating, kept minimal.
- Utility or laundry icons -> washer, dryer and minimal cabinetry.

STYLE & LIGHTING:
- Lighting: bright, neutral daylight. High clarity and balanced contrast.
- Materials: realistic wood or tile floors, clean walls, subtle ambient occlusion.
- Finish: professional architectural visualization; no text, no watermarks, no logos.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_storage_paths_live_under_root() {
        for path in STORAGE_PATHS.nested() {
            assert!(path.starts_with(STORAGE_PATHS.root), "{path}");
            assert_ne!(path, STORAGE_PATHS.root);
        }
    }

    #[test]
    fn unauthorized_statuses_are_401_and_403() {
        let mut statuses = UNAUTHORIZED_STATUSES.to_vec();
        statuses.sort_unstable();
        assert_eq!(statuses, vec![401, 403]);
        assert!(is_unauthorized_status(403));
        assert!(!is_unauthorized_status(404));
        assert!(!is_unauthorized_status(500));
    }

    #[test]
    fn progress_completes_in_under_five_seconds() {
        let ticks = ticks_to_complete(PROGRESS_INCREMENT);
        assert_eq!(ticks, 7);
        assert!(ticks * u64::from(PROGRESS_INCREMENT) >= 100);
        assert!(ticks * PROGRESS_INTERVAL_MS < 5_000);
        assert_eq!(ticks_to_complete(PROGRESS_STEP), 20);
    }

    #[test]
    fn render_dimension_is_a_power_of_two() {
        assert!(IMAGE_RENDER_DIMENSION.is_power_of_two());
    }

    #[test]
    fn render_prompt_carries_every_section() {
        for section in [
            "TASK:",
            "STRICT REQUIREMENTS",
            "REMOVE ALL TEXT",
            "GEOMETRY MUST MATCH",
            "FURNITURE & ROOM MAPPING",
            "STYLE & LIGHTING",
        ] {
            assert!(ROOMIFY_RENDER_PROMPT.contains(section), "{section}");
        }
    }

    #[test]
    fn grid_cell_size_matches_overlay() {
        assert_eq!(grid_cell_size(), 60.0);
    }
}
