/// Horizontal origins of the two surfaces, written together as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceOrigins {
    pub content_origin_x: f32,
    pub panel_origin_x: f32,
}

impl SurfaceOrigins {
    pub const fn new(content_origin_x: f32, panel_origin_x: f32) -> Self {
        Self {
            content_origin_x,
            panel_origin_x,
        }
    }
}

/// Controller-side model of the drawer layout.
///
/// The rendering layer owns the live positions; this model mirrors what the
/// controller last asked for, advanced incrementally by drag samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    viewport_width: f32,
    panel_width: f32,
    expanded_offset: f32,
    origins: SurfaceOrigins,
}

impl PanelGeometry {
    /// Collapsed layout for a viewport of the given width.
    pub fn new(viewport_width: f32, expanded_offset: f32) -> Self {
        let viewport_width = viewport_width.max(0.0);
        Self {
            viewport_width,
            panel_width: viewport_width,
            expanded_offset,
            origins: SurfaceOrigins::new(0.0, -expanded_offset),
        }
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn panel_width(&self) -> f32 {
        self.panel_width
    }

    pub fn expanded_offset(&self) -> f32 {
        self.expanded_offset
    }

    pub fn content_origin_x(&self) -> f32 {
        self.origins.content_origin_x
    }

    pub fn panel_origin_x(&self) -> f32 {
        self.origins.panel_origin_x
    }

    pub fn origins(&self) -> SurfaceOrigins {
        self.origins
    }

    /// Settled position with the panel revealed.
    pub fn open_targets(&self) -> SurfaceOrigins {
        SurfaceOrigins::new(
            self.viewport_width - self.expanded_offset,
            -self.expanded_offset,
        )
    }

    /// Settled position with the content covering the viewport.
    pub fn closed_targets(&self) -> SurfaceOrigins {
        SurfaceOrigins::new(0.0, -self.expanded_offset)
    }

    /// Content origin strictly past the middle of the viewport.
    pub fn content_past_midpoint(&self) -> bool {
        self.origins.content_origin_x > self.viewport_width / 2.0
    }

    /// Panel centre still strictly right of the viewport's leading edge.
    pub fn panel_past_midpoint(&self) -> bool {
        self.origins.panel_origin_x + self.panel_width / 2.0 > 0.0
    }

    pub(crate) fn shift_content(&mut self, dx: f32) {
        self.origins.content_origin_x += dx;
    }

    pub(crate) fn shift_both(&mut self, dx: f32) {
        self.origins.content_origin_x += dx;
        self.origins.panel_origin_x += dx;
    }

    pub(crate) fn set_origins(&mut self, origins: SurfaceOrigins) {
        self.origins = origins;
    }

    pub(crate) fn resize(&mut self, viewport_width: f32) {
        let viewport_width = viewport_width.max(0.0);
        self.viewport_width = viewport_width;
        self.panel_width = viewport_width;
    }
}
