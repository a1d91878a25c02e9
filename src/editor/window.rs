//! One editor window: surface, renderer, viewport, and input state.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::camera::{CameraRig, MoveDirection, ViewportState};
use crate::error::EditorError;
use crate::grid::GridLineSet;
use crate::input::{InputEvent, InputTranslator, NoOverlay, PointerCapture};
use crate::options::{Options, ProjectionKind};
use crate::render::context::SurfaceContext;
use crate::render::line_renderer::LineRenderer;
use crate::render::{crosshair_lines, line_vertices, FrameUniform};
use crate::util::FrameTiming;

use glam::Vec3;

/// Key-repeat advance step for the perspective fallback camera, seconds.
const MOVE_STEP_SECONDS: f32 = 1.0 / 60.0;

/// Initial position of the perspective fallback camera.
const RIG_START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);

/// A window with its own GPU surface, viewport, and drag state.
///
/// Construct-on-create, release-on-destroy: dropping the window tears
/// down the renderer and surface with it, so there is no separate
/// destroy path to keep in sync.
pub struct EditorWindow {
    window: Arc<Window>,
    context: SurfaceContext,
    renderer: LineRenderer,
    viewport: ViewportState,
    rig: CameraRig,
    translator: InputTranslator,
    timing: FrameTiming,
    overlay: Box<dyn PointerCapture>,
    projection: ProjectionKind,
    line_color: [f32; 3],
    tile_size: f32,
    title: String,
    last_tile: (i32, i32),
}

impl EditorWindow {
    /// Create the window, its GPU surface, and upload the grid geometry.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError`] if window creation or GPU initialization
    /// fails. Both are startup-fatal for this window.
    pub fn open(
        event_loop: &ActiveEventLoop,
        options: &Options,
        grid: &GridLineSet,
    ) -> Result<Self, EditorError> {
        let attrs = Window::default_attributes()
            .with_title(&options.window.title)
            .with_inner_size(LogicalSize::new(
                options.window.width,
                options.window.height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| EditorError::WindowCreation(e.to_string()))?,
        );

        let inner = window.inner_size();
        let (width, height) = (inner.width.max(1), inner.height.max(1));

        let context = pollster::block_on(SurfaceContext::new(
            window.clone(),
            (width, height),
        ))?;

        let renderer = LineRenderer::new(
            &context,
            &line_vertices(grid.points()),
            &crosshair_lines(),
            options.grid.background,
        );

        window.request_redraw();

        Ok(Self {
            window,
            context,
            renderer,
            viewport: ViewportState::new(width, height, &options.controls),
            rig: CameraRig::new(
                RIG_START_POSITION,
                options.controls.move_speed,
                options.controls.look_sensitivity,
            ),
            translator: InputTranslator::new(
                &options.controls,
                options.display.projection,
            ),
            timing: FrameTiming::new(options.display.target_fps),
            overlay: Box::new(NoOverlay),
            projection: options.display.projection,
            line_color: options.grid.line_color,
            tile_size: options.grid.tile_size,
            title: options.window.title.clone(),
            last_tile: (0, 0),
        })
    }

    /// The winit identifier of this window.
    #[must_use]
    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    /// Read-only access to the viewport state.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Install an overlay UI collaborator. Its capture report is polled
    /// once per frame and gates pan/zoom forwarding.
    pub fn set_overlay(&mut self, overlay: Box<dyn PointerCapture>) {
        self.overlay = overlay;
    }

    /// Track a framebuffer resize: surface first, then the viewport's
    /// NDC conversion.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.viewport.resize(width, height);
        self.window.request_redraw();
    }

    /// Apply one pointer event through the translator.
    pub fn handle_input(&mut self, event: InputEvent) {
        let changed = self.translator.handle_event(
            event,
            &mut self.viewport,
            &mut self.rig,
        );
        if changed {
            self.refresh_title();
            self.window.request_redraw();
        }
    }

    /// Advance the perspective fallback camera. No-op in the
    /// orthographic editing view.
    pub fn handle_move_key(&mut self, direction: MoveDirection) {
        if self.projection == ProjectionKind::Perspective {
            self.rig.advance(direction, MOVE_STEP_SECONDS);
            self.window.request_redraw();
        }
    }

    /// Render one frame if the presentation interval has elapsed.
    ///
    /// All input for this poll cycle has already been applied, so the
    /// matrices computed here always see a self-consistent state.
    pub fn redraw(&mut self) {
        if !self.timing.should_render() {
            self.window.request_redraw();
            return;
        }

        self.translator
            .begin_frame(self.overlay.pointer_captured());

        let grid_uniform = FrameUniform::grid_batch(
            &self.viewport,
            &self.rig,
            self.projection,
            self.line_color,
        );
        let overlay_uniform = FrameUniform::overlay_batch(self.line_color);
        self.renderer.update_uniforms(
            &self.context.queue,
            &grid_uniform,
            &overlay_uniform,
        );

        match self.renderer.draw(&self.context) {
            Ok(()) => self.timing.end_frame(),
            Err(
                wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost,
            ) => {
                let inner = self.window.inner_size();
                self.resize(inner.width, inner.height);
            }
            Err(e) => log::error!("render error: {e:?}"),
        }

        self.window.request_redraw();
    }

    /// Show the tile under the viewport origin in the title bar.
    fn refresh_title(&mut self) {
        let tile = self.viewport.origin_tile(self.tile_size);
        if tile != self.last_tile {
            self.window.set_title(&format!(
                "{} - tile ({}, {})",
                self.title, tile.0, tile.1
            ));
            self.last_tile = tile;
        }
    }
}
