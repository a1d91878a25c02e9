//! The winit application shell.
//!
//! One process-wide event loop drives any number of editor windows.
//! Pointer input is routed through the focused-window slot rather than
//! the event's own window id: the windowing layer's callbacks carry no
//! per-instance context beyond an opaque id, and only the window that
//! last gained focus may receive pan/zoom mutations.

mod focus;
mod window;

pub use focus::FocusRouter;
pub use window::EditorWindow;

use rustc_hash::FxHashMap;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use crate::camera::MoveDirection;
use crate::grid::{GridLineSet, GridModel};
use crate::input::InputEvent;
use crate::options::Options;

/// Application state for the editor: options, shared grid geometry, the
/// per-window map, and the focused-window slot.
pub struct EditorApp {
    options: Options,
    grid: GridLineSet,
    windows: FxHashMap<WindowId, EditorWindow>,
    focus: FocusRouter<WindowId>,
}

impl EditorApp {
    /// Generate the grid once and prepare an (empty) window map. The
    /// editor window itself is created when the event loop resumes.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let model = GridModel::new(
            options.grid.tile_size,
            options.grid.num_cols,
            options.grid.num_rows,
        );
        let grid = model.generate();
        log::info!(
            "generated grid: {} segments ({}x{} tiles)",
            grid.segment_count(),
            options.grid.num_cols,
            options.grid.num_rows,
        );
        Self {
            options,
            grid,
            windows: FxHashMap::default(),
            focus: FocusRouter::new(),
        }
    }

    /// Route a pointer event to whichever window holds input focus.
    ///
    /// Events arriving with no (or a stale) focused reference are
    /// dropped with a diagnostic; they must never crash the loop.
    fn route_input(&mut self, event: InputEvent) {
        let Some(id) = self.focus.focused() else {
            log::warn!("pointer event with no focused window; dropping");
            return;
        };
        if let Some(win) = self.windows.get_mut(&id) {
            win.handle_input(event);
        } else {
            log::warn!("focused window no longer exists; dropping event");
            self.focus.invalidate(id);
        }
    }

    /// Route a movement key to the focused window's fallback camera.
    fn route_move_key(&mut self, direction: MoveDirection) {
        let Some(id) = self.focus.focused() else {
            return;
        };
        if let Some(win) = self.windows.get_mut(&id) {
            win.handle_move_key(direction);
        }
    }
}

impl ApplicationHandler for EditorApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.windows.is_empty() {
            return;
        }
        match EditorWindow::open(event_loop, &self.options, &self.grid) {
            Ok(win) => {
                let id = win.id();
                let _ = self.windows.insert(id, win);
                // The freshly created window starts focused, matching
                // the OS behavior before the first focus event arrives.
                self.focus.focus(id);
            }
            Err(e) => {
                log::error!("failed to open editor window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if self.windows.remove(&id).is_some() {
                    self.focus.invalidate(id);
                }
                if self.windows.is_empty() {
                    event_loop.exit();
                }
            }

            WindowEvent::Focused(focused) => {
                if focused {
                    log::debug!("window {id:?} gained input focus");
                    self.focus.focus(id);
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(win) = self.windows.get_mut(&id) {
                    win.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(win) = self.windows.get_mut(&id) {
                    win.redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.route_input(InputEvent::PointerButton {
                    button: button.into(),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.route_input(InputEvent::PointerMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.route_input(InputEvent::Scroll { delta: scroll });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let direction = match code {
                    KeyCode::KeyW => MoveDirection::Forward,
                    KeyCode::KeyS => MoveDirection::Backward,
                    KeyCode::KeyA => MoveDirection::Left,
                    KeyCode::KeyD => MoveDirection::Right,
                    _ => return,
                };
                self.route_move_key(direction);
            }

            _ => (),
        }
    }
}
