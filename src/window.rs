//! Window ownership and the handle registry.
//!
//! A [`Window`] owns exactly one native window for its lifetime and carries
//! the optional per-window update and render callbacks. The [`Windows`]
//! registry is the windowing subsystem proper: it maps opaque native handles
//! back to their owning [`Window`] so that platform notifications can be
//! dispatched without the window itself knowing about the platform.

use snafu::Snafu;
use winit::dpi::{PhysicalPosition, PhysicalSize, Position, Size};
use winit::window::{WindowAttributes, WindowId};

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum WindowError {
    #[snafu(display("A live window already owns the native handle {id:?}"))]
    DuplicateHandle { id: WindowId },
}

/// Immutable creation parameters for one native window.
///
/// `position: None` means "let the window system pick".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    pub position: Option<(i32, i32)>,
    pub width: u32,
    pub height: u32,
}

impl WindowSettings {
    pub fn new(title: &str, width: u32, height: u32) -> Self {
        WindowSettings {
            title: title.to_string(),
            position: None,
            width,
            height,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.position = Some((x, y));
        self
    }

    /// Translates the settings into `winit` window attributes.
    ///
    /// Windows start hidden; visibility is an explicit [`Window::show`] call
    /// once the caller had a chance to hook up its callbacks.
    pub fn attributes(&self) -> WindowAttributes {
        let mut attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(Size::Physical(PhysicalSize {
                width: self.width,
                height: self.height,
            }))
            .with_visible(false);

        if let Some((x, y)) = self.position {
            attrs = attrs.with_position(Position::Physical(PhysicalPosition { x, y }));
        }

        attrs
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings::new("Windlass Window", 800, 600)
    }
}

/// Visibility hint for [`Window::show`]. Requests are best-effort; the
/// window system may ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowMode {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// The platform seam. The runtime only ever talks to native windows through
/// this trait, which keeps the loop core testable without a display server.
pub trait NativeWindow {
    /// The opaque handle the window system reports notifications under.
    fn handle(&self) -> WindowId;

    /// Makes the window visible per the hint. Best-effort, never fails.
    fn show(&self, mode: ShowMode);

    /// Asks the window system to schedule a paint notification.
    fn redraw(&self);
}

impl NativeWindow for winit::window::Window {
    fn handle(&self) -> WindowId {
        self.id()
    }

    fn show(&self, mode: ShowMode) {
        match mode {
            ShowMode::Normal => {
                self.set_minimized(false);
                self.set_visible(true);
            }
            ShowMode::Minimized => {
                self.set_visible(true);
                self.set_minimized(true);
            }
            ShowMode::Maximized => {
                self.set_maximized(true);
                self.set_visible(true);
            }
        }
    }

    fn redraw(&self) {
        self.request_redraw();
    }
}

pub type FrameCallback = Box<dyn FnMut()>;

/// One on-screen window: the owned native handle plus the callback slots.
///
/// Dropping the `Window` releases the native handle.
pub struct Window {
    native: Box<dyn NativeWindow>,
    on_update: Option<FrameCallback>,
    on_render: Option<FrameCallback>,
}

impl Window {
    fn new(native: Box<dyn NativeWindow>) -> Self {
        Window {
            native,
            on_update: None,
            on_render: None,
        }
    }

    pub fn id(&self) -> WindowId {
        self.native.handle()
    }

    pub fn show(&self, mode: ShowMode) {
        self.native.show(mode);
    }

    pub fn request_redraw(&self) {
        self.native.redraw();
    }

    /// Registers the render callback. Replaces any previous one.
    pub fn set_on_render(&mut self, callback: impl FnMut() + 'static) {
        self.on_render = Some(Box::new(callback));
    }

    /// Registers the update callback. Replaces any previous one.
    pub fn set_on_update(&mut self, callback: impl FnMut() + 'static) {
        self.on_update = Some(Box::new(callback));
    }

    /// Paint notification: runs the render callback, if any. A window with
    /// no callback acknowledges the notification silently so the window
    /// system does not keep the paint request pending.
    pub fn notify_redraw(&mut self) {
        if let Some(render) = self.on_render.as_mut() {
            render();
        }
    }

    /// One idle-loop step for this window: update, then render.
    pub fn frame(&mut self) {
        if let Some(update) = self.on_update.as_mut() {
            update();
        }
        if let Some(render) = self.on_render.as_mut() {
            render();
        }
    }
}

/// The windowing subsystem: owns every live [`Window`], keyed by its native
/// handle, plus the posted quit signal.
#[derive(Default)]
pub struct Windows {
    windows: Vec<Window>,
    quit: Option<i32>,
}

impl Windows {
    /// Takes ownership of a freshly created native window.
    ///
    /// Fails if a live window already owns the same handle; handles are
    /// unique for as long as their owning `Window` is alive.
    pub fn adopt(&mut self, native: Box<dyn NativeWindow>) -> Result<WindowId, WindowError> {
        let id = native.handle();
        if self.get(id).is_some() {
            return DuplicateHandleErr { id }.fail();
        }
        self.windows.push(Window::new(native));
        Ok(id)
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id() == id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id() == id)
    }

    /// Removes the window, releasing its native handle. Returns whether a
    /// window with that handle was live.
    pub fn close(&mut self, id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id() != id);
        self.windows.len() != before
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Window> {
        self.windows.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.windows.iter().map(Window::id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Posts the quit signal the event loop terminates with. The payload
    /// becomes the process exit code; posting twice keeps the last payload.
    pub fn post_quit(&mut self, code: i32) {
        self.quit = Some(code);
    }

    pub(crate) fn take_quit(&mut self) -> Option<i32> {
        self.quit.take()
    }

    pub(crate) fn clear(&mut self) {
        self.windows.clear();
    }
}
