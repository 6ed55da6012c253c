//! The platform-independent loop core.
//!
//! [`Runtime`] owns the window registry, the application state and the quit
//! policy, and reduces every native notification and idle step to a
//! [`LoopDirective`]. The winit glue in [`crate::app`] is a thin shell
//! around it; tests drive it directly through stub native windows.

use crate::policy::QuitPolicy;
use crate::state::AppState;
use crate::window::Windows;
use log::{debug, error};
use winit::event::WindowEvent;
use winit::window::WindowId;

/// Selects how the loop behaves when the message queue runs dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameMode {
    /// Block until the next native message; no per-frame work.
    #[default]
    Blocking,
    /// Drain pending messages, then run one frame of per-window callbacks,
    /// then loop again without blocking.
    Continuous,
}

/// What the pump should do after a dispatch or idle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopDirective {
    Continue,
    /// Terminate the loop; the payload is the process exit code.
    Exit(i32),
}

pub struct Runtime<S: AppState> {
    windows: Windows,
    state: S,
    policy: QuitPolicy,
    mode: FrameMode,
}

impl<S: AppState> Runtime<S> {
    pub fn new(state: S, policy: QuitPolicy, mode: FrameMode) -> Self {
        Runtime {
            windows: Windows::default(),
            state,
            policy,
            mode,
        }
    }

    pub fn windows(&mut self) -> &mut Windows {
        &mut self.windows
    }

    pub fn mode(&self) -> FrameMode {
        self.mode
    }

    /// Runs the application's `init` hook. Called once, after every
    /// configured window was created and adopted.
    pub fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.state.init(&mut self.windows)
    }

    /// Routes one native notification to the owning window.
    ///
    /// Notifications for handles with no live owner are ignored; this is
    /// normal during teardown, when the window is already gone but the
    /// queue still holds messages for it.
    pub fn dispatch(&mut self, id: WindowId, event: &WindowEvent) -> LoopDirective {
        match event {
            WindowEvent::RedrawRequested => {
                if let Some(window) = self.windows.get_mut(id) {
                    window.notify_redraw();
                }
            }
            WindowEvent::CloseRequested => {
                if self.windows.close(id) {
                    debug!("Window {id:?} closed, {} remaining", self.windows.len());
                    self.state.closed(&mut self.windows, id);
                    // A quit posted from the hook carries its own payload
                    // and takes precedence over the policy's code 0.
                    if let LoopDirective::Exit(code) = self.quit_directive() {
                        return LoopDirective::Exit(code);
                    }
                    if self.policy.quits(self.windows.len()) {
                        return LoopDirective::Exit(0);
                    }
                }
            }
            WindowEvent::Resized(size) => {
                debug!("Window {id:?} resized to {}x{}", size.width, size.height);
            }
            _ => {}
        }

        self.quit_directive()
    }

    /// The idle step: the queue is drained, run per-frame work.
    ///
    /// A quit that was posted outside dispatch (the `init` hook, say) is
    /// reduced here in either mode; blocking mode does nothing else. In
    /// continuous mode the app-level `frame` hook runs first, then every
    /// live window's update callback followed by its render callback.
    pub fn idle(&mut self) -> LoopDirective {
        if let LoopDirective::Exit(code) = self.quit_directive() {
            return LoopDirective::Exit(code);
        }
        if self.mode != FrameMode::Continuous {
            return LoopDirective::Continue;
        }

        if let Err(e) = self.state.frame(&mut self.windows) {
            error!("Frame hook failed: {e}");
        }

        for window in self.windows.iter_mut() {
            window.frame();
        }

        self.quit_directive()
    }

    /// Winds the runtime down: runs the `destroy` hook and releases every
    /// remaining native handle.
    pub fn shutdown(&mut self) {
        if let Err(e) = self.state.destroy(&mut self.windows) {
            error!("Destroy hook failed: {e}");
        }
        self.windows.clear();
    }

    fn quit_directive(&mut self) -> LoopDirective {
        match self.windows.take_quit() {
            Some(code) => LoopDirective::Exit(code),
            None => LoopDirective::Continue,
        }
    }
}
