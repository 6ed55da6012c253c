use crate::app::{AppRuntime, AppSettings};
use crate::runtime::FrameMode;
use crate::window::{WindowSettings, Windows};
use std::error::Error;
use winit::window::WindowId;

/// Application lifecycle hooks, called from the loop thread.
///
/// All hooks are optional. `init` runs once after every configured window
/// was created and is the place to register callbacks and show windows;
/// `frame` runs once per idle iteration (continuous mode only), before the
/// per-window callbacks; `closed` runs after a window was closed and
/// removed; `destroy` runs when the loop is winding down.
#[allow(unused)]
pub trait AppState: Sized {
    fn init(&mut self, windows: &mut Windows) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn frame(&mut self, windows: &mut Windows) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn closed(&mut self, windows: &mut Windows, id: WindowId) {}

    fn destroy(&mut self, windows: &mut Windows) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

impl<S: AppState> AppRuntime for S {
    fn configure(self, title: &str, width: u32, height: u32) -> AppSettings<Self> {
        AppSettings {
            windows: vec![WindowSettings::new(title, width, height)],
            state: self,
            policy: Default::default(),
            mode: FrameMode::Blocking,
        }
    }

    fn default_config(self) -> AppSettings<Self> {
        self.configure("Windlass Window", 800, 600)
    }
}
