//! Compact windowing and event-loop runtime.
//!
//! These helpers abstract the details of `winit` window creation and
//! application state management into a small runtime: create one or more
//! native windows, register per-window update/render callbacks, and pump
//! the platform message loop until a quit signal arrives. The quit signal's
//! payload is returned as the process exit code.
//!
//! ```no_run
//! use std::error::Error;
//! use windlass::{AppRuntime, AppState, ShowMode, Windows};
//!
//! #[derive(Default)]
//! struct Bootstrap;
//!
//! impl AppState for Bootstrap {
//!     fn init(&mut self, windows: &mut Windows) -> Result<(), Box<dyn Error>> {
//!         for id in windows.ids().collect::<Vec<_>>() {
//!             let window = windows.get_mut(id).unwrap();
//!             window.set_on_render(|| { /* draw a frame */ });
//!             window.show(ShowMode::Normal);
//!         }
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     let exit_code = Bootstrap.configure("Window!", 800, 600).run()?;
//!     std::process::exit(exit_code);
//! }
//! ```

pub mod app;
pub mod policy;
pub mod runtime;
pub mod state;
pub mod window;

pub use app::*;
pub use policy::*;
pub use runtime::*;
pub use state::*;
pub use window::*;

pub use ::log;
pub use ::winit;
