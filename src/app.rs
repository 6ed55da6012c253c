use crate::policy::QuitPolicy;
use crate::runtime::{FrameMode, LoopDirective, Runtime};
use crate::state::AppState;
use crate::window::{WindowError, WindowSettings};
use log::{debug, error, info};
use snafu::{ResultExt, Snafu};
use winit::application::ApplicationHandler;
use winit::error::{EventLoopError, OsError};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum AppError {
    #[snafu(display("No display backend found that could be used"))]
    NoBackend,
    #[snafu(display("Event loop error: {source}"))]
    Pump { source: EventLoopError },
    #[snafu(display("Failed to create window \"{title}\": {source}"))]
    WindowCreation { title: String, source: OsError },
    #[snafu(display("Failed to adopt window: {source}"))]
    Adopt { source: WindowError },
    #[snafu(display("App init hook failed: {message}"))]
    Init { message: String },
}

/// Everything needed to start the loop: the windows to create, the caller's
/// state object, and the loop configuration.
pub struct AppSettings<S: AppState> {
    pub windows: Vec<WindowSettings>,
    pub state: S,
    pub policy: QuitPolicy,
    pub mode: FrameMode,
}

pub trait AppRuntime: AppState {
    fn configure(self, title: &str, width: u32, height: u32) -> AppSettings<Self>;

    fn default_config(self) -> AppSettings<Self>;
}

impl<S: AppState> AppSettings<S> {
    /// Adds another window to create at startup.
    pub fn with_window(mut self, settings: WindowSettings) -> Self {
        self.windows.push(settings);
        self
    }

    pub fn with_policy(mut self, policy: QuitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Switches the loop into continuous (per-frame callback) mode.
    pub fn continuous(mut self) -> Self {
        self.mode = FrameMode::Continuous;
        self
    }

    /// Runs the event loop on the calling thread until a quit signal
    /// arrives, returning the signal's payload as the process exit code.
    pub fn run(self) -> Result<i32, AppError> {
        let event_loop = match EventLoop::new() {
            Err(EventLoopError::NotSupported(_)) => return NoBackendErr.fail(),
            e => e.context(PumpErr)?,
        };
        event_loop.set_control_flow(match self.mode {
            FrameMode::Blocking => ControlFlow::Wait,
            FrameMode::Continuous => ControlFlow::Poll,
        });

        let mut app = App {
            runtime: Runtime::new(self.state, self.policy, self.mode),
            pending: self.windows,
            started: false,
            exit_code: 0,
            failure: None,
        };

        event_loop.run_app(&mut app).context(PumpErr)?;

        if let Some(failure) = app.failure {
            return Err(failure);
        }
        Ok(app.exit_code)
    }
}

/// The winit shell around [`Runtime`]: creates the native windows once the
/// loop is live and forwards notifications and idle steps into the core.
pub struct App<S: AppState> {
    runtime: Runtime<S>,
    pending: Vec<WindowSettings>,
    started: bool,
    exit_code: i32,
    failure: Option<AppError>,
}

impl<S: AppState> App<S> {
    fn apply(&mut self, directive: LoopDirective, event_loop: &ActiveEventLoop) {
        if let LoopDirective::Exit(code) = directive {
            self.exit_code = code;
            event_loop.exit();
        }
    }
}

impl<S: AppState> ApplicationHandler for App<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            debug!("Windows already created, ignoring repeated resume");
            return;
        }
        self.started = true;

        info!("Creating {} window(s)", self.pending.len());
        for settings in std::mem::take(&mut self.pending) {
            let native = match event_loop.create_window(settings.attributes()) {
                Ok(native) => native,
                Err(e) => {
                    error!("Failed to create window \"{}\": {e}", settings.title);
                    self.failure = Some(AppError::WindowCreation {
                        title: settings.title,
                        source: e,
                    });
                    event_loop.exit();
                    return;
                }
            };
            if let Err(e) = self.runtime.windows().adopt(Box::new(native)) {
                error!("Failed to adopt window \"{}\": {e}", settings.title);
                self.failure = Some(AppError::Adopt { source: e });
                event_loop.exit();
                return;
            }
        }

        if let Err(e) = self.runtime.init() {
            error!("Init hook failed: {e}");
            self.failure = Some(AppError::Init {
                message: e.to_string(),
            });
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if event_loop.exiting() {
            return;
        }

        let directive = self.runtime.dispatch(window_id, &event);
        self.apply(directive, event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if event_loop.exiting() || !self.started {
            return;
        }

        let directive = self.runtime.idle();
        self.apply(directive, event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.runtime.shutdown();
    }
}
