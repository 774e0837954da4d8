use anyhow::{Context, Result};
use ouroboros::self_referencing;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::time::{FrameClock, RedrawPolicy};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
    pub redraw: RedrawPolicy,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "ringclock".to_string(),
            initial_size: LogicalSize::new(640.0, 640.0),
            resizable: true,
            redraw: RedrawPolicy::Continuous,
        }
    }
}

/// Runtime context passed to the application during a frame.
///
/// Requests are applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    exit: bool,
    error: Option<anyhow::Error>,
}

impl RuntimeCtx {
    /// Asks the runtime to close the window and leave the event loop.
    pub fn exit(&mut self) {
        self.exit = true;
    }

    /// Stops the runtime with `err`; [`Runtime::run`] returns it.
    ///
    /// Only the first error of a frame is kept.
    pub fn fail(&mut self, err: anyhow::Error) {
        self.exit = true;
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    pub fn exit_requested(&self) -> bool {
        self.exit
    }

    /// Folds the app's return value and the buffered requests into one outcome.
    fn finish(self, control: AppControl) -> FrameOutcome {
        match self.error {
            Some(err) => FrameOutcome::Fail(err),
            None if self.exit || control == AppControl::Exit => FrameOutcome::Close,
            None => FrameOutcome::Continue,
        }
    }
}

/// What the runtime does once a frame callback has returned.
#[derive(Debug)]
enum FrameOutcome {
    Continue,
    Close,
    Fail(anyhow::Error),
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `app` until the window is closed.
    ///
    /// Returns `Ok(())` on a normal close; window or GPU initialization failures
    /// are returned as errors.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,
    occluded: bool,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    /// Set once the window existed; `resumed` must not recreate it after close.
    started: bool,
    /// Fatal error raised inside a callback, reported by `Runtime::run`.
    error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            started: false,
            error: None,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            clock: FrameClock::default(),
            occluded: false,
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()
    }

    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.take().is_some() {
            log::info!("window closed");
        }
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        self.shut_down(event_loop);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        let mut runtime_ctx = RuntimeCtx::default();
        let mut control = AppControl::Continue;

        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry.as_mut() else { return };

        entry.with_mut(|fields| {
            let time = fields.clock.tick();
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: fields.window,
                },
                gpu: fields.gpu,
                time,
                runtime: &mut runtime_ctx,
            };
            control = app.on_frame(&mut ctx);
        });

        match runtime_ctx.finish(control) {
            FrameOutcome::Continue => {}
            FrameOutcome::Close => self.shut_down(event_loop),
            FrameOutcome::Fail(err) => self.fail(event_loop, err),
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                log::info!("window \"{}\" created", self.config.title);
                entry.borrow_window().request_redraw();
                self.entry = Some(entry);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = self.entry.as_ref() else {
            return;
        };
        if *entry.borrow_occluded() {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        let policy = self.config.redraw;
        let last = entry.borrow_clock().last_tick();

        if policy.is_due(last, Instant::now()) {
            event_loop.set_control_flow(ControlFlow::Wait);
            entry.borrow_window().request_redraw();
        } else if let Some(deadline) = policy.next_deadline(last) {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.shut_down(event_loop);
            return;
        }

        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => self.shut_down(event_loop),

            WindowEvent::Resized(new_size) => {
                log::debug!("resized to {}x{}", new_size.width, new_size.height);
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.borrow_window().request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.borrow_window().inner_size();
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.borrow_window().request_redraw();
            }

            WindowEvent::Occluded(occluded) => {
                entry.with_occluded_mut(|o| *o = occluded);
                if !occluded {
                    entry.with_clock_mut(FrameClock::reset);
                    entry.borrow_window().request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop, window_id),

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(ctx: RuntimeCtx, control: AppControl) -> &'static str {
        match ctx.finish(control) {
            FrameOutcome::Continue => "continue",
            FrameOutcome::Close => "close",
            FrameOutcome::Fail(_) => "fail",
        }
    }

    #[test]
    fn quiet_frame_keeps_running() {
        assert_eq!(outcome(RuntimeCtx::default(), AppControl::Continue), "continue");
    }

    #[test]
    fn exit_request_or_exit_control_closes() {
        let mut ctx = RuntimeCtx::default();
        ctx.exit();
        assert!(ctx.exit_requested());
        assert_eq!(outcome(ctx, AppControl::Continue), "close");

        assert_eq!(outcome(RuntimeCtx::default(), AppControl::Exit), "close");
    }

    #[test]
    fn failure_carries_the_first_error() {
        let mut ctx = RuntimeCtx::default();
        ctx.fail(anyhow::anyhow!("surface out of memory"));
        ctx.fail(anyhow::anyhow!("second"));
        assert!(ctx.exit_requested());

        match ctx.finish(AppControl::Exit) {
            FrameOutcome::Fail(err) => assert_eq!(err.to_string(), "surface out of memory"),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn failure_wins_over_continue() {
        let mut ctx = RuntimeCtx::default();
        ctx.fail(anyhow::anyhow!("lost device"));
        assert_eq!(outcome(ctx, AppControl::Continue), "fail");
    }

    #[test]
    fn default_config_uses_continuous_redraw() {
        let config = RuntimeConfig::default();
        assert_eq!(config.redraw, RedrawPolicy::Continuous);
        assert!(config.resizable);
    }
}
