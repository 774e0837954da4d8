use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl WindowCtx<'_> {
    /// Returns the logical window size as a [`Viewport`].
    pub fn viewport(&self) -> Viewport {
        let logical = self.window.inner_size().to_logical::<f64>(self.window.scale_factor());
        Viewport::new(logical.width as f32, logical.height as f32)
    }
}

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl FrameCtx<'_, '_> {
    /// Acquires a frame, clears it with `clear`, calls `draw` with a ready
    /// [`RenderCtx`] and [`RenderTarget`], then presents.
    ///
    /// A fatal surface error is reported through [`RuntimeCtx::fail`] and
    /// returns [`AppControl::Exit`]. A minimized window or a transient surface
    /// error skips the frame without calling `draw`.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.window.viewport();
        if !self.gpu.can_render() || !viewport.is_valid() {
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                if self.gpu.handle_surface_error(&err) != SurfaceErrorAction::Fatal {
                    return AppControl::Continue;
                }
                self.runtime
                    .fail(anyhow::Error::new(err).context("failed to acquire a surface frame"));
                return AppControl::Exit;
            }
        };

        let rctx = RenderCtx::for_gpu(self.gpu, viewport);

        // The target borrows the frame; it is dropped before submit() takes it.
        {
            let mut target = RenderTarget::for_frame(&mut frame);
            drop(target.clear_pass(clear));
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
