use ringclock_engine::coords::Viewport;
use ringclock_engine::core::{App, AppControl, FrameCtx};
use ringclock_engine::paint::Color;
use ringclock_engine::render::shapes::arc::ArcRenderer;
use ringclock_engine::scene::DrawList;
use ringclock_engine::time::WallClock;

use crate::face::ClockFace;
use crate::fractions::TimeFractions;

/// The clock application: samples `clock` every frame and paints the face.
pub struct ClockApp<C: WallClock> {
    clock: C,
    background: Color,

    draw_list: DrawList,
    arcs: ArcRenderer,
}

impl<C: WallClock> ClockApp<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            background: Color::WHITE,
            draw_list: DrawList::new(),
            arcs: ArcRenderer::new(),
        }
    }

    /// Reads the clock and records this frame's arcs for `viewport`.
    fn build_scene(&mut self, viewport: Viewport) -> TimeFractions {
        let fractions = TimeFractions::at(&self.clock.now());

        self.draw_list.clear();
        ClockFace::fit(viewport).record(&fractions, &mut self.draw_list);

        fractions
    }
}

impl<C: WallClock> App for ClockApp<C> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let fractions = self.build_scene(ctx.window.viewport());

        log::trace!("frame {} (dt {:.4}s): {fractions:?}", ctx.time.frame_index, ctx.time.dt);

        let (draw_list, arcs) = (&mut self.draw_list, &mut self.arcs);
        ctx.render(self.background, |rctx, target| arcs.render(rctx, target, draw_list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use ringclock_engine::scene::DrawCmd;
    use ringclock_engine::time::FixedClock;

    fn app_at(h: u32, m: u32, s: u32) -> ClockApp<FixedClock<FixedOffset>> {
        let tz = FixedOffset::east_opt(3600).unwrap();
        ClockApp::new(FixedClock::new(tz.with_ymd_and_hms(2024, 3, 1, h, m, s).unwrap()))
    }

    fn recorded_fractions(app: &mut ClockApp<FixedClock<FixedOffset>>) -> Vec<f32> {
        app.draw_list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Arc(arc) => arc.fraction,
            })
            .collect()
    }

    #[test]
    fn scene_holds_one_arc_per_ring() {
        let mut app = app_at(12, 30, 45);
        let f = app.build_scene(Viewport::new(800.0, 600.0));

        assert_eq!(app.draw_list.len(), 6);
        assert_eq!(
            recorded_fractions(&mut app),
            vec![
                f.second as f32,
                f.minute as f32,
                f.hour as f32,
                f.day as f32,
                f.year as f32,
                f.century as f32,
            ]
        );
    }

    #[test]
    fn scene_is_rebuilt_not_appended() {
        let mut app = app_at(6, 0, 0);
        app.build_scene(Viewport::new(400.0, 400.0));
        app.build_scene(Viewport::new(200.0, 100.0));

        assert_eq!(app.draw_list.len(), 6);
        let DrawCmd::Arc(first) = &app.draw_list.items()[0].cmd;
        assert_eq!(first.center.x, 100.0);
        assert!((first.outer_radius - 5.2 * 50.0 / 6.0).abs() < 1e-4);
    }

    #[test]
    fn every_arc_shares_the_viewport_center() {
        let mut app = app_at(23, 59, 59);
        app.build_scene(Viewport::new(1024.0, 768.0));
        for item in app.draw_list.items() {
            let DrawCmd::Arc(arc) = &item.cmd;
            assert_eq!((arc.center.x, arc.center.y), (512.0, 384.0));
        }
    }

    #[test]
    fn background_defaults_to_white() {
        assert_eq!(app_at(0, 0, 0).background, Color::WHITE);
    }
}
