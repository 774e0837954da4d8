//! Clock face layout: which ring goes where, and in what color.
//!
//! The face is measured in "units": the inscribed radius of the window divided
//! by six. Century fills the innermost unit, each longer-period ring sits one unit
//! further in, and the second ring is a thin band just outside the minute ring.

use ringclock_engine::coords::{Vec2, Viewport};
use ringclock_engine::paint::Color;
use ringclock_engine::scene::{ArcCmd, DrawCmd, DrawList, ZIndex};

use crate::fractions::TimeFractions;

/// Number of units the inscribed radius is divided into.
pub const UNITS_PER_RADIUS: f32 = 6.0;

/// One progress ring of the face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Ring {
    Second,
    Minute,
    Hour,
    Day,
    Year,
    Century,
}

impl Ring {
    /// All rings, outermost first (the order they are painted in).
    pub const ALL: [Ring; 6] = [
        Ring::Second,
        Ring::Minute,
        Ring::Hour,
        Ring::Day,
        Ring::Year,
        Ring::Century,
    ];

    /// Inner and outer radius in units.
    pub const fn band(self) -> (f32, f32) {
        match self {
            Ring::Second => (5.0, 5.2),
            Ring::Minute => (4.0, 5.0),
            Ring::Hour => (3.0, 4.0),
            Ring::Day => (2.0, 3.0),
            Ring::Year => (1.0, 2.0),
            Ring::Century => (0.0, 1.0),
        }
    }

    pub fn color(self) -> Color {
        let (r, g, b) = match self {
            Ring::Second => (0xD8, 0xFF, 0x00),
            Ring::Minute => (0x80, 0xFF, 0x00),
            Ring::Hour => (0x00, 0xFF, 0x00),
            Ring::Day => (0x00, 0x80, 0xC0),
            Ring::Year => (0x20, 0x60, 0xE0),
            Ring::Century => (0x40, 0x00, 0xFF),
        };
        Color::from_srgb_u8(r, g, b, 0xFF)
    }

    pub fn fraction(self, fractions: &TimeFractions) -> f64 {
        match self {
            Ring::Second => fractions.second,
            Ring::Minute => fractions.minute,
            Ring::Hour => fractions.hour,
            Ring::Day => fractions.day,
            Ring::Year => fractions.year,
            Ring::Century => fractions.century,
        }
    }
}

/// Face geometry for one window size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockFace {
    pub center: Vec2,
    /// One unit in logical pixels.
    pub unit: f32,
}

impl ClockFace {
    /// Centers the face in `viewport` and scales it to the shorter side.
    pub fn fit(viewport: Viewport) -> Self {
        Self {
            center: viewport.center(),
            unit: viewport.inscribed_radius() / UNITS_PER_RADIUS,
        }
    }

    /// The arc for `ring` at the given progress.
    pub fn arc(&self, ring: Ring, fractions: &TimeFractions) -> ArcCmd {
        let (inner, outer) = ring.band();
        ArcCmd::new(
            self.center,
            inner * self.unit,
            outer * self.unit,
            ring.fraction(fractions) as f32,
            ring.color(),
        )
    }

    /// Records all six rings into `list`, outermost first.
    pub fn record(&self, fractions: &TimeFractions, list: &mut DrawList) {
        for ring in Ring::ALL {
            list.push(ZIndex::default(), DrawCmd::Arc(self.arc(ring, fractions)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fractions() -> TimeFractions {
        TimeFractions {
            second: 0.1,
            minute: 0.2,
            hour: 0.3,
            day: 0.4,
            year: 0.5,
            century: 0.6,
        }
    }

    #[test]
    fn face_fits_the_shorter_side() {
        let face = ClockFace::fit(Viewport::new(1200.0, 600.0));
        assert_eq!(face.center, Vec2::new(600.0, 300.0));
        assert_eq!(face.unit, 50.0);
    }

    #[test]
    fn bands_nest_without_overlap() {
        for pair in Ring::ALL.windows(2) {
            let (outer_ring, inner_ring) = (pair[0], pair[1]);
            assert_eq!(inner_ring.band().1, outer_ring.band().0, "{inner_ring:?} / {outer_ring:?}");
        }
        assert_eq!(Ring::Century.band().0, 0.0);
        assert!(Ring::Second.band().1 < UNITS_PER_RADIUS);
    }

    #[test]
    fn arcs_use_band_radii_and_ring_fraction() {
        let face = ClockFace::fit(Viewport::new(600.0, 600.0));
        let f = fractions();

        let second = face.arc(Ring::Second, &f);
        assert_eq!(second.inner_radius, 250.0);
        assert!((second.outer_radius - 260.0).abs() < 1e-4);
        assert_eq!(second.fraction, 0.1);

        let century = face.arc(Ring::Century, &f);
        assert_eq!((century.inner_radius, century.outer_radius), (0.0, 50.0));
        assert_eq!(century.fraction, 0.6);
    }

    #[test]
    fn record_pushes_six_rings_outermost_first() {
        let face = ClockFace::fit(Viewport::new(300.0, 300.0));
        let mut list = DrawList::new();
        face.record(&fractions(), &mut list);

        let outer: Vec<f32> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Arc(arc) => arc.outer_radius,
            })
            .collect();
        let expected = [130.0, 125.0, 100.0, 75.0, 50.0, 25.0];
        assert_eq!(outer.len(), expected.len());
        for (got, want) in outer.iter().zip(expected) {
            assert!((got - want).abs() < 1e-4, "{got} != {want}");
        }
    }

    #[test]
    fn ring_colors_are_opaque_and_distinct() {
        for (i, a) in Ring::ALL.iter().enumerate() {
            assert_eq!(a.color().a, 1.0);
            for b in &Ring::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
