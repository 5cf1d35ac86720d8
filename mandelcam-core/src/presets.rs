//! Named regions of interest of the Mandelbrot set.
//!
//! Every preset is a `static`, built at compile time from literal arguments
//! and shared read-only between any number of threads.

use crate::config::DEFAULT_ASPECT_RATIO;
use crate::viewport::Viewport;

/// The whole set, with room to spare.
pub static OVERVIEW: Viewport = Viewport::new(-1.0, 0.0, 5.0, DEFAULT_ASPECT_RATIO);

/// A deep zoom into the spiral filaments near the top of the set.
pub static SPIRAL_DETAIL: Viewport = Viewport::new(
    0.001643721971153,
    0.822467633298876,
    0.0000003,
    DEFAULT_ASPECT_RATIO,
);

/// Seahorse valley, between the main cardioid and the period-2 bulb.
pub static SEAHORSE_DETAIL: Viewport = Viewport::new(
    -0.743643887037151,
    0.13182590420533,
    0.00003,
    DEFAULT_ASPECT_RATIO,
);

/// A small copy of the set below the period-2 bulb.
pub static MINIBROT_DETAIL: Viewport = Viewport::new(-0.82, -0.19, 0.038, DEFAULT_ASPECT_RATIO);

/// All presets with their display names, overview first.
pub static ALL: [(&str, &Viewport); 4] = [
    ("overview", &OVERVIEW),
    ("spiral", &SPIRAL_DETAIL),
    ("seahorse", &SEAHORSE_DETAIL),
    ("minibrot", &MINIBROT_DETAIL),
];

/// Look up a preset by its display name, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<&'static Viewport> {
    ALL.iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
        .map(|&(_, vp)| vp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Complex;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn overview_shape() {
        assert_eq!(OVERVIEW.center(), Complex::new(-1.0, 0.0));
        assert_eq!(OVERVIEW.complex_width(), 5.0);
        assert!((OVERVIEW.complex_height() - 3.75).abs() < EPSILON);
        assert_eq!(OVERVIEW.width_vector().im, 0.0);
        assert_eq!(OVERVIEW.height_vector().re, 0.0);
    }

    #[test]
    fn presets_share_aspect_ratio() {
        for (name, vp) in ALL {
            assert!(
                (vp.aspect_ratio() - DEFAULT_ASPECT_RATIO).abs() < 1e-9,
                "{name} has aspect ratio {}",
                vp.aspect_ratio()
            );
        }
    }

    #[test]
    fn detail_views_are_centred() {
        let c = SEAHORSE_DETAIL.to_complex(0.5, 0.0);
        assert_eq!(c, SEAHORSE_DETAIL.center());
        assert!((c.re - (-0.743643887037151)).abs() < EPSILON);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(by_name("overview"), Some(&OVERVIEW));
        assert_eq!(by_name("SeaHorse"), Some(&SEAHORSE_DETAIL));
        assert!(by_name("nowhere").is_none());
    }

    #[test]
    fn presets_are_shareable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || ALL[i].1.to_complex(0.5, 0.0)))
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), ALL[i].1.center());
        }
    }
}
