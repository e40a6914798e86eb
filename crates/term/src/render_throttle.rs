//! Redraw gating for screens that rarely change.
//!
//! The playing screen changes every tick; the stopped/paused/finished screens
//! only change on input. Static screens are redrawn when their fingerprint
//! changes, and otherwise at most once per interval.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::SessionSnapshot;
use crate::game_view::{HudView, Viewport};

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - `is_static=false`: always render.
    /// - `is_static=true`: render on fingerprint change, otherwise at most once
    ///   per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = !self.has_rendered || fingerprint != self.last_fingerprint;
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if !is_static || changed || stale {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }
        false
    }

    /// Forget the last frame so the next call always renders.
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}

/// Hash of everything a frame is drawn from.
pub fn frame_fingerprint(snap: &SessionSnapshot, hud: &HudView, viewport: Viewport) -> u64 {
    let mut h = DefaultHasher::new();
    snap.phase.hash(&mut h);
    snap.outcome.hash(&mut h);
    snap.session_number.hash(&mut h);
    snap.round_number.hash(&mut h);
    snap.elapsed_time.to_bits().hash(&mut h);
    snap.grid_size.hash(&mut h);
    snap.divergent_index.hash(&mut h);
    for c in [snap.base_colour, snap.divergent_colour]
        .iter()
        .chain(snap.failure_history.iter())
    {
        (c.r, c.g, c.b).hash(&mut h);
        c.alpha.map(f64::to_bits).hash(&mut h);
    }
    hud.hash(&mut h);
    (viewport.width, viewport.height).hash(&mut h);
    h.finish()
}
