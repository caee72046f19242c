//! Once-only visibility trigger.
//!
//! Reports the first time a container scrolls into the viewport. The
//! viewport is shrunk by `margin` rows on both edges, so the container has
//! to be well inside before the trigger fires. After firing, the trigger
//! stays latched and never reports again.

/// One-shot intersection observer over row coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityTrigger {
    margin: u16,
    fired: bool,
}

impl VisibilityTrigger {
    pub fn new(margin: u16) -> Self {
        Self {
            margin,
            fired: false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Observe the container's position relative to the viewport top.
    ///
    /// # Arguments
    /// * `container_top` - First row of the container, relative to the viewport
    ///   (negative when scrolled past)
    /// * `container_height` - Height of the container in rows
    /// * `viewport_height` - Height of the viewport in rows
    ///
    /// # Returns
    /// `true` exactly once, on the first observation that intersects.
    pub fn observe(&mut self, container_top: i32, container_height: u16, viewport_height: u16) -> bool {
        if self.fired {
            return false;
        }
        if intersects(container_top, container_height, viewport_height, self.margin) {
            self.fired = true;
            return true;
        }
        false
    }

    /// Fire unconditionally (used when the host starts with the section in view).
    pub fn force(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Whether `[top, top + height)` overlaps the viewport shrunk by `margin`.
///
/// When the margin swallows the whole viewport, the shrunk area degenerates
/// to the viewport's middle row.
pub fn intersects(top: i32, height: u16, viewport_height: u16, margin: u16) -> bool {
    if height == 0 || viewport_height == 0 {
        return false;
    }
    let margin = i32::from(margin);
    let viewport = i32::from(viewport_height);
    let (lo, hi) = if 2 * margin >= viewport {
        let mid = viewport / 2;
        (mid, mid + 1)
    } else {
        (margin, viewport - margin)
    };
    let bottom = top + i32::from(height);
    top < hi && bottom > lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_when_container_enters_viewport() {
        let mut trigger = VisibilityTrigger::new(0);
        assert!(!trigger.observe(30, 10, 24));
        assert!(trigger.observe(20, 10, 24));
        assert!(trigger.has_fired());
    }

    #[test]
    fn fires_only_once() {
        let mut trigger = VisibilityTrigger::new(0);
        assert!(trigger.observe(0, 10, 24));
        assert!(!trigger.observe(0, 10, 24));
        assert!(!trigger.observe(40, 10, 24));
        assert!(!trigger.observe(0, 10, 24));
    }

    #[test]
    fn margin_delays_the_trigger() {
        let mut trigger = VisibilityTrigger::new(4);
        // Container starts on row 21 of 24: inside the viewport, outside the margin.
        assert!(!trigger.observe(21, 10, 24));
        assert!(trigger.observe(19, 10, 24));
    }

    #[test]
    fn scrolled_past_container_does_not_fire() {
        let mut trigger = VisibilityTrigger::new(0);
        assert!(!trigger.observe(-20, 10, 24));
    }

    #[test]
    fn force_fires_once() {
        let mut trigger = VisibilityTrigger::new(2);
        assert!(trigger.force());
        assert!(!trigger.force());
        assert!(!trigger.observe(0, 10, 24));
    }

    #[test]
    fn oversized_margin_uses_middle_row() {
        assert!(intersects(0, 24, 10, 20));
        assert!(!intersects(6, 4, 10, 20));
    }

    #[test]
    fn empty_container_never_intersects() {
        assert!(!intersects(0, 0, 24, 0));
        assert!(!intersects(0, 10, 0, 0));
    }
}
