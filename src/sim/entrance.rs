//! Staggered entrance schedule for the menu.
//!
//! Pure functions of the time spent in the menu phase. The renderer uses
//! them to fade in the header, the items one by one, and the legend.

use std::time::Duration;

/// Delay before the header appears.
pub const HEADER_DELAY: Duration = Duration::from_millis(200);
/// Delay before the first item appears.
pub const FIRST_ITEM_DELAY: Duration = Duration::from_millis(300);
/// Additional delay per item.
pub const ITEM_STAGGER: Duration = Duration::from_millis(100);
/// Delay before the legend appears.
pub const LEGEND_DELAY: Duration = Duration::from_millis(1000);

pub fn header_visible(elapsed: Duration) -> bool {
    elapsed >= HEADER_DELAY
}

/// Delay before item `index` appears.
pub fn item_delay(index: usize) -> Duration {
    FIRST_ITEM_DELAY + ITEM_STAGGER * index as u32
}

/// Number of items visible after `elapsed`, capped at `total`.
pub fn visible_items(elapsed: Duration, total: usize) -> usize {
    (0..total).take_while(|&i| elapsed >= item_delay(i)).count()
}

pub fn legend_visible(elapsed: Duration) -> bool {
    elapsed >= LEGEND_DELAY
}

/// Time after which everything is on screen.
pub fn settled_after(total: usize) -> Duration {
    let last_item = if total == 0 {
        Duration::ZERO
    } else {
        item_delay(total - 1)
    };
    last_item.max(LEGEND_DELAY).max(HEADER_DELAY)
}
