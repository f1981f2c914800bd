//! Panel height rule, in logical pixels.

use crate::state::PageCount;

/// Panel height with the default four pages.
pub const BASE_HEIGHT: u32 = 326;
/// Extra height for every page beyond the fourth.
pub const PAGE_INCREMENT: u32 = 52;

const BASE_PAGES: u32 = 4;

/// Panel height for `count` pages. Panels with fewer than four pages keep
/// the base height.
pub fn panel_height(count: PageCount) -> u32 {
    let extra = count.get().saturating_sub(BASE_PAGES);
    BASE_HEIGHT.saturating_add(extra.saturating_mul(PAGE_INCREMENT))
}
