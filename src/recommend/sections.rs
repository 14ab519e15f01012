//! Fixed grouping of the restaurant table for the travel page.

use std::ops::Range;

use crate::catalog::RestaurantEntry;

/// The three restaurant groups on the travel page, five entries each when
/// the table is full.
#[derive(Debug, Clone)]
pub struct RestaurantSections<'a> {
    /// The most talked-about spots that appeared on the show
    pub show_picks: &'a [RestaurantEntry],
    /// Spots chosen so several can be visited on one route
    pub course_picks: &'a [RestaurantEntry],
    /// Easy stops near the route
    pub nearby: &'a [RestaurantEntry],
}

/// Slice the restaurant table into its three page sections. A short table
/// fills the sections front to back and leaves the rest empty.
pub fn restaurant_sections(all: &[RestaurantEntry]) -> RestaurantSections<'_> {
    RestaurantSections {
        show_picks: clamped(all, 0..5),
        course_picks: clamped(all, 5..10),
        nearby: clamped(all, 10..15),
    }
}

fn clamped(all: &[RestaurantEntry], range: Range<usize>) -> &[RestaurantEntry] {
    let start = range.start.min(all.len());
    let end = range.end.min(all.len());
    &all[start..end]
}
