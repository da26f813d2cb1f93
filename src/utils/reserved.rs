//! Reserved first-segment route names.
//!
//! A short code occupies the same URL shape as any other single path
//! segment, so the segments claimed by fixed routes are spelled out here
//! and checked in two places: creation rejects them as custom codes, and
//! redirect resolution refuses them before any store lookup.

/// First path segments owned by fixed routes.
pub const RESERVED_SEGMENTS: &[&str] = &["api", "assets", "code", "healthz"];

/// Returns true if `segment` is claimed by a fixed route.
///
/// Matching is case-sensitive: routes are lowercase, and codes compare
/// exactly.
pub fn is_reserved_segment(segment: &str) -> bool {
    RESERVED_SEGMENTS.contains(&segment)
}
