//! Shared one-dimensional bounce motion.

/// Advance `position` by `speed`, then reverse direction if the new position
/// lies outside `[lower, upper]`.
///
/// The bound check runs after the advance, so a single tick can land past
/// the boundary before the reflection applies; the position is not clamped.
/// The reversed speed carries the entity back inside on the following tick.
pub fn advance_and_reflect(position: &mut f64, speed: &mut f64, lower: f64, upper: f64) {
    *position += *speed;
    if *position < lower || *position > upper {
        *speed = -*speed;
    }
}
