//! Pointer parallax: a stateless pointer → translation mapping for the three
//! hero headings. Opposing signs make the lines drift apart for depth.

/// Per-heading translation multipliers, in px per unit of normalized offset.
/// Order matches the headings top to bottom: presenter line, event title,
/// tagline.
pub const HEADING_SHIFTS: [(f64, f64); 3] = [(8.0, 4.0), (-6.0, -3.0), (12.0, 6.0)];

/// Normalize a pointer position to [-0.5, 0.5] on each axis, zero at the
/// viewport center.
pub fn pointer_offset(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    (client_x / width - 0.5, client_y / height - 0.5)
}

/// Pixel translation for one heading given the normalized offset.
pub fn translation(offset: (f64, f64), shift: (f64, f64)) -> (f64, f64) {
    (offset.0 * shift.0, offset.1 * shift.1)
}
