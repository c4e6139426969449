//! Pure calculation functions for photo and watermark dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Maximum share of the photo width a composited watermark may occupy.
const MAX_WATERMARK_PERCENT: u64 = 13;

/// Calculate shrink-to-fit dimensions for a longest-side cap.
///
/// Returns the dimensions the photo should be scaled to so its longest side
/// equals `max_size`, preserving aspect ratio, or `None` when the photo
/// already fits. A photo is never enlarged.
///
/// # Examples
/// ```
/// # use photomark::imaging::fit_within;
/// // 2000x1500 capped at 1000 → 1000x750
/// assert_eq!(fit_within((2000, 1500), 1000), Some((1000, 750)));
///
/// // 800x600 capped at 1000 already fits
/// assert_eq!(fit_within((800, 600), 1000), None);
/// ```
pub fn fit_within(photo: (u32, u32), max_size: u32) -> Option<(u32, u32)> {
    let (w, h) = photo;
    if w.max(h) <= max_size {
        return None;
    }
    if w >= h {
        // Landscape or square: width is the longest side
        let scaled_h = (h as f64 * max_size as f64 / w as f64).round() as u32;
        Some((max_size, scaled_h.max(1)))
    } else {
        // Portrait
        let scaled_w = (w as f64 * max_size as f64 / h as f64).round() as u32;
        Some((scaled_w.max(1), max_size))
    }
}

/// Calculate target dimensions for an oversized watermark.
///
/// Returns the dimensions the watermark should be downscaled to so its width
/// is 13% of the photo width, height scaled proportionally — or `None` when
/// the watermark already occupies at most 13% of the photo width. An
/// in-budget watermark is never upscaled.
pub fn watermark_target(photo: (u32, u32), watermark: (u32, u32)) -> Option<(u32, u32)> {
    let (photo_w, _) = photo;
    let (wm_w, wm_h) = watermark;

    // percent = 100 * wm_w / photo_w, compared without integer truncation
    if 100 * wm_w as u64 <= MAX_WATERMARK_PERCENT * photo_w as u64 {
        return None;
    }

    let target_w = ((MAX_WATERMARK_PERCENT * photo_w as u64 / 100) as u32).max(1);
    let target_h = (wm_h as f64 * target_w as f64 / wm_w as f64).round() as u32;
    Some((target_w, target_h.max(1)))
}

/// Calculate the bottom-left placement for a watermark.
///
/// `x = margin`, `y = photo_height - watermark_height - margin`. No bounds
/// checking: when `watermark_height + margin` exceeds the photo height the
/// y offset goes negative and the composite clips instead of failing.
pub fn watermark_offset(photo: (u32, u32), watermark: (u32, u32), margin: u32) -> (i64, i64) {
    let (_, photo_h) = photo;
    let (_, wm_h) = watermark;
    let x = i64::from(margin);
    let y = i64::from(photo_h) - i64::from(wm_h) - i64::from(margin);
    (x, y)
}
