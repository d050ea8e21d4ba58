use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};
use crate::core::data::transform::Transform;
use crate::core::fractals::mandelbrot::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::mandelbrot::lanes::DEFAULT_LANES;
use crate::core::util::pixel_to_complex_coords::PlaneMapping;

/// Renders one full frame with the default lane width.
pub fn render_frame<CMap: ColourMap>(
    transform: &Transform,
    algorithm: &EscapeTimeAlgorithm,
    colour_map: &CMap,
    frame: &mut FrameBuffer,
) {
    render_frame_lanes::<CMap, DEFAULT_LANES>(transform, algorithm, colour_map, frame);
}

/// Renders one full frame, evaluating `L` columns at a time.
///
/// Columns left over when the width is not a multiple of `L` go through the
/// scalar path, which gives identical counts. Every byte of `frame` is
/// overwritten.
pub fn render_frame_lanes<CMap: ColourMap, const L: usize>(
    transform: &Transform,
    algorithm: &EscapeTimeAlgorithm,
    colour_map: &CMap,
    frame: &mut FrameBuffer,
) {
    const { assert!(L > 0, "lane width must be non-zero") };

    let mapping = PlaneMapping::new(transform, frame.width(), frame.height());

    for (y, row) in (0u32..).zip(frame.rows_mut()) {
        let y0 = mapping.imag(y);
        let mut x = 0u32;

        let mut batches = row.chunks_exact_mut(L * BYTES_PER_PIXEL);
        for batch in &mut batches {
            let counts = algorithm.escape_time_batch::<L>(mapping.reals::<L>(x), y0);

            for (pixel, &count) in batch.chunks_exact_mut(BYTES_PER_PIXEL).zip(&counts) {
                pixel.copy_from_slice(&colour_map.map(count).to_rgba());
            }

            x += L as u32;
        }

        for pixel in batches.into_remainder().chunks_exact_mut(BYTES_PER_PIXEL) {
            let count = algorithm.escape_time(mapping.real(x), y0);
            pixel.copy_from_slice(&colour_map.map(count).to_rgba());
            x += 1;
        }
    }
}
