//! PNG encoding of rendered pixmaps.

use crate::pixmap::Pixmap;
use crate::renderer::RenderResult;

/// Encode a pixmap as an 8-bit RGBA PNG.
pub fn encode_png(pixmap: &Pixmap) -> RenderResult<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(pixmap.data())?;
        writer.finish()?;
    }
    log::trace!(
        "Encoded {}x{} PNG ({} bytes)",
        pixmap.width(),
        pixmap.height(),
        buf.len()
    );
    Ok(buf)
}
