use crate::{CubeState, Face, SIZE};
use anyhow::{ensure, format_err, Context as AnyhowContext, Result};
use std::fmt;
use std::path::Path;
use strum::IntoEnumIterator;

/// Net width and height, in faces
const NET_FACES: (usize, usize) = (4, 3);

/// Largest sticker size accepted by [`net_rgba`], in pixels
pub const MAX_SCALE: usize = 256;

/// Where each face sits in the unfolded net, as (column, row) in faces
fn net_position(face: Face) -> (usize, usize) {
    match face {
        Face::Top => (1, 0),
        Face::Left => (0, 1),
        Face::Front => (1, 1),
        Face::Right => (2, 1),
        Face::Back => (3, 1),
        Face::Bottom => (1, 2),
    }
}

fn face_at(net_col: usize, net_row: usize) -> Option<Face> {
    Face::iter().find(|&face| net_position(face) == (net_col, net_row))
}

/// Write the cube as a text net, one color letter per sticker:
///
/// ```text
///       R R R
///       R R R
///       R R R
/// B B B Y Y Y K K K W W W
/// ...
/// ```
pub fn write_net(out: &mut impl fmt::Write, cube: &CubeState) -> fmt::Result {
    let (net_width, net_height) = NET_FACES;
    for net_row in 0..net_height {
        for row in 0..SIZE {
            let mut line = String::new();
            for net_col in 0..net_width {
                for col in 0..SIZE {
                    match face_at(net_col, net_row) {
                        Some(face) => line.push(cube.face(face)[row][col].letter()),
                        None => line.push(' '),
                    }
                    line.push(' ');
                }
            }
            writeln!(out, "{}", line.trim_end())?;
        }
    }
    Ok(())
}

/// Pixel width, height and RGBA byte length of a net at `scale`
fn net_size(scale: usize) -> Result<(usize, usize, usize)> {
    ensure!(scale > 0, "Sticker scale must be positive");
    ensure!(scale <= MAX_SCALE, "Sticker scale {scale} exceeds {MAX_SCALE}");

    let (net_width, net_height) = NET_FACES;
    let overflow = || format_err!("Net at scale {scale} is too large");
    let width = (net_width * SIZE).checked_mul(scale).ok_or_else(overflow)?;
    let height = (net_height * SIZE).checked_mul(scale).ok_or_else(overflow)?;
    let len = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(overflow)?;
    Ok((width, height, len))
}

/// Render the cube's net as RGBA pixels, `scale` pixels per sticker.
/// Returns (width, height, data). Cells outside the net are transparent.
pub fn net_rgba(cube: &CubeState, scale: usize) -> Result<(usize, usize, Vec<u8>)> {
    let (width, height, len) = net_size(scale)?;
    let mut data = vec![0u8; len];

    // Outline stickers once they're big enough to show one
    let outline = scale >= 4;

    for face in Face::iter() {
        let (net_col, net_row) = net_position(face);
        for (row, colors) in cube.face(face).iter().enumerate() {
            for (col, color) in colors.iter().enumerate() {
                let x0 = (net_col * SIZE + col) * scale;
                let y0 = (net_row * SIZE + row) * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let edge = dx == 0 || dy == 0 || dx == scale - 1 || dy == scale - 1;
                        let [r, g, b] = if outline && edge { [0; 3] } else { color.rgb() };
                        let idx = ((y0 + dy) * width + x0 + dx) * 4;
                        data[idx..idx + 4].copy_from_slice(&[r, g, b, 0xff]);
                    }
                }
            }
        }
    }

    Ok((width, height, data))
}

/// Export a cube's net to a PNG file
pub fn export_cube_png(path: impl AsRef<Path>, cube: &CubeState, scale: usize) -> Result<()> {
    let (width, _, data) = net_rgba(cube, scale)?;
    write_png_rgba(path, &data, width)
}

/// Writes the given RGBA data to a PNG file
pub fn write_png_rgba(path: impl AsRef<Path>, buf: &[u8], width: usize) -> Result<()> {
    let row_len = width
        .checked_mul(4)
        .filter(|&n| n > 0)
        .context("Image width out of range")?;
    ensure!(
        buf.len() % row_len == 0,
        "Image data must be divisible by width"
    );
    let height = buf.len() / row_len;
    let png_width = u32::try_from(width).context("Image width exceeds PNG limits")?;
    let png_height = u32::try_from(height).context("Image height exceeds PNG limits")?;

    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Creating {}", path.display()))?;
    let w = std::io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, png_width, png_height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().context("Writing header")?;

    writer.write_image_data(buf).context("Writing image data")?;

    Ok(())
}
