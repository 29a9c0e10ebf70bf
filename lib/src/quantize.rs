use image::{Rgb, RgbaImage};
use imagequant::RGBA;

/// An image reduced to a palette.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct Indexed {
    pub(crate) palette: Vec<Rgb<u8>>,
    pub(crate) indices: Vec<u8>,
}

/// Reduces the opaque pixels of an image to a bounded palette.
///
/// Pixels with zero alpha are ignored when building the palette; their
/// indices in the result are unspecified.
pub(crate) struct Quantizer {
    max_colours: u8,
    dither: bool,
}

impl Quantizer {
    #[inline]
    pub(crate) const fn new(max_colours: u8, dither: bool) -> Self {
        Self {
            max_colours,
            dither,
        }
    }

    pub(crate) fn quantize(&self, image: &RgbaImage) -> Result<Indexed, imagequant::Error> {
        let pixels = image
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                if a == 0 {
                    RGBA::new(0, 0, 0, 0)
                } else {
                    RGBA::new(r, g, b, u8::MAX)
                }
            })
            .collect::<Vec<_>>();
        if self.max_colours < 2 {
            return Ok(collapse(&pixels));
        }
        let hidden = pixels.iter().any(|p| p.a == 0);
        let (width, height) = (image.width() as usize, image.height() as usize);

        // Masked pixels take a palette slot of their own, so ask for one more.
        let indexed = self.run(&pixels, width, height, self.max_colours + u8::from(hidden))?;
        if indexed.palette.len() <= self.max_colours as usize {
            return Ok(indexed);
        }
        log::debug!(
            "Quantizer returned {} opaque colours, retrying with {}",
            indexed.palette.len(),
            self.max_colours
        );
        self.run(&pixels, width, height, self.max_colours)
    }

    fn run(
        &self,
        pixels: &[RGBA],
        width: usize,
        height: usize,
        limit: u8,
    ) -> Result<Indexed, imagequant::Error> {
        let mut liq = imagequant::new();
        liq.set_max_colors(u32::from(limit))?;
        let mut img = liq.new_image(pixels, width, height, 0.0)?;
        let mut res = liq.quantize(&mut img)?;
        res.set_dithering_level(if self.dither { 1.0 } else { 0.0 })?;
        let (palette, indices) = res.remapped(&mut img)?;
        Ok(drop_transparent_entries(pixels, &palette, indices))
    }
}

/// Removes palette entries that only stand for masked pixels and renumbers
/// the opaque ones.
fn drop_transparent_entries(pixels: &[RGBA], palette: &[RGBA], indices: Vec<u8>) -> Indexed {
    let mut remap = vec![None; palette.len()];
    let mut opaque = Vec::with_capacity(palette.len());
    for (i, entry) in palette.iter().enumerate() {
        if entry.a >= 0x80 {
            remap[i] = Some(opaque.len() as u8);
            opaque.push(Rgb([entry.r, entry.g, entry.b]));
        }
    }
    let indices = indices
        .into_iter()
        .zip(pixels)
        .map(|(idx, px)| match remap.get(idx as usize).copied().flatten() {
            Some(idx) => idx,
            None if px.a == 0 || opaque.is_empty() => 0,
            None => nearest(&opaque, px),
        })
        .collect();
    Indexed {
        palette: opaque,
        indices,
    }
}

fn nearest(palette: &[Rgb<u8>], px: &RGBA) -> u8 {
    let distance = |c: &Rgb<u8>| {
        let [r, g, b] = c.0.map(i32::from);
        let (dr, dg, db) = (r - i32::from(px.r), g - i32::from(px.g), b - i32::from(px.b));
        dr * dr + dg * dg + db * db
    };
    palette
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| distance(c))
        .map_or(0, |(i, _)| i as u8)
}

/// Single colour palette: the mean of all opaque pixels.
fn collapse(pixels: &[RGBA]) -> Indexed {
    let (sum, count) = pixels
        .iter()
        .filter(|p| p.a != 0)
        .fold(([0u64; 3], 0u64), |([r, g, b], n), p| {
            (
                [r + u64::from(p.r), g + u64::from(p.g), b + u64::from(p.b)],
                n + 1,
            )
        });
    let palette = if count == 0 {
        Vec::new()
    } else {
        vec![Rgb(sum.map(|c| ((c + count / 2) / count) as u8))]
    };
    Indexed {
        palette,
        indices: vec![0; pixels.len()],
    }
}
