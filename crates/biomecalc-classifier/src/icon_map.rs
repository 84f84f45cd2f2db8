use ndarray::ArrayView2;

use crate::biome::Biome;

/// Renders a 2-D raster of biome codes as one string of icons per row.
/// Reserved codes render as the [`Biome::Unknown`] icon.
pub fn render_icon_map(codes: ArrayView2<'_, u8>) -> Vec<String> {
    codes
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|&code| Biome::from(code).icon()).collect())
        .collect()
}
