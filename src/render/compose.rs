use crate::{
    assets::catalog::AssetCatalog,
    assets::decode::load_layer_image,
    foundation::core::{Category, Seed},
    foundation::error::AvatarResult,
    render::canvas::Canvas,
    render::select::{Selection, select_layers},
};

/// Pick and stack one asset per layer for `category`.
///
/// Same `(category, seed)` against the same catalog gives byte-identical pixels.
#[tracing::instrument(skip(catalog))]
pub fn compose(catalog: &AssetCatalog, category: Category, seed: Seed) -> AvatarResult<Canvas> {
    let selection = select_layers(catalog, category, seed)?;
    compose_selection(&selection)
}

/// Decode and draw each picked asset back to front. Stops at the first asset that fails to
/// decode; later layers are not read.
pub fn compose_selection(selection: &Selection) -> AvatarResult<Canvas> {
    let mut canvas = Canvas::avatar();
    for (_, path) in &selection.layers {
        let layer = load_layer_image(path)?;
        canvas.draw_over(&layer)?;
    }
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
