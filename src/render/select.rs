use std::path::{Path, PathBuf};

use crate::{
    assets::catalog::{AssetCatalog, LayerSet},
    foundation::core::{Category, Layer, Seed},
    foundation::error::{AvatarError, AvatarResult},
    foundation::math::Rng64,
};

/// Seeded picker. One instance per generation call; every pick consumes exactly one draw.
#[derive(Clone, Debug)]
pub struct Selector {
    rng: Rng64,
}

impl Selector {
    /// Selector whose picks are fully determined by `seed`.
    pub fn new(seed: Seed) -> Self {
        Self {
            rng: Rng64::new(seed.as_u64()),
        }
    }

    /// Pick one option uniformly by index.
    pub fn pick_one<'a>(&mut self, set: &'a LayerSet) -> AvatarResult<&'a Path> {
        if set.is_empty() {
            return Err(AvatarError::asset_load("cannot pick from an empty layer set"));
        }
        let index = self.rng.next_index(set.len());
        set.get(index)
            .ok_or_else(|| AvatarError::asset_load(format!("layer index {index} out of range")))
    }
}

/// The asset chosen for each layer, in draw order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Category the picks were made for.
    pub category: Category,
    /// Seed the picks were made with.
    pub seed: Seed,
    /// `(layer, asset)` pairs in [`Layer::DRAW_ORDER`].
    pub layers: Vec<(Layer, PathBuf)>,
}

impl Selection {
    /// Asset picked for `layer`.
    pub fn asset(&self, layer: Layer) -> Option<&Path> {
        self.layers
            .iter()
            .find(|(l, _)| *l == layer)
            .map(|(_, p)| p.as_path())
    }
}

/// Resolve `category` and pick one asset per layer with a fresh [`Selector`].
pub fn select_layers(
    catalog: &AssetCatalog,
    category: Category,
    seed: Seed,
) -> AvatarResult<Selection> {
    let assets = catalog.resolve(category)?;
    let mut selector = Selector::new(seed);

    let mut layers = Vec::with_capacity(Layer::DRAW_ORDER.len());
    for layer in Layer::DRAW_ORDER {
        let set = assets.layer(layer).unwrap_or(catalog.background());
        let path = selector.pick_one(set)?;
        tracing::debug!(%category, %layer, asset = %path.display(), "picked layer asset");
        layers.push((layer, path.to_path_buf()));
    }

    Ok(Selection {
        category,
        seed,
        layers,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/select.rs"]
mod tests;
