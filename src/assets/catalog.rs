use std::{
    collections::BTreeMap,
    ffi::OsStr,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    assets::natural::natural_cmp,
    foundation::core::{Category, Layer},
    foundation::error::{AvatarError, AvatarResult},
};

/// Ordered, selectable options for one layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerSet {
    assets: Vec<PathBuf>,
}

impl LayerSet {
    /// Wrap `assets` as-is. Selection is by index, so the order given here is the order seeds map
    /// onto.
    pub fn new(assets: Vec<PathBuf>) -> Self {
        Self { assets }
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// `true` when there is nothing to pick from.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Option at `index`.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.assets.get(index).map(PathBuf::as_path)
    }

    /// Options in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.assets.iter().map(PathBuf::as_path)
    }
}

/// The five per-category layer sets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryAssets {
    /// Clothing options.
    pub clothes: LayerSet,
    /// Eye options.
    pub eye: LayerSet,
    /// Face options.
    pub face: LayerSet,
    /// Hair options.
    pub hair: LayerSet,
    /// Mouth options.
    pub mouth: LayerSet,
}

impl CategoryAssets {
    /// Layer set for `layer`; `None` for [`Layer::Background`], which is shared catalog-wide.
    pub fn layer(&self, layer: Layer) -> Option<&LayerSet> {
        match layer {
            Layer::Background => None,
            Layer::Face => Some(&self.face),
            Layer::Clothes => Some(&self.clothes),
            Layer::Mouth => Some(&self.mouth),
            Layer::Hair => Some(&self.hair),
            Layer::Eye => Some(&self.eye),
        }
    }

    fn load(category_dir: &Path, opts: &CatalogOpts) -> AvatarResult<Self> {
        let read = |layer: Layer| read_layer_dir(&category_dir.join(layer.dir_name()), opts);
        Ok(Self {
            clothes: read(Layer::Clothes)?,
            eye: read(Layer::Eye)?,
            face: read(Layer::Face)?,
            hair: read(Layer::Hair)?,
            mouth: read(Layer::Mouth)?,
        })
    }
}

/// Options controlling how layer directories are scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogOpts {
    /// Skip dot-files and OS metadata entries (`Thumbs.db`, `desktop.ini`).
    pub skip_hidden: bool,
}

impl Default for CatalogOpts {
    fn default() -> Self {
        Self { skip_hidden: true }
    }
}

/// Read-only catalog of every selectable layer asset.
///
/// Built once (usually with [`AssetCatalog::load`]) and shared across generation calls; nothing
/// mutates it afterwards, so it can sit behind an `Arc` without locking.
#[derive(Clone, Debug, Default)]
pub struct AssetCatalog {
    root: Option<PathBuf>,
    background: LayerSet,
    categories: BTreeMap<Category, CategoryAssets>,
}

impl AssetCatalog {
    /// In-memory catalog with only a background set. Add categories with
    /// [`AssetCatalog::with_category`].
    pub fn new(background: LayerSet) -> Self {
        Self {
            root: None,
            background,
            categories: BTreeMap::new(),
        }
    }

    /// Attach (or replace) the layer sets for `category`.
    pub fn with_category(mut self, category: Category, assets: CategoryAssets) -> Self {
        self.categories.insert(category, assets);
        self
    }

    /// Scan `root` with default [`CatalogOpts`].
    ///
    /// Expects `root/background/` and `root/<category>/{clothes,eye,face,hair,mouth}/` for every
    /// category.
    pub fn load(root: impl Into<PathBuf>) -> AvatarResult<Self> {
        Self::load_with(root, CatalogOpts::default())
    }

    /// Scan `root` with explicit options.
    #[tracing::instrument(skip_all)]
    pub fn load_with(root: impl Into<PathBuf>, opts: CatalogOpts) -> AvatarResult<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(AvatarError::asset_load(format!(
                "assets root '{}' is not a directory",
                root.display()
            )));
        }

        let background = read_layer_dir(&root.join(Layer::Background.dir_name()), &opts)?;
        let mut categories = BTreeMap::new();
        for category in Category::ALL {
            let assets = CategoryAssets::load(&root.join(category.dir_name()), &opts)?;
            categories.insert(category, assets);
        }

        tracing::debug!(
            root = %root.display(),
            background = background.len(),
            "asset catalog loaded"
        );
        Ok(Self {
            root: Some(root),
            background,
            categories,
        })
    }

    /// Directory the catalog was scanned from, if it came from disk.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Background options, shared by every category.
    pub fn background(&self) -> &LayerSet {
        &self.background
    }

    /// Categories present in this catalog.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    /// Layer sets for `category`.
    pub fn resolve(&self, category: Category) -> AvatarResult<&CategoryAssets> {
        self.categories.get(&category).ok_or_else(|| {
            AvatarError::unknown_category(format!("'{category}' is not in the asset catalog"))
        })
    }

    /// Layer set used for `layer` when generating `category`.
    pub fn layer_set(&self, category: Category, layer: Layer) -> AvatarResult<&LayerSet> {
        let assets = self.resolve(category)?;
        Ok(assets.layer(layer).unwrap_or(&self.background))
    }

    /// Per-layer option counts.
    pub fn summary(&self) -> CatalogSummary {
        let categories = self
            .categories
            .iter()
            .map(|(&category, assets)| {
                let counts: BTreeMap<Layer, usize> = Layer::CATEGORY_LAYERS
                    .into_iter()
                    .filter_map(|layer| assets.layer(layer).map(|set| (layer, set.len())))
                    .collect();
                (category, counts)
            })
            .collect();
        CatalogSummary {
            root: self.root.as_ref().map(|p| p.display().to_string()),
            background: self.background.len(),
            categories,
        }
    }
}

/// Serializable overview of a catalog.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CatalogSummary {
    /// Scanned root directory, if any.
    pub root: Option<String>,
    /// Number of background options.
    pub background: usize,
    /// Option counts per category and layer.
    pub categories: BTreeMap<Category, BTreeMap<Layer, usize>>,
}

/// Whether a directory entry is OS or editor metadata rather than an asset.
pub fn is_hidden_entry(name: impl AsRef<OsStr>) -> bool {
    let name = name.as_ref().to_string_lossy();
    name.starts_with('.')
        || name.eq_ignore_ascii_case("Thumbs.db")
        || name.eq_ignore_ascii_case("desktop.ini")
}

fn read_layer_dir(dir: &Path, opts: &CatalogOpts) -> AvatarResult<LayerSet> {
    let rd = std::fs::read_dir(dir)
        .with_context(|| format!("read layer directory '{}'", dir.display()))
        .map_err(|e| AvatarError::asset_load(format!("{e:#}")))?;

    // Raw entry paths; non-UTF-8 names must stay openable.
    let mut assets = Vec::<PathBuf>::new();
    for entry in rd {
        let entry = entry
            .with_context(|| format!("list layer directory '{}'", dir.display()))
            .map_err(|e| AvatarError::asset_load(format!("{e:#}")))?;
        if opts.skip_hidden && is_hidden_entry(entry.file_name()) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        assets.push(path);
    }

    if assets.is_empty() {
        return Err(AvatarError::asset_load(format!(
            "layer directory '{}' has no assets",
            dir.display()
        )));
    }

    // Lossy keys can collide; raw bytes break the tie.
    assets.sort_by(|a, b| natural_cmp(&sort_key(a), &sort_key(b)).then_with(|| a.cmp(b)));
    Ok(LayerSet::new(assets))
}

fn sort_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/catalog.rs"]
mod tests;
