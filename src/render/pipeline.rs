use std::{path::Path, sync::Arc};

use rayon::prelude::*;

use crate::{
    assets::catalog::AssetCatalog,
    encode::dispatch::write_file,
    foundation::core::{Category, Seed},
    foundation::error::{AvatarError, AvatarResult},
    render::canvas::Canvas,
    render::compose::compose,
};

/// Avatar generator over a shared, read-only [`AssetCatalog`].
///
/// Cloning is cheap and every call owns its own selector and canvas, so one generator can serve
/// any number of threads.
#[derive(Clone, Debug)]
pub struct Generator {
    catalog: Arc<AssetCatalog>,
}

impl Generator {
    /// Wrap an already loaded catalog.
    pub fn new(catalog: impl Into<Arc<AssetCatalog>>) -> Self {
        Self {
            catalog: catalog.into(),
        }
    }

    /// Scan `root` and build a generator over it.
    pub fn from_assets_dir(root: impl AsRef<Path>) -> AvatarResult<Self> {
        Ok(Self::new(AssetCatalog::load(root.as_ref())?))
    }

    /// The catalog this generator draws from.
    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    /// Random avatar; the seed is the current time.
    pub fn generate<C>(&self, category: C) -> AvatarResult<Canvas>
    where
        C: TryInto<Category>,
        AvatarError: From<C::Error>,
    {
        self.generate_with_seed(category, Seed::from_clock())
    }

    /// Avatar determined by `username`.
    pub fn generate_from_username<C>(&self, category: C, username: &str) -> AvatarResult<Canvas>
    where
        C: TryInto<Category>,
        AvatarError: From<C::Error>,
    {
        self.generate_with_seed(category, Seed::from_username(username))
    }

    /// Avatar determined by an explicit seed.
    pub fn generate_with_seed<C>(&self, category: C, seed: Seed) -> AvatarResult<Canvas>
    where
        C: TryInto<Category>,
        AvatarError: From<C::Error>,
    {
        let category = category.try_into()?;
        compose(&self.catalog, category, seed)
    }

    /// Random avatar written to `path`, format chosen by extension.
    pub fn generate_file<C>(&self, category: C, path: impl AsRef<Path>) -> AvatarResult<()>
    where
        C: TryInto<Category>,
        AvatarError: From<C::Error>,
    {
        let canvas = self.generate(category)?;
        write_file(&canvas, path.as_ref())
    }

    /// Username-determined avatar written to `path`, format chosen by extension.
    pub fn generate_file_from_username<C>(
        &self,
        category: C,
        username: &str,
        path: impl AsRef<Path>,
    ) -> AvatarResult<()>
    where
        C: TryInto<Category>,
        AvatarError: From<C::Error>,
    {
        let canvas = self.generate_from_username(category, username)?;
        write_file(&canvas, path.as_ref())
    }

    /// Username-determined avatars rendered in parallel; results keep input order.
    pub fn generate_many<S>(&self, category: Category, usernames: &[S]) -> Vec<AvatarResult<Canvas>>
    where
        S: AsRef<str> + Sync,
    {
        usernames
            .par_iter()
            .map(|name| self.generate_from_username(category, name.as_ref()))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
