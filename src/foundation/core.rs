use std::{fmt, str::FromStr};

use crate::foundation::{
    error::{AvatarError, AvatarResult},
    math::Fnv1a32,
};

/// Side length, in pixels, of every generated avatar.
pub const CANVAS_SIZE: u32 = 400;

/// Character category. Each owns its own face/clothes/mouth/hair/eye asset sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Male characters.
    Male,
    /// Female characters.
    Female,
    /// Monster characters.
    Monster,
}

impl Category {
    /// All categories in ordinal order.
    pub const ALL: [Category; 3] = [Category::Male, Category::Female, Category::Monster];

    /// Directory name under the assets root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Male => "male",
            Category::Female => "female",
            Category::Monster => "monster",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.dir_name())
    }
}

/// Ordinals `0 = male`, `1 = female`, `2 = monster`.
impl TryFrom<i32> for Category {
    type Error = AvatarError;

    fn try_from(raw: i32) -> AvatarResult<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| AvatarError::unknown_category(format!("ordinal {raw}")))
    }
}

impl FromStr for Category {
    type Err = AvatarError;

    fn from_str(s: &str) -> AvatarResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.dir_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AvatarError::unknown_category(format!("'{s}'")))
    }
}

impl TryFrom<&str> for Category {
    type Error = AvatarError;

    fn try_from(s: &str) -> AvatarResult<Self> {
        s.parse()
    }
}

/// One visual component of an avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Shared across all categories.
    Background,
    /// Head shape and skin.
    Face,
    /// Clothing.
    Clothes,
    /// Mouth.
    Mouth,
    /// Hair.
    Hair,
    /// Eyes.
    Eye,
}

impl Layer {
    /// Back-to-front stacking order. Also the order in which picks consume random draws.
    pub const DRAW_ORDER: [Layer; 6] = [
        Layer::Background,
        Layer::Face,
        Layer::Clothes,
        Layer::Mouth,
        Layer::Hair,
        Layer::Eye,
    ];

    /// Layers owned per category (everything except the background).
    pub const CATEGORY_LAYERS: [Layer; 5] = [
        Layer::Clothes,
        Layer::Eye,
        Layer::Face,
        Layer::Hair,
        Layer::Mouth,
    ];

    /// Directory name of this layer's assets.
    pub fn dir_name(self) -> &'static str {
        match self {
            Layer::Background => "background",
            Layer::Face => "face",
            Layer::Clothes => "clothes",
            Layer::Mouth => "mouth",
            Layer::Hair => "hair",
            Layer::Eye => "eye",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.dir_name())
    }
}

/// Seed driving one generation call's layer picks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed(pub i64);

impl Seed {
    /// Deterministic seed: FNV-1a 32-bit hash of `username`, zero-extended.
    pub fn from_username(username: &str) -> Self {
        let mut h = Fnv1a32::new_default();
        h.write_bytes(username.as_bytes());
        Self(i64::from(h.finish()))
    }

    /// Time-based seed: nanoseconds since the UNIX epoch.
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        Self(nanos as i64)
    }

    /// Seed bits as fed to the generator.
    pub fn as_u64(self) -> u64 {
        self.0 as u64
    }
}

impl From<i64> for Seed {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
