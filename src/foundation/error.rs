/// Convenience result type used across avatargen.
pub type AvatarResult<T> = Result<T, AvatarError>;

/// Top-level error taxonomy used by generation APIs.
#[derive(thiserror::Error, Debug)]
pub enum AvatarError {
    /// A category value outside the closed `male | female | monster` set, or one the catalog
    /// does not carry.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The asset tree is missing, unreadable, or has an empty layer directory.
    #[error("asset load error: {0}")]
    AssetLoad(String),

    /// A selected layer asset could not be read or decoded as an image.
    #[error("asset decode error: {0}")]
    AssetDecode(String),

    /// The destination file could not be created or encoded into.
    #[error("file write error: {0}")]
    FileWrite(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AvatarError {
    /// Build an [`AvatarError::UnknownCategory`] value.
    pub fn unknown_category(msg: impl Into<String>) -> Self {
        Self::UnknownCategory(msg.into())
    }

    /// Build an [`AvatarError::AssetLoad`] value.
    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoad(msg.into())
    }

    /// Build an [`AvatarError::AssetDecode`] value.
    pub fn asset_decode(msg: impl Into<String>) -> Self {
        Self::AssetDecode(msg.into())
    }

    /// Build an [`AvatarError::FileWrite`] value.
    pub fn file_write(msg: impl Into<String>) -> Self {
        Self::FileWrite(msg.into())
    }
}

// Lets `Category` itself satisfy the `TryInto<Category>` bound on generation entry points.
impl From<std::convert::Infallible> for AvatarError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
