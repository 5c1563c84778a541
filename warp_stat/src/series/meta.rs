use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Record type stored in a series file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SeriesKind {
    #[default]
    Float,
    Float2,
    Float3,
    Float4,
    Int2,
    Int3,
}

impl SeriesKind {
    pub(crate) fn is_integer(self) -> bool {
        matches!(self, SeriesKind::Int2 | SeriesKind::Int3)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct SeriesMeta {
    pub(crate) kind: SeriesKind,
    pub(crate) un_nan: bool,
    pub(crate) normalize: bool,
}

impl SeriesMeta {
    pub(crate) fn parse(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let meta: Self = toml::from_slice(&data)?;
        Ok(meta)
    }
}
