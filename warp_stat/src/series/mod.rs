mod meta;
mod summary;

use anyhow::{Context, Result};
use lattice::prelude::*;
use log::{info, warn};
use std::path::Path;
use warp_format::VectorCodec;
use warp_tools::stats::{self, UnNan};

use crate::utils;

use self::meta::{SeriesKind, SeriesMeta};
use self::summary::Summary;

const COMPONENT_NAMES: [&str; 4] = ["x", "y", "z", "w"];

/// Parse meta from file called `file.toml` or alternatively from folder scoped meta file named `series.toml` or else use default meta
fn parse_meta(path: &Path) -> Result<SeriesMeta> {
    let dir = path
        .parent()
        .with_context(|| format!("Path terminates in root or prefix: {}", path.display()))?;
    let meta_file = utils::file_name(path)?;

    let own = utils::combine_path(dir, meta_file, "toml");
    if own.is_file() {
        return SeriesMeta::parse(&own)
            .with_context(|| format!("Invalid meta file: {}", own.display()));
    }

    let scoped = utils::combine_path(dir, "series", "toml");
    if scoped.is_file() {
        return SeriesMeta::parse(&scoped)
            .with_context(|| format!("Invalid meta file: {}", scoped.display()));
    }

    Ok(SeriesMeta::default())
}

fn load<V: VectorCodec>(path: &Path) -> Result<Vec<V>> {
    warp_format::read_series(path)
        .with_context(|| format!("Could not read series: {}", path.display()))
}

fn report(path: &Path, kind: SeriesKind, columns: &[Vec<f32>]) {
    println!("{} ({:?}, {} records)", path.display(), kind, columns[0].len());
    for (name, column) in COMPONENT_NAMES.iter().zip(columns) {
        println!("  {}: {}", name, Summary::of(column));
    }
}

fn save<V: VectorCodec>(path: &Path, output_dir: &Path, series: &[V]) -> Result<()> {
    let file_name = utils::file_name(path)?;
    let target = utils::combine_path(output_dir, file_name, "norm.bin");
    warp_format::write_series(&target, series)
        .with_context(|| format!("Could not write series: {}", target.display()))?;
    info!("Wrote normalized series `{}`", target.display());
    Ok(())
}

fn process_float<V>(path: &Path, meta: SeriesMeta, output_dir: Option<&Path>) -> Result<()>
where
    V: VectorCodec + Components<Scalar = f32> + UnNan,
{
    let mut series: Vec<V> = load(path)?;
    if series.is_empty() {
        warn!("Series is empty: {}", path.display());
        return Ok(());
    }

    if meta.un_nan {
        stats::un_nan(&mut series);
    }

    let columns = summary::columns(&series);
    report(path, meta.kind, &columns);

    if meta.normalize {
        match output_dir {
            Some(output_dir) => {
                let normalized: Vec<Vec<f32>> =
                    columns.iter().map(|column| stats::normalize(column)).collect();
                save(path, output_dir, &summary::join_columns::<V>(&normalized))?;
            }
            None => warn!(
                "Not normalizing `{}`, because no output directory was given.",
                path.display()
            ),
        }
    }

    Ok(())
}

fn process_int<V>(path: &Path, meta: SeriesMeta) -> Result<()>
where
    V: VectorCodec + Components<Scalar = i32>,
{
    let series: Vec<V> = load(path)?;
    if series.is_empty() {
        warn!("Series is empty: {}", path.display());
        return Ok(());
    }

    let columns: Vec<Vec<f32>> = summary::columns(&series)
        .into_iter()
        .map(|column| column.into_iter().map(|v| v as f32).collect())
        .collect();
    report(path, meta.kind, &columns);

    Ok(())
}

pub(crate) fn process(path: &Path, output_dir: Option<&Path>) -> Result<()> {
    let meta = parse_meta(path)?;
    info!("Processing {:?} series: `{}`", meta.kind, path.display());

    if meta.kind.is_integer() && meta.normalize {
        warn!(
            "Not normalizing `{}`, because {:?} series are integer valued.",
            path.display(),
            meta.kind
        );
    }

    match meta.kind {
        SeriesKind::Float => process_float::<f32>(path, meta, output_dir),
        SeriesKind::Float2 => process_float::<Float2>(path, meta, output_dir),
        SeriesKind::Float3 => process_float::<Float3>(path, meta, output_dir),
        SeriesKind::Float4 => process_float::<Float4>(path, meta, output_dir),
        SeriesKind::Int2 => process_int::<Int2>(path, meta),
        SeriesKind::Int3 => process_int::<Int3>(path, meta),
    }
}
