//! Country boundary acquisition.
//!
//! The map wants real coastlines but must never hold the page hostage to
//! the network. Boundaries come from the first source that works: a local
//! `data/` file, the user cache, a one-shot fetch (cached for next time),
//! and finally the hand-traced outlines in [`builtin`]. Every fallback is
//! reported on stderr before the terminal enters raw mode.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use geojson::{Feature, GeoJson, Value};
use glam::DVec2;

use crate::content;
use crate::map::geometry::Ring;
use crate::map::Country;

pub mod builtin;

/// Natural Earth 1:110m admin-0 countries. Its `NAME` property uses the
/// same spellings as the display list ("Dem. Rep. Congo", "eSwatini").
pub const ATLAS_URL: &str = "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_110m_admin_0_countries.geojson";

const ATLAS_FILE: &str = "ne_110m_admin_0_countries.geojson";

/// Where the rendered boundaries actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    LocalFile,
    Cached,
    Remote,
    Builtin,
}

impl DataSource {
    pub fn label(self) -> &'static str {
        match self {
            DataSource::LocalFile => "local atlas",
            DataSource::Cached => "cached atlas",
            DataSource::Remote => "live atlas",
            DataSource::Builtin => "offline outlines",
        }
    }
}

pub struct Boundaries {
    pub countries: Vec<Country>,
    pub source: DataSource,
}

/// Load display-country boundaries from the best available source.
/// Never fails: the builtin outlines are the last resort.
pub fn load_boundaries() -> Boundaries {
    let local = Path::new("data").join(ATLAS_FILE);
    if local.exists() {
        match load_atlas_file(&local) {
            Ok(countries) if !countries.is_empty() => {
                return Boundaries {
                    countries,
                    source: DataSource::LocalFile,
                };
            }
            Ok(_) => eprintln!(
                "Warning: {} contains no displayable countries",
                local.display()
            ),
            Err(e) => eprintln!("Warning: failed to load {}: {e:#}", local.display()),
        }
    }

    if let Some(cache) = cache_path() {
        if cache.exists() {
            match load_atlas_file(&cache) {
                Ok(countries) if !countries.is_empty() => {
                    return Boundaries {
                        countries,
                        source: DataSource::Cached,
                    };
                }
                Ok(_) => eprintln!("Warning: cached atlas contains no displayable countries"),
                Err(e) => eprintln!("Warning: failed to load cached atlas: {e:#}"),
            }
        }
    }

    match fetch_atlas() {
        Ok(bytes) => match parse_countries(bytes.clone()) {
            Ok(countries) if !countries.is_empty() => {
                store_cache(&bytes);
                return Boundaries {
                    countries,
                    source: DataSource::Remote,
                };
            }
            Ok(_) => eprintln!("Warning: fetched atlas contains no displayable countries"),
            Err(e) => eprintln!("Warning: failed to parse fetched atlas: {e:#}"),
        },
        Err(e) => eprintln!("Warning: could not fetch country boundaries: {e:#}"),
    }

    Boundaries {
        countries: builtin::southern_africa(),
        source: DataSource::Builtin,
    }
}

fn load_atlas_file(path: &Path) -> Result<Vec<Country>> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    parse_countries(bytes)
}

fn fetch_atlas() -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent(concat!("footprints-tui/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("build http client")?;
    let response = client
        .get(ATLAS_URL)
        .send()
        .context("request country atlas")?
        .error_for_status()
        .context("country atlas response")?;
    Ok(response.bytes().context("read atlas body")?.to_vec())
}

fn cache_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("footprints-tui").join(ATLAS_FILE))
}

fn store_cache(bytes: &[u8]) {
    let Some(path) = cache_path() else {
        return;
    };
    let write = (|| -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, bytes)?;
        Ok(())
    })();
    if let Err(e) = write {
        eprintln!("Warning: could not cache atlas at {}: {e:#}", path.display());
    }
}

/// Parse a GeoJSON atlas and keep only the display countries.
/// The buffer is parsed in place, which is why it is taken by value.
fn parse_countries(mut bytes: Vec<u8>) -> Result<Vec<Country>> {
    let geojson: GeoJson =
        simd_json::serde::from_slice(&mut bytes).context("parse atlas GeoJSON")?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        anyhow::bail!("atlas is not a FeatureCollection");
    };

    let mut countries = Vec::new();
    for feature in collection.features {
        let Some(name) = feature_name(&feature) else {
            continue;
        };
        if !content::is_display_country(name) {
            continue;
        }
        let name = name.to_string();
        if let Some(country) = Country::new(name, feature_rings(&feature)) {
            countries.push(country);
        }
    }
    Ok(countries)
}

/// Join key for the allow-list and supply table. Natural Earth exports
/// use `NAME`; other atlases use lowercase `name`.
fn feature_name(feature: &Feature) -> Option<&str> {
    let props = feature.properties.as_ref()?;
    props.get("name").or_else(|| props.get("NAME"))?.as_str()
}

fn feature_rings(feature: &Feature) -> Vec<Ring> {
    let mut rings = Vec::new();
    if let Some(geometry) = &feature.geometry {
        collect_rings(&geometry.value, &mut rings);
    }
    rings
}

fn collect_rings(value: &Value, rings: &mut Vec<Ring>) {
    match value {
        Value::Polygon(polygon) => {
            rings.extend(polygon.iter().map(|ring| to_ring(ring)));
        }
        Value::MultiPolygon(polygons) => {
            for polygon in polygons {
                rings.extend(polygon.iter().map(|ring| to_ring(ring)));
            }
        }
        Value::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_rings(&geometry.value, rings);
            }
        }
        _ => {}
    }
}

/// GeoJSON rings repeat their first position at the end; the renderer
/// closes rings implicitly, so the duplicate is dropped.
fn to_ring(coords: &[Vec<f64>]) -> Ring {
    let mut ring: Ring = coords
        .iter()
        .filter(|c| c.len() >= 2)
        .map(|c| DVec2::new(c[0], c[1]))
        .collect();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atlas(json: &str) -> Vec<Country> {
        parse_countries(json.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn parse_keeps_only_display_countries() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "France" },
                    "geometry": { "type": "Polygon", "coordinates": [[[0,45],[5,45],[5,50],[0,45]]] }
                },
                {
                    "type": "Feature",
                    "properties": { "name": "Lesotho" },
                    "geometry": { "type": "Polygon", "coordinates": [[[27,-30],[29,-30],[29,-28],[27,-30]]] }
                }
            ]
        }"#;
        let countries = atlas(json);
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name, "Lesotho");
        assert_eq!(countries[0].supplies, Some(2_430));
    }

    #[test]
    fn uppercase_name_key_is_accepted() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "NAME": "eSwatini" },
                    "geometry": { "type": "Polygon", "coordinates": [[[31,-27],[32,-27],[32,-26],[31,-27]]] }
                }
            ]
        }"#;
        let countries = atlas(json);
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name, "eSwatini");
    }

    #[test]
    fn multipolygon_rings_are_all_collected() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "Tanzania" },
                    "geometry": { "type": "MultiPolygon", "coordinates": [
                        [[[30,-8],[39,-8],[39,-1],[30,-1],[30,-8]]],
                        [[[39.1,-6.4],[39.6,-6.4],[39.6,-5.7],[39.1,-6.4]]]
                    ] }
                }
            ]
        }"#;
        let countries = atlas(json);
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].rings.len(), 2);
    }

    #[test]
    fn closed_rings_drop_the_repeated_tail_point() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "Malawi" },
                    "geometry": { "type": "Polygon", "coordinates": [[[33,-16],[35,-16],[35,-10],[33,-10],[33,-16]]] }
                }
            ]
        }"#;
        let countries = atlas(json);
        assert_eq!(countries[0].rings[0].len(), 4);
    }

    #[test]
    fn nameless_or_empty_features_are_skipped() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": { "type": "Polygon", "coordinates": [[[27,-30],[29,-30],[29,-28],[27,-30]]] }
                },
                {
                    "type": "Feature",
                    "properties": { "name": "Zambia" },
                    "geometry": null
                }
            ]
        }"#;
        assert!(atlas(json).is_empty());
    }

    #[test]
    fn non_feature_collection_is_an_error() {
        let json = r#"{ "type": "Point", "coordinates": [0, 0] }"#;
        assert!(parse_countries(json.as_bytes().to_vec()).is_err());
    }
}
