use glam::DVec2;
use ratatui::style::Color;
use rayon::prelude::*;

use crate::braille::BrailleCanvas;
use crate::content;
use crate::fmt;
use crate::map::geometry::{self, Ring};
use crate::map::projection::Viewport;
use crate::theme;

/// One displayable country: geographic rings plus its supply record.
pub struct Country {
    pub name: String,
    /// Lon/lat rings across all of the country's polygons. Outer rings and
    /// holes are not distinguished; fill and hit tests are even-odd.
    pub rings: Vec<Ring>,
    pub supplies: Option<u32>,
    bbox: (DVec2, DVec2),
}

impl Country {
    /// Returns `None` for a feature with no usable geometry.
    pub fn new(name: String, rings: Vec<Ring>) -> Option<Self> {
        let bbox = geometry::rings_bbox(&rings)?;
        let supplies = content::supplies_for(&name);
        Some(Self {
            name,
            rings,
            supplies,
            bbox,
        })
    }

    fn bbox_area(&self) -> f64 {
        let (min, max) = self.bbox;
        (max.x - min.x) * (max.y - min.y)
    }

    fn bbox_contains(&self, p: DVec2) -> bool {
        let (min, max) = self.bbox;
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// Choropleth fill: the supply ramp for served countries, neutral grey
    /// otherwise. Hover never changes a served fill, only the grey one.
    pub fn fill_color(&self, hovered: bool) -> Color {
        match self.supplies {
            Some(count) => theme::supply_color(count),
            None => theme::no_data_color(hovered),
        }
    }
}

/// Rasterized map layers, ready to blit bottom-up: fills in paint order,
/// then shared borders, then the hover outline.
pub struct MapLayers {
    pub fills: Vec<(BrailleCanvas, Color)>,
    pub borders: BrailleCanvas,
    pub highlight: Option<(BrailleCanvas, Color)>,
}

/// The impact choropleth: a fixed set of Southern African countries,
/// hit-testable in geographic space and rasterizable at any viewport.
pub struct ImpactMap {
    /// Sorted by bounding-box area, smallest first, so enclave countries
    /// win hit tests against the countries that surround them.
    countries: Vec<Country>,
}

impl ImpactMap {
    pub fn new(mut countries: Vec<Country>) -> Self {
        countries.retain(|c| content::is_display_country(&c.name));
        countries.sort_by(|a, b| a.bbox_area().total_cmp(&b.bbox_area()));
        Self { countries }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Index of the country under a geographic point, if any.
    pub fn hit_test(&self, lon: f64, lat: f64) -> Option<usize> {
        let p = DVec2::new(lon, lat);
        self.countries
            .iter()
            .position(|c| c.bbox_contains(p) && geometry::point_in_rings(p, &c.rings))
    }

    /// Hover tooltip line for a country index from `hit_test`.
    pub fn tooltip(&self, idx: usize) -> String {
        let country = &self.countries[idx];
        match country.supplies {
            Some(count) => format!(
                "{}: {} supplies",
                country.name,
                fmt::group_thousands(u64::from(count))
            ),
            None => format!("{}: No supplies yet", country.name),
        }
    }

    /// Rasterize every visible country for the given viewport. Countries
    /// rasterize in parallel onto their own canvases; fills are returned
    /// largest-first so smaller neighbours paint over shared edges.
    pub fn rasterize(&self, viewport: &Viewport, hovered: Option<usize>) -> MapLayers {
        let cells_w = viewport.width / 2;
        let cells_h = viewport.height / 4;

        let rendered: Vec<Option<(Vec<Ring>, BrailleCanvas)>> = self
            .countries
            .par_iter()
            .map(|country| {
                let pixel_rings = project_country(country, viewport)?;
                let mut canvas = BrailleCanvas::new(cells_w, cells_h);
                geometry::fill_rings(&mut canvas, &pixel_rings);
                Some((pixel_rings, canvas))
            })
            .collect();

        let mut fills = Vec::with_capacity(self.countries.len());
        let mut borders = BrailleCanvas::new(cells_w, cells_h);
        let mut highlight = None;

        for (idx, entry) in rendered.into_iter().enumerate().rev() {
            let Some((pixel_rings, canvas)) = entry else {
                continue;
            };
            let is_hovered = hovered == Some(idx);
            fills.push((canvas, self.countries[idx].fill_color(is_hovered)));
            for ring in &pixel_rings {
                geometry::draw_ring(&mut borders, ring);
            }
            if is_hovered {
                let mut outline = BrailleCanvas::new(cells_w, cells_h);
                for ring in &pixel_rings {
                    geometry::draw_ring(&mut outline, ring);
                }
                highlight = Some((outline, theme::rgb(theme::BRAND_BLUE)));
            }
        }

        MapLayers {
            fills,
            borders,
            highlight,
        }
    }
}

/// Project a country's rings to pixel space, or `None` when its bounding
/// box misses the canvas entirely.
fn project_country(country: &Country, viewport: &Viewport) -> Option<Vec<Ring>> {
    let (min, max) = country.bbox;
    let (left, top) = viewport.project(min.x, max.y);
    let (right, bottom) = viewport.project(max.x, min.y);
    if right < 0.0
        || left >= viewport.width as f64
        || bottom < 0.0
        || top >= viewport.height as f64
    {
        return None;
    }
    Some(
        country
            .rings
            .iter()
            .map(|ring| {
                ring.iter()
                    .map(|p| {
                        let (x, y) = viewport.project(p.x, p.y);
                        DVec2::new(x, y)
                    })
                    .collect()
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin;

    fn map() -> ImpactMap {
        ImpactMap::new(builtin::southern_africa())
    }

    fn find(map: &ImpactMap, name: &str) -> usize {
        map.countries()
            .iter()
            .position(|c| c.name == name)
            .unwrap()
    }

    #[test]
    fn every_country_is_on_the_allow_list() {
        let map = map();
        assert_eq!(map.countries().len(), 13);
        assert!(map
            .countries()
            .iter()
            .all(|c| content::is_display_country(&c.name)));
    }

    #[test]
    fn unlisted_features_are_dropped() {
        let ring = vec![
            DVec2::new(0.0, 45.0),
            DVec2::new(5.0, 45.0),
            DVec2::new(5.0, 50.0),
            DVec2::new(0.0, 50.0),
        ];
        let countries = vec![
            Country::new("France".into(), vec![ring.clone()]).unwrap(),
            Country::new("Lesotho".into(), vec![ring]).unwrap(),
        ];
        let map = ImpactMap::new(countries);
        assert_eq!(map.countries().len(), 1);
        assert_eq!(map.countries()[0].name, "Lesotho");
    }

    #[test]
    fn enclave_beats_the_surrounding_country() {
        let map = map();
        let lesotho = map.hit_test(28.2, -29.6).unwrap();
        assert_eq!(map.countries()[lesotho].name, "Lesotho");
        let sa = map.hit_test(22.0, -32.0).unwrap();
        assert_eq!(map.countries()[sa].name, "South Africa");
        assert!(map.hit_test(0.0, 0.0).is_none());
    }

    #[test]
    fn tooltips_show_grouped_counts_or_the_no_data_line() {
        let map = map();
        assert_eq!(
            map.tooltip(find(&map, "South Africa")),
            "South Africa: 12,543 supplies"
        );
        assert_eq!(map.tooltip(find(&map, "Angola")), "Angola: No supplies yet");
    }

    #[test]
    fn range_extremes_fill_with_the_exact_brand_colors() {
        let map = map();
        let sa = &map.countries()[find(&map, "South Africa")];
        let lesotho = &map.countries()[find(&map, "Lesotho")];
        assert_eq!(sa.fill_color(false), theme::rgb(theme::BRAND_NAVY));
        assert_eq!(lesotho.fill_color(false), theme::rgb(theme::BRAND_GREEN));
    }

    #[test]
    fn grey_fill_darkens_only_on_hover() {
        let map = map();
        let angola = &map.countries()[find(&map, "Angola")];
        assert_eq!(angola.fill_color(false), theme::rgb(theme::NO_DATA_GREY));
        assert_eq!(
            angola.fill_color(true),
            theme::rgb(theme::NO_DATA_GREY_HOVER)
        );
    }

    #[test]
    fn rasterize_produces_fills_and_borders() {
        let map = map();
        let viewport = Viewport::southern_africa(200, 96);
        let layers = map.rasterize(&viewport, None);
        assert_eq!(layers.fills.len(), 13);
        assert!(layers.borders.iter_set_cells().next().is_some());
        assert!(layers.highlight.is_none());
    }

    #[test]
    fn hovered_country_gets_an_outline_layer() {
        let map = map();
        let viewport = Viewport::southern_africa(200, 96);
        let idx = find(&map, "Botswana");
        let layers = map.rasterize(&viewport, Some(idx));
        let (outline, color) = layers.highlight.expect("hover outline");
        assert_eq!(color, theme::rgb(theme::BRAND_BLUE));
        assert!(outline.iter_set_cells().next().is_some());
    }

    #[test]
    fn faraway_viewport_culls_everything() {
        let map = map();
        let mut viewport = Viewport::southern_africa(200, 96);
        viewport.center_lon = -120.0;
        viewport.center_lat = 45.0;
        let layers = map.rasterize(&viewport, None);
        assert!(layers.fills.is_empty());
        assert!(layers.borders.iter_set_cells().next().is_none());
    }
}
