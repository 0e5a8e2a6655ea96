//! Hand-traced fallback outlines for the thirteen display countries,
//! used when no boundary atlas can be read or fetched. Coarse on purpose,
//! but topologically honest: Lesotho is a hole ring inside South Africa,
//! and the eSwatini pocket opens east toward Mozambique.

use glam::DVec2;

use crate::map::geometry::Ring;
use crate::map::Country;

const SOUTH_AFRICA: &[(f64, f64)] = &[
    (16.45, -28.6), (19.0, -28.5), (20.0, -28.2), (20.0, -26.9),
    (22.0, -26.2), (23.0, -25.3), (25.5, -25.7), (26.9, -24.6),
    (27.5, -23.4), (29.4, -22.2), (31.3, -22.4), (32.0, -25.6),
    (31.9, -25.8), (30.8, -26.3), (30.9, -27.3), (32.1, -27.2),
    (32.4, -28.5), (31.0, -30.0), (30.0, -31.1), (28.5, -32.7),
    (27.0, -33.6), (25.6, -34.0), (23.5, -34.1), (21.5, -34.4),
    (20.0, -34.8), (18.8, -34.3), (18.3, -33.9), (17.9, -32.7),
    (18.3, -31.6), (17.3, -30.0),
];

/// Shared by the Lesotho outline and the South Africa hole so the enclave
/// tiles exactly with no sliver of double-fill.
const LESOTHO: &[(f64, f64)] = &[
    (27.0, -28.6), (28.6, -28.6), (29.4, -29.3), (29.2, -30.2),
    (28.0, -30.6), (27.0, -29.6),
];

const ESWATINI: &[(f64, f64)] = &[
    (31.9, -25.85), (30.85, -26.3), (30.95, -27.25), (32.05, -27.15),
];

const NAMIBIA: &[(f64, f64)] = &[
    (16.45, -28.6), (15.1, -26.6), (14.5, -24.0), (14.4, -22.7),
    (13.0, -20.3), (11.8, -18.2), (11.75, -17.25), (13.0, -17.0),
    (18.0, -17.4), (20.6, -17.9), (23.3, -17.6), (25.3, -17.8),
    (24.3, -18.0), (23.3, -18.2), (21.0, -18.3), (21.0, -22.0),
    (20.0, -22.0), (20.0, -28.2), (19.0, -28.5),
];

const BOTSWANA: &[(f64, f64)] = &[
    (20.0, -26.9), (20.0, -22.0), (21.0, -22.0), (21.0, -18.3),
    (23.3, -18.2), (24.3, -18.0), (25.3, -17.8), (25.9, -18.6),
    (26.2, -19.5), (27.7, -20.5), (29.4, -22.2), (27.5, -23.4),
    (26.9, -24.6), (25.5, -25.7), (23.0, -25.3), (22.0, -26.2),
];

const ZIMBABWE: &[(f64, f64)] = &[
    (25.3, -17.8), (26.2, -17.9), (27.0, -16.6), (28.8, -16.0),
    (30.4, -15.6), (31.3, -16.0), (32.9, -16.7), (32.5, -18.8),
    (33.0, -20.0), (32.4, -21.3), (31.3, -22.4), (29.4, -22.2),
    (27.7, -20.5), (26.2, -19.5), (25.9, -18.6),
];

const ZAMBIA: &[(f64, f64)] = &[
    (22.0, -16.2), (23.3, -17.6), (25.3, -17.8), (26.2, -17.9),
    (27.0, -16.6), (28.8, -16.0), (30.4, -15.6), (32.0, -14.3),
    (33.2, -14.0), (32.7, -13.6), (33.3, -12.3), (33.2, -10.9),
    (32.9, -9.4), (31.9, -9.0), (30.8, -8.3), (28.9, -8.5),
    (28.4, -9.2), (28.6, -10.5), (28.6, -11.8), (27.2, -12.3),
    (26.0, -11.9), (25.3, -11.2), (24.4, -11.3), (23.9, -13.0),
    (22.0, -13.0),
];

const ANGOLA: &[(f64, f64)] = &[
    (11.75, -17.25), (12.0, -15.0), (12.5, -13.5), (13.0, -11.0),
    (13.4, -8.8), (12.3, -6.1), (16.0, -5.9), (19.5, -7.0),
    (21.8, -7.3), (22.2, -10.5), (24.0, -11.3), (23.9, -13.0),
    (22.0, -13.0), (22.0, -16.2), (23.3, -17.6), (20.6, -17.9),
    (18.0, -17.4), (13.0, -17.0),
];

const DEM_REP_CONGO: &[(f64, f64)] = &[
    (12.3, -5.7), (16.0, -5.8), (19.5, -6.9), (21.8, -7.2),
    (22.2, -10.4), (24.0, -11.3), (25.3, -11.2), (26.0, -11.9),
    (27.2, -12.3), (28.6, -11.8), (28.6, -10.5), (28.4, -9.2),
    (28.9, -8.5), (30.8, -8.3), (29.3, -5.9), (29.2, -3.3),
    (29.6, -1.4), (30.5, 0.8), (30.0, 4.0), (27.4, 5.2),
    (25.0, 5.3), (23.4, 4.6), (20.5, 4.4), (18.6, 3.5),
    (18.1, 2.3), (17.7, -0.5), (16.2, -1.7), (14.4, -4.3),
    (13.0, -4.8),
];

const MOZAMBIQUE: &[(f64, f64)] = &[
    (32.9, -26.8), (35.0, -24.0), (35.5, -22.1), (34.7, -20.5),
    (34.9, -19.9), (36.2, -18.9), (38.0, -17.1), (40.5, -15.5),
    (40.5, -12.5), (40.4, -10.5), (38.5, -11.3), (37.0, -11.6),
    (34.6, -11.6), (34.9, -13.5), (35.9, -15.0), (35.8, -16.1),
    (35.3, -17.1), (34.3, -16.2), (34.4, -15.5), (34.5, -14.6),
    (33.7, -14.5), (33.2, -14.0), (32.0, -14.3), (30.4, -15.6),
    (31.3, -16.0), (32.9, -16.7), (32.5, -18.8), (33.0, -20.0),
    (32.4, -21.3), (31.3, -22.4), (32.0, -25.6), (32.1, -26.9),
];

const MALAWI: &[(f64, f64)] = &[
    (32.9, -9.4), (34.0, -9.5), (34.6, -11.6), (34.9, -13.5),
    (35.9, -15.0), (35.8, -16.1), (35.3, -17.1), (34.3, -16.2),
    (34.4, -15.5), (34.5, -14.6), (33.7, -14.5), (33.2, -14.0),
    (32.7, -13.6), (33.3, -12.3), (33.2, -10.9),
];

const TANZANIA: &[(f64, f64)] = &[
    (30.8, -8.3), (31.9, -9.0), (32.9, -9.4), (34.0, -9.5),
    (34.6, -11.6), (37.0, -11.6), (38.5, -11.3), (40.4, -10.5),
    (39.4, -8.9), (39.5, -6.5), (39.2, -4.7), (37.6, -3.4),
    (33.9, -1.0), (30.7, -1.0), (30.5, -2.4), (29.6, -4.5),
    (30.2, -6.8),
];

const MADAGASCAR: &[(f64, f64)] = &[
    (45.2, -25.6), (47.1, -24.0), (48.5, -21.5), (49.5, -19.0),
    (50.2, -16.0), (50.5, -15.4), (49.9, -13.1), (49.3, -12.1),
    (48.8, -13.1), (47.9, -13.6), (47.5, -14.7), (46.3, -15.8),
    (44.5, -16.2), (44.0, -17.0), (43.9, -21.3), (43.7, -23.5),
    (44.3, -24.9),
];

fn ring(points: &[(f64, f64)]) -> Ring {
    points
        .iter()
        .map(|&(lon, lat)| DVec2::new(lon, lat))
        .collect()
}

fn push(countries: &mut Vec<Country>, name: &str, rings: Vec<Ring>) {
    if let Some(country) = Country::new(name.to_string(), rings) {
        countries.push(country);
    }
}

/// All thirteen display countries with rough boundary rings.
pub fn southern_africa() -> Vec<Country> {
    let mut countries = Vec::with_capacity(13);
    push(
        &mut countries,
        "South Africa",
        vec![ring(SOUTH_AFRICA), ring(LESOTHO)],
    );
    push(&mut countries, "Lesotho", vec![ring(LESOTHO)]);
    push(&mut countries, "eSwatini", vec![ring(ESWATINI)]);
    push(&mut countries, "Namibia", vec![ring(NAMIBIA)]);
    push(&mut countries, "Botswana", vec![ring(BOTSWANA)]);
    push(&mut countries, "Zimbabwe", vec![ring(ZIMBABWE)]);
    push(&mut countries, "Zambia", vec![ring(ZAMBIA)]);
    push(&mut countries, "Angola", vec![ring(ANGOLA)]);
    push(&mut countries, "Dem. Rep. Congo", vec![ring(DEM_REP_CONGO)]);
    push(&mut countries, "Mozambique", vec![ring(MOZAMBIQUE)]);
    push(&mut countries, "Malawi", vec![ring(MALAWI)]);
    push(&mut countries, "Tanzania", vec![ring(TANZANIA)]);
    push(&mut countries, "Madagascar", vec![ring(MADAGASCAR)]);
    countries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::map::geometry;

    #[test]
    fn thirteen_countries_all_on_the_display_list() {
        let countries = southern_africa();
        assert_eq!(countries.len(), 13);
        for country in &countries {
            assert!(
                content::is_display_country(&country.name),
                "unexpected country {}",
                country.name
            );
            assert!(country.rings.iter().all(|r| r.len() >= 3));
        }
    }

    #[test]
    fn lesotho_is_a_hole_in_south_africa() {
        let countries = southern_africa();
        let sa = countries.iter().find(|c| c.name == "South Africa").unwrap();
        assert!(geometry::point_in_rings(DVec2::new(22.0, -32.0), &sa.rings));
        assert!(!geometry::point_in_rings(DVec2::new(28.2, -29.6), &sa.rings));

        let lesotho = countries.iter().find(|c| c.name == "Lesotho").unwrap();
        assert!(geometry::point_in_rings(
            DVec2::new(28.2, -29.6),
            &lesotho.rings
        ));
    }

    #[test]
    fn eswatini_pocket_is_outside_south_africa() {
        let countries = southern_africa();
        let sa = countries.iter().find(|c| c.name == "South Africa").unwrap();
        assert!(!geometry::point_in_rings(DVec2::new(31.4, -26.6), &sa.rings));

        let eswatini = countries.iter().find(|c| c.name == "eSwatini").unwrap();
        assert!(geometry::point_in_rings(
            DVec2::new(31.4, -26.6),
            &eswatini.rings
        ));
    }

    #[test]
    fn served_countries_carry_their_supply_counts() {
        let countries = southern_africa();
        let supplies =
            |name: &str| countries.iter().find(|c| c.name == name).unwrap().supplies;
        assert_eq!(supplies("South Africa"), Some(12_543));
        assert_eq!(supplies("Namibia"), Some(3_124));
        assert_eq!(supplies("Angola"), None);
        assert_eq!(supplies("Madagascar"), None);
    }
}
