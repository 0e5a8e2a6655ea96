//! Fixed page geometry. The whole site renders into one tall offscreen
//! buffer; every section sits at a static row offset, so anchor jumps and
//! the scroll window never need to measure content.

/// Rows reserved for the navigation bar at the top of the screen.
pub const NAV_ROWS: u16 = 2;
/// Rows reserved for the status line at the bottom.
pub const STATUS_ROWS: u16 = 1;
/// Braille canvas rows inside the impact map's bordered box.
pub const MAP_CANVAS_ROWS: u16 = 24;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Hero,
    Metrics,
    About,
    Stories,
    ImpactMap,
    HowItWorks,
    GetInvolved,
    Donate,
    Contact,
    Footer,
}

/// Page order, top to bottom.
pub const SECTIONS: [Section; 10] = [
    Section::Hero,
    Section::Metrics,
    Section::About,
    Section::Stories,
    Section::ImpactMap,
    Section::HowItWorks,
    Section::GetInvolved,
    Section::Donate,
    Section::Contact,
    Section::Footer,
];

impl Section {
    /// Height of the section in page rows.
    pub fn height(self) -> u16 {
        match self {
            Section::Hero => 12,
            Section::Metrics => 9,
            Section::About => 17,
            Section::Stories => 13,
            Section::ImpactMap => 32,
            Section::HowItWorks => 11,
            Section::GetInvolved => 21,
            Section::Donate => 23,
            Section::Contact => 19,
            Section::Footer => 12,
        }
    }

    /// Display name, used by the status bar.
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Metrics => "Our Impact",
            Section::About => "About",
            Section::Stories => "Stories",
            Section::ImpactMap => "Impact Map",
            Section::HowItWorks => "How It Works",
            Section::GetInvolved => "Get Involved",
            Section::Donate => "Donate",
            Section::Contact => "Contact",
            Section::Footer => "Footer",
        }
    }
}

/// Navigation links in display order. The donate button is separate, and the
/// footer's quick links reuse the first four entries.
pub const NAV_LINKS: [(&str, Section); 5] = [
    ("Home", Section::Hero),
    ("About", Section::About),
    ("Impact", Section::Stories),
    ("Get Involved", Section::GetInvolved),
    ("Contact", Section::Contact),
];

pub fn page_height() -> u16 {
    SECTIONS.iter().map(|s| s.height()).sum()
}

/// Page row where a section starts.
pub fn offset_of(section: Section) -> u16 {
    let mut row = 0;
    for s in SECTIONS {
        if s == section {
            break;
        }
        row += s.height();
    }
    row
}

/// Section covering a page row. Rows past the end belong to the footer.
pub fn section_at(row: u16) -> Section {
    let mut bottom = 0;
    for s in SECTIONS {
        bottom += s.height();
        if row < bottom {
            return s;
        }
    }
    Section::Footer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_partition_the_page() {
        let mut expected = 0;
        for s in SECTIONS {
            assert_eq!(offset_of(s), expected);
            expected += s.height();
        }
        assert_eq!(page_height(), expected);
    }

    #[test]
    fn every_row_maps_back_to_its_section() {
        for s in SECTIONS {
            assert_eq!(section_at(offset_of(s)), s);
            assert_eq!(section_at(offset_of(s) + s.height() - 1), s);
        }
    }

    #[test]
    fn rows_past_the_end_are_footer() {
        assert_eq!(section_at(page_height()), Section::Footer);
        assert_eq!(section_at(u16::MAX), Section::Footer);
    }

    #[test]
    fn nav_links_target_real_sections() {
        for (label, section) in NAV_LINKS {
            assert!(!label.is_empty());
            assert!(SECTIONS.contains(&section));
        }
    }
}
