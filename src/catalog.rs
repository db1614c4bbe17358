//! Static knowledge-card catalog browsed by category.

use crate::chat_message::ResponseCard;
use crate::rules::{insat_3d_card, megha_tropiques_card, oceansat_2_card};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Missions,
    WeatherProducts,
    Maps,
    Docs,
    Files,
    Faqs,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Missions,
        Category::WeatherProducts,
        Category::Maps,
        Category::Docs,
        Category::Files,
        Category::Faqs,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Missions => "missions",
            Category::WeatherProducts => "weather",
            Category::Maps => "maps",
            Category::Docs => "docs",
            Category::Files => "files",
            Category::Faqs => "faqs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Missions => "Missions",
            Category::WeatherProducts => "Weather Products",
            Category::Maps => "Maps",
            Category::Docs => "Docs",
            Category::Files => "Documents",
            Category::Faqs => "FAQs",
        }
    }

    /// Cycles none -> missions -> ... -> faqs -> none.
    pub fn cycle(current: Option<Category>) -> Option<Category> {
        match current {
            None => Some(Category::ALL[0]),
            Some(category) => {
                let idx = Category::ALL.iter().position(|c| *c == category).unwrap_or(0);
                Category::ALL.get(idx + 1).copied()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSection {
    Cards(Vec<ResponseCard>),
    Faqs(&'static [Faq]),
}

impl CatalogSection {
    pub fn len(&self) -> usize {
        match self {
            CatalogSection::Cards(cards) => cards.len(),
            CatalogSection::Faqs(faqs) => faqs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static FAQS: [Faq; 3] = [
    Faq {
        question: "How do I download satellite data?",
        answer: "Register on MOSDAC portal, browse datasets, and use the download links provided.",
        category: "Data Access",
    },
    Faq {
        question: "What formats are available?",
        answer: "We provide data in NetCDF, HDF5, GeoTIFF, and other standard formats.",
        category: "Data Formats",
    },
    Faq {
        question: "Is there an API available?",
        answer: "Yes, we provide REST APIs for programmatic access to our datasets.",
        category: "Technical",
    },
];

fn dataset(title: &str, kind: &str, description: &str, format: &str, link: &str) -> ResponseCard {
    ResponseCard::document(title)
        .description(format!("{} ({})", description, kind))
        .file_type(format)
        .download_link(link)
}

/// A downloadable document. Only some have a preview.
fn resource(
    title: &str,
    file_type: &str,
    size: &str,
    description: &str,
    download: &str,
    preview: Option<&str>,
) -> ResponseCard {
    let card = ResponseCard::document(title)
        .description(description)
        .file_type(file_type)
        .size(size)
        .download_link(download);
    match preview {
        Some(url) => card.link("Preview", url),
        None => card,
    }
}

pub fn section(category: Category) -> CatalogSection {
    match category {
        Category::Missions => CatalogSection::Cards(vec![
            insat_3d_card(),
            megha_tropiques_card(),
            oceansat_2_card(),
        ]),
        Category::WeatherProducts => CatalogSection::Cards(vec![
            dataset(
                "Rainfall Products",
                "Weather Data",
                "Real-time and historical rainfall data from multiple satellites",
                "NetCDF, HDF5",
                "#rainfall-data",
            ),
            dataset(
                "Temperature Analysis",
                "Weather Data",
                "Surface and atmospheric temperature measurements",
                "GRIB2, NetCDF",
                "#temp-data",
            ),
        ]),
        Category::Maps => CatalogSection::Cards(vec![
            dataset(
                "Land Use Maps",
                "Geospatial",
                "High-resolution land use and land cover maps",
                "GeoTIFF, Shapefile",
                "#landuse-maps",
            ),
            dataset(
                "Vegetation Index",
                "Geospatial",
                "NDVI and other vegetation indices",
                "GeoTIFF, NetCDF",
                "#vegetation-maps",
            ),
        ]),
        Category::Docs => CatalogSection::Cards(vec![
            dataset(
                "User Manual - INSAT Data",
                "Documentation",
                "Complete guide for accessing and using INSAT satellite data",
                "PDF",
                "#insat-manual",
            ),
            dataset(
                "API Documentation",
                "Technical Guide",
                "REST API documentation for data access",
                "PDF, HTML",
                "#api-docs",
            ),
        ]),
        Category::Files => CatalogSection::Cards(vec![
            resource(
                "Satellite Rainfall Algorithm Documentation",
                "PDF",
                "2.4 MB",
                "Comprehensive guide to satellite-based rainfall estimation algorithms and methodologies used in ISRO missions.",
                "#pdf-download-1",
                Some("#pdf-preview-1"),
            ),
            resource(
                "MOSDAC Data User Manual",
                "PDF",
                "8.1 MB",
                "Complete user manual for accessing, downloading, and processing meteorological and oceanographic data.",
                "#pdf-download-2",
                Some("#pdf-preview-2"),
            ),
            resource(
                "Mission Parameters Spreadsheet",
                "XLSX",
                "1.2 MB",
                "Detailed specifications and parameters for all active ISRO Earth observation missions.",
                "#xlsx-download-1",
                None,
            ),
            resource(
                "Data Product Catalog",
                "DOCX",
                "3.8 MB",
                "Catalog of all available data products with formats, processing levels, and access information.",
                "#docx-download-1",
                None,
            ),
            ResponseCard::generic("Browse All Documents").link("All documents", "#all-documents"),
        ]),
        Category::Faqs => CatalogSection::Faqs(&FAQS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_category_then_closes() {
        let mut current = None;
        let mut seen = Vec::new();
        loop {
            current = Category::cycle(current);
            match current {
                Some(category) => seen.push(category),
                None => break,
            }
        }
        assert_eq!(seen, Category::ALL.to_vec());
    }

    #[test]
    fn test_every_category_has_entries() {
        for category in Category::ALL {
            assert!(!section(category).is_empty(), "{}", category.key());
        }
    }

    #[test]
    fn test_files_carry_type_size_and_optional_preview() {
        let cards = match section(Category::Files) {
            CatalogSection::Cards(cards) => cards,
            CatalogSection::Faqs(_) => panic!("files should be cards"),
        };
        let documents: Vec<&ResponseCard> =
            cards.iter().filter(|c| c.kind_name() == "document").collect();
        assert_eq!(documents.len(), 4);
        assert_eq!(documents[1].title, "MOSDAC Data User Manual");
        assert_eq!(documents[1].file_type_label(), Some("PDF"));
        assert_eq!(documents[1].file_size(), Some("8.1 MB"));
        assert_eq!(documents[1].links[0].url, "#pdf-preview-2");
        assert_eq!(documents[3].file_type_label(), Some("DOCX"));
        assert!(documents[3].links.is_empty());
    }

    #[test]
    fn test_missions_share_chat_cards() {
        match section(Category::Missions) {
            CatalogSection::Cards(cards) => {
                assert_eq!(cards[0], insat_3d_card());
                assert_eq!(cards[0].launch(), Some("July 26, 2013"));
            }
            CatalogSection::Faqs(_) => panic!("missions should be cards"),
        }
    }
}
