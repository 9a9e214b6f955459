//! Keyword tables mapping bulletin titles to Adobe products and URL paths.
//!
//! Two tables are kept:
//!
//! | Table | Used for | Matching |
//! |-------|----------|----------|
//! | [`PRODUCT_KEYWORDS`] | `products` field | every matching keyword contributes |
//! | [`PATH_KEYWORDS`] | `/security/products/<segment>/` in the URL | first match wins |
//!
//! The tables are maintained independently and do not agree on every
//! keyword: `aem` only selects a path, `creative cloud` only names a
//! product. A title can therefore list real products and still link under
//! `other`.

use itertools::Itertools;
use tracing::debug;

/// Product name used when no keyword matches.
pub const FALLBACK_PRODUCT: &str = "Adobe Product";

/// Path segment used when no keyword matches.
pub const FALLBACK_PATH: &str = "other";

/// Lowercase keyword → product names it implies.
pub const PRODUCT_KEYWORDS: &[(&str, &[&str])] = &[
    ("acrobat", &["Adobe Acrobat", "Adobe Acrobat Reader"]),
    ("photoshop", &["Adobe Photoshop"]),
    ("after effects", &["Adobe After Effects"]),
    ("illustrator", &["Adobe Illustrator"]),
    ("premiere", &["Adobe Premiere Pro"]),
    ("lightroom", &["Adobe Lightroom"]),
    ("indesign", &["Adobe InDesign"]),
    ("dreamweaver", &["Adobe Dreamweaver"]),
    ("animate", &["Adobe Animate"]),
    ("audition", &["Adobe Audition"]),
    ("bridge", &["Adobe Bridge"]),
    ("dimension", &["Adobe Dimension"]),
    ("experience manager", &["Adobe Experience Manager"]),
    ("commerce", &["Adobe Commerce"]),
    ("magento", &["Adobe Commerce"]),
    ("coldfusion", &["Adobe ColdFusion"]),
    ("campaign", &["Adobe Campaign"]),
    ("substance", &["Adobe Substance 3D"]),
    ("creative cloud", &["Adobe Creative Cloud"]),
    ("framemaker", &["Adobe FrameMaker"]),
];

/// Ordered (keywords, path segment) pairs; the first entry with any
/// matching keyword decides the segment.
pub const PATH_KEYWORDS: &[(&[&str], &str)] = &[
    (&["acrobat"], "acrobat"),
    (&["photoshop"], "photoshop"),
    (&["after effects"], "after-effects"),
    (&["illustrator"], "illustrator"),
    (&["premiere"], "premiere"),
    (&["lightroom"], "lightroom"),
    (&["indesign"], "indesign"),
    (&["dreamweaver"], "dreamweaver"),
    (&["animate"], "animate"),
    (&["audition"], "audition"),
    (&["bridge"], "bridge"),
    (&["dimension"], "dimension"),
    (&["experience manager", "aem"], "experience-manager"),
    (&["commerce", "magento"], "commerce"),
    (&["coldfusion"], "coldfusion"),
    (&["campaign"], "campaign"),
    (&["substance"], "substance"),
    (&["framemaker"], "framemaker"),
];

/// Infer the affected products from a bulletin title.
///
/// Matching is a case-insensitive substring test. Every matching keyword
/// adds its products; duplicates are dropped. Callers should treat the
/// result as a set. Returns `["Adobe Product"]` when nothing matches.
pub fn infer_products(title: &str) -> Vec<String> {
    let title_lower = title.to_lowercase();

    let products: Vec<String> = PRODUCT_KEYWORDS
        .iter()
        .filter(|(keyword, _)| title_lower.contains(keyword))
        .flat_map(|(_, names)| names.iter())
        .unique()
        .map(|name| name.to_string())
        .collect();

    if products.is_empty() {
        debug!(%title, "No product keyword matched");
        return vec![FALLBACK_PRODUCT.to_string()];
    }
    products
}

/// Infer the `/security/products/<segment>/` path segment from a title.
pub fn infer_product_path(title: &str) -> &'static str {
    let title_lower = title.to_lowercase();

    PATH_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| title_lower.contains(k)))
        .map(|(_, segment)| *segment)
        .unwrap_or(FALLBACK_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photoshop_title() {
        let title = "Security update available for Adobe Photoshop";
        assert_eq!(infer_products(title), vec!["Adobe Photoshop"]);
        assert_eq!(infer_product_path(title), "photoshop");
    }

    #[test]
    fn test_unknown_title_falls_back() {
        let title = "Security update available for Adobe Widget Studio";
        assert_eq!(infer_products(title), vec!["Adobe Product"]);
        assert_eq!(infer_product_path(title), "other");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            infer_products("ACROBAT READER"),
            vec!["Adobe Acrobat", "Adobe Acrobat Reader"]
        );
        assert_eq!(infer_product_path("ACROBAT READER"), "acrobat");
    }

    #[test]
    fn test_commerce_and_magento_deduplicated() {
        let products =
            infer_products("Security update available for Adobe Commerce and Magento Open Source");
        assert_eq!(products, vec!["Adobe Commerce"]);
        assert_eq!(infer_product_path("Magento Open Source"), "commerce");
    }

    #[test]
    fn test_multiple_keywords_accumulate() {
        let mut products =
            infer_products("Security updates for Adobe Illustrator and Adobe Bridge");
        products.sort();
        assert_eq!(products, vec!["Adobe Bridge", "Adobe Illustrator"]);
    }

    #[test]
    fn test_path_takes_first_table_entry() {
        // "acrobat" precedes "photoshop" in the path table.
        assert_eq!(infer_product_path("Photoshop and Acrobat"), "acrobat");
    }

    #[test]
    fn test_tables_diverge_on_aem() {
        let title = "Security update available for AEM Forms";
        assert_eq!(infer_product_path(title), "experience-manager");
        assert_eq!(infer_products(title), vec!["Adobe Product"]);
    }

    #[test]
    fn test_tables_diverge_on_creative_cloud() {
        let title = "Security update available for Creative Cloud Desktop Application";
        assert_eq!(infer_products(title), vec!["Adobe Creative Cloud"]);
        assert_eq!(infer_product_path(title), "other");
    }
}
