//! Brand reputation lookups used by the ownership and longevity factors.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceTier {
    Wide,
    Good,
    Moderate,
    Limited,
}

const WIDE: &[&str] = &["honda", "hero", "bajaj", "tvs", "yamaha", "suzuki"];
const GOOD: &[&str] = &["royal enfield", "ktm", "kawasaki", "jawa", "yezdi", "husqvarna"];
const MODERATE: &[&str] = &[
    "triumph",
    "harley davidson",
    "bmw",
    "bmw motorrad",
    "benelli",
    "aprilia",
    "cfmoto",
    "keeway",
    "hyosung",
];

const DURABLE: &[&str] = &[
    "honda",
    "yamaha",
    "suzuki",
    "royal enfield",
    "tvs",
    "bajaj",
    "hero",
    "kawasaki",
];

/// Lowercases and collapses punctuation so "Harley-Davidson" and
/// "harley davidson" match the same entry.
pub fn canonical_brand(brand: &str) -> String {
    brand
        .to_ascii_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Service-network reputation. Unrecognised brands fall in the limited tier.
pub fn service_tier(brand: Option<&str>) -> ServiceTier {
    let Some(brand) = brand.map(canonical_brand) else {
        return ServiceTier::Limited;
    };
    if WIDE.contains(&brand.as_str()) {
        ServiceTier::Wide
    } else if GOOD.contains(&brand.as_str()) {
        ServiceTier::Good
    } else if MODERATE.contains(&brand.as_str()) {
        ServiceTier::Moderate
    } else {
        ServiceTier::Limited
    }
}

pub fn has_durability_reputation(brand: Option<&str>) -> bool {
    brand
        .map(canonical_brand)
        .is_some_and(|brand| DURABLE.contains(&brand.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_matching_ignores_case_and_punctuation() {
        assert_eq!(canonical_brand("Harley-Davidson"), "harley davidson");
        assert_eq!(service_tier(Some("ROYAL  Enfield")), ServiceTier::Good);
        assert_eq!(service_tier(Some("Harley-Davidson")), ServiceTier::Moderate);
    }

    #[test]
    fn unknown_or_missing_brands_are_limited() {
        assert_eq!(service_tier(Some("Ducati")), ServiceTier::Limited);
        assert_eq!(service_tier(Some("Unknown")), ServiceTier::Limited);
        assert_eq!(service_tier(None), ServiceTier::Limited);
        assert!(!has_durability_reputation(None));
        assert!(has_durability_reputation(Some("TVS")));
    }
}
