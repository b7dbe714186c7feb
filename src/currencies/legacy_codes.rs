use std::collections::HashMap;
use std::sync::OnceLock;

/// Obsolete ISO 4217 codes and the modern code each one is remapped to.
///
/// Kept as pure data so the table can be audited independently of the lookup
/// logic. Covers the pre-euro national currencies, post-Soviet and Balkan
/// redenominations, and a handful of unofficial codes (e.g. `YTL`) that still
/// show up in old transaction feeds.
pub const LEGACY_CODES: &[(&str, &str)] = &[
    // Pre-euro national currencies.
    ("ATS", "EUR"),
    ("BEF", "EUR"),
    ("CYP", "EUR"),
    ("DEM", "EUR"),
    ("EEK", "EUR"),
    ("ESP", "EUR"),
    ("FIM", "EUR"),
    ("FRF", "EUR"),
    ("GRD", "EUR"),
    ("HRK", "EUR"),
    ("IEP", "EUR"),
    ("ITL", "EUR"),
    ("LTL", "EUR"),
    ("LUF", "EUR"),
    ("LVL", "EUR"),
    ("MTL", "EUR"),
    ("NLG", "EUR"),
    ("PTE", "EUR"),
    ("SIT", "EUR"),
    ("SKK", "EUR"),
    // Redenominations and renames.
    ("AFA", "AFN"),
    ("AZM", "AZN"),
    ("BGL", "BGN"),
    ("BYB", "BYN"),
    ("BYR", "BYN"),
    ("CSD", "RSD"),
    ("GHC", "GHS"),
    ("MZM", "MZN"),
    ("PLZ", "PLN"),
    ("ROL", "RON"),
    ("RUR", "RUB"),
    ("SDD", "SDG"),
    ("SRG", "SRD"),
    ("TMM", "TMT"),
    ("TRL", "TRY"),
    ("UAK", "UAH"),
    ("VEB", "VES"),
    ("VEF", "VES"),
    ("YUM", "RSD"),
    ("ZMK", "ZMW"),
    // Unofficial "new Turkish lira" code seen in legacy feeds.
    ("YTL", "TRY"),
];

static LEGACY_TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn legacy_table() -> &'static HashMap<&'static str, &'static str> {
    LEGACY_TABLE.get_or_init(|| LEGACY_CODES.iter().copied().collect())
}

/// Returns the modern successor code for an obsolete code, if one exists.
pub fn successor_code(code: &str) -> Option<&'static str> {
    legacy_table().get(code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaps_known_legacy_codes() {
        assert_eq!(successor_code("DEM"), Some("EUR"));
        assert_eq!(successor_code("YTL"), Some("TRY"));
        assert_eq!(successor_code("RUR"), Some("RUB"));
    }

    #[test]
    fn leaves_current_codes_alone() {
        assert_eq!(successor_code("USD"), None);
        assert_eq!(successor_code("EUR"), None);
    }

    #[test]
    fn table_has_no_duplicate_entries() {
        assert_eq!(legacy_table().len(), LEGACY_CODES.len());
    }
}
