use crate::{api::Summary, pages::dashboard::table::two_decimals};

pub const CO2E_UNIT: &str = "kg CO2e";

pub fn format_co2e(value: f64) -> String {
    format!("{} {}", two_decimals(value), CO2E_UNIT)
}

pub fn format_population(value: i64) -> String {
    value.to_string()
}

/// Breakdown entries in key order, values with two decimals.
pub fn breakdown_rows(summary: &Summary) -> Vec<(String, String)> {
    summary
        .component_breakdown
        .iter()
        .map(|(category, value)| (category.clone(), two_decimals(*value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn formats_footprints_with_two_decimals_and_unit() {
        assert_eq!(format_co2e(1520.456), "1520.46 kg CO2e");
        assert_eq!(format_co2e(0.0), "0.00 kg CO2e");
        assert_eq!(format_co2e(10.125), "10.13 kg CO2e");
        assert_eq!(format_population(120), "120");
    }

    #[test]
    fn breakdown_is_sorted_by_category() {
        let summary = Summary {
            total_footprint: 0.0,
            total_population: 0,
            per_capita_footprint: 0.0,
            component_breakdown: BTreeMap::from([
                ("water".to_string(), 3.0),
                ("electric".to_string(), 12.345),
            ]),
        };
        assert_eq!(
            breakdown_rows(&summary),
            vec![
                ("electric".to_string(), "12.35".to_string()),
                ("water".to_string(), "3.00".to_string()),
            ]
        );
    }
}
