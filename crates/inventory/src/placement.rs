//! Category-grouped placement suggestions and the preferred-zone catalog.

use serde::{Deserialize, Serialize};

use crate::item::InventoryUnit;

/// Advice attached to every placement report.
pub const PLACEMENT_NOTE: &str = "Place high-usage items in easily accessible locations for efficiency.";

/// Unit names grouped under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub suggestions: Vec<CategorySuggestion>,
    pub note: String,
}

impl PlacementReport {
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Group unit names by category, keeping categories in first-seen order.
pub(crate) fn group_by_category<'a>(units: impl IntoIterator<Item = &'a InventoryUnit>) -> PlacementReport {
    let mut suggestions: Vec<CategorySuggestion> = Vec::new();

    for unit in units {
        match suggestions.iter_mut().find(|s| s.category == unit.category()) {
            Some(group) => group.items.push(unit.name().to_string()),
            None => suggestions.push(CategorySuggestion {
                category: unit.category().to_string(),
                items: vec![unit.name().to_string()],
            }),
        }
    }

    PlacementReport {
        suggestions,
        note: PLACEMENT_NOTE.to_string(),
    }
}

const CATALOG: &[(&str, &[&str])] = &[
    ("Food Packet", &["Crew_Quarters", "Storage_Bay"]),
    ("Oxygen Cylinder", &["Airlock", "Crew_Quarters", "Medical_Bay"]),
    ("First Aid Kit", &["Medical_Bay", "Crew_Quarters"]),
    ("Water Bottle", &["Crew_Quarters", "Storage_Bay"]),
    ("Space Suit", &["Storage_Bay", "Airlock"]),
    ("Tool Kit", &["Maintenance_Bay", "Storage_Bay"]),
    ("Radiation Shield", &["Storage_Bay", "Engineering_Bay"]),
    ("Emergency Beacon", &["Command_Center", "Cockpit"]),
    ("Battery Pack", &["Power_Bay", "External_Storage"]),
    ("Solar Panel", &["External_Storage", "Power_Bay"]),
    ("Navigation Module", &["Cockpit", "Command_Center"]),
    ("Communication Device", &["Command_Center", "Crew_Quarters"]),
    ("Research Samples", &["Lab", "Storage_Bay"]),
    ("Fire Extinguisher", &["Crew_Quarters", "Engineering_Bay"]),
    ("Thruster Fuel", &["Engine_Bay", "Storage_Bay"]),
    ("Microgravity Lab Kit", &["Lab", "Crew_Quarters"]),
    ("Pressure Regulator", &["Airlock", "Engineering_Bay"]),
    ("Cooling System", &["Engineering_Bay", "Power_Bay"]),
    ("Waste Management Kit", &["Sanitation_Bay", "Engineering_Bay"]),
    ("Asteroid Sample Container", &["Lab", "Storage_Bay"]),
    ("3D Printer", &["Engineering_Bay", "Lab"]),
    ("Laptop", &["Crew_Quarters", "Command_Center"]),
    ("Scientific Sensor", &["Lab", "Cockpit"]),
    ("Medical Scanner", &["Medical_Bay", "Lab"]),
    ("Vacuum Sealed Tools", &["Storage_Bay", "Maintenance_Bay"]),
    ("EV Suit Battery", &["Airlock", "Storage_Bay"]),
    ("Tether Reel", &["External_Storage", "Airlock"]),
    ("CO2 Scrubber", &["Life_Support", "Engineering_Bay"]),
    ("Water Purification Unit", &["Life_Support", "Crew_Quarters"]),
    ("Seed Packets", &["Greenhouse", "Lab"]),
    ("Lab Microscope", &["Lab", "Medical_Bay"]),
    ("Protein Bars", &["Crew_Quarters", "Storage_Bay"]),
    ("Antibiotic Supply", &["Medical_Bay", "Lab"]),
    ("Gyroscope Module", &["Cockpit", "Engineering_Bay"]),
    ("Circuit Board", &["Engineering_Bay", "Storage_Bay"]),
    ("Helmet Visor", &["Storage_Bay", "Crew_Quarters"]),
    ("Emergency Oxygen Mask", &["Crew_Quarters", "Medical_Bay"]),
    ("LED Work Light", &["Maintenance_Bay", "Engineering_Bay"]),
    ("Handheld Spectrometer", &["Lab", "Engineering_Bay"]),
];

/// Static table of well-known item names and their preferred storage zones.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementCatalog;

impl PlacementCatalog {
    /// Preferred zones for an item name (exact match), most preferred first.
    ///
    /// Unknown names yield an empty slice.
    pub fn zones_for(&self, name: &str) -> &'static [&'static str] {
        CATALOG
            .iter()
            .find(|(item, _)| *item == name)
            .map(|(_, zones)| *zones)
            .unwrap_or(&[])
    }

    /// All catalogued `(item name, zones)` pairs in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
        CATALOG.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Dimensions, NewInventoryUnit};
    use cargobay_core::InventoryItemId;

    fn unit(id: &str, name: &str, category: &str) -> InventoryUnit {
        InventoryUnit::from_request(NewInventoryUnit {
            id: InventoryItemId::new(id).unwrap(),
            name: name.to_string(),
            category: category.to_string(),
            location: "Storage_Bay".to_string(),
            dimensions: Dimensions::new(1.0, Some(1.0), 1.0),
            mass: 1.0,
            usage_limit: 10,
        })
    }

    #[test]
    fn groups_preserve_first_seen_category_order() {
        let units = vec![
            unit("a", "Protein Bars", "Food"),
            unit("b", "First Aid Kit", "Medical"),
            unit("c", "Water Bottle", "Food"),
        ];

        let report = group_by_category(&units);
        assert_eq!(report.note, PLACEMENT_NOTE);
        assert_eq!(
            report.suggestions,
            vec![
                CategorySuggestion {
                    category: "Food".to_string(),
                    items: vec!["Protein Bars".to_string(), "Water Bottle".to_string()],
                },
                CategorySuggestion {
                    category: "Medical".to_string(),
                    items: vec!["First Aid Kit".to_string()],
                },
            ]
        );
    }

    #[test]
    fn no_units_means_no_suggestions() {
        let report = group_by_category(std::iter::empty());
        assert!(report.is_empty());
    }

    #[test]
    fn catalog_lookup() {
        let catalog = PlacementCatalog;
        assert_eq!(
            catalog.zones_for("Oxygen Cylinder"),
            &["Airlock", "Crew_Quarters", "Medical_Bay"]
        );
        assert!(catalog.zones_for("Rubber Duck").is_empty());
        assert_eq!(catalog.entries().count(), 39);
    }
}
