//! Category-specific detail layout for a single item.

use crate::domain::{Category, Item};

/// Label, JSON key and unit suffix for one detail line.
type FieldSpec = (&'static str, &'static str, &'static str);

const PEOPLE_FIELDS: &[FieldSpec] = &[
    ("Name", "name", ""),
    ("Height", "height", "cm"),
    ("Mass", "mass", "kg"),
    ("Hair Color", "hair_color", ""),
    ("Skin Color", "skin_color", ""),
    ("Eye Color", "eye_color", ""),
    ("Birth Year", "birth_year", ""),
    ("Gender", "gender", ""),
];

const PLANET_FIELDS: &[FieldSpec] = &[
    ("Name", "name", ""),
    ("Rotation Period", "rotation_period", "hrs"),
    ("Orbital Period", "orbital_period", " days"),
    ("Diameter", "diameter", "km"),
    ("Climate", "climate", ""),
    ("Gravity", "gravity", ""),
    ("Terrain", "terrain", ""),
    ("Surface Water", "surface_water", "%"),
    ("Population", "population", ""),
];

const STARSHIP_FIELDS: &[FieldSpec] = &[
    ("Name", "name", ""),
    ("Model", "model", ""),
    ("Manufacturer", "manufacturer", ""),
    ("Cost in Credits", "cost_in_credits", ""),
    ("Length", "length", "m"),
    ("Max Atmosphering Speed", "max_atmosphering_speed", ""),
    ("Crew", "crew", ""),
    ("Passengers", "passengers", ""),
    ("Cargo Capacity", "cargo_capacity", ""),
    ("Consumables", "consumables", ""),
    ("Hyperdrive Rating", "hyperdrive_rating", ""),
    ("Starship Class", "starship_class", ""),
];

const fn field_specs(category: Category) -> &'static [FieldSpec] {
    match category {
        Category::People => PEOPLE_FIELDS,
        Category::Planets => PLANET_FIELDS,
        Category::Starships => STARSHIP_FIELDS,
    }
}

/// One `Label: value` line of the detail body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Everything the modal shows for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub category: Category,
    pub title: String,
    pub fields: Vec<DetailField>,
    pub film_count: usize,
    /// The item as indented JSON, shown when the raw view is toggled on.
    pub raw_json: String,
}

impl DetailView {
    /// Builds the detail layout for `item` as a member of `category`.
    #[must_use]
    pub fn new(category: Category, item: &Item) -> Self {
        let fields = field_specs(category)
            .iter()
            .map(|&(label, key, suffix)| DetailField {
                label,
                value: format!("{}{suffix}", item.field_text(key)),
            })
            .collect();

        Self {
            category,
            title: item.display_name(),
            fields,
            film_count: item.film_count(),
            raw_json: item.to_pretty_json(),
        }
    }

    /// Body lines: the category fields, a blank separator, then the film count.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| format!("{}: {}", f.label, f.value))
            .chain([String::new(), format!("Films: {}", self.film_count)])
            .collect()
    }

    /// The body as a single newline-separated string.
    #[must_use]
    pub fn body(&self) -> String {
        self.lines().join("\n")
    }
}
