use crate::domain::model::{CategoryInfo, CategoryTag};
use crate::utils::error::Result;

/// Canonical category table, ascending by threshold. Shared by every unit
/// system; `classify` walks it to find a category.
pub static CATEGORY_TABLE: [CategoryInfo; 4] = [
    CategoryInfo {
        category: CategoryTag::Underweight,
        label: "Underweight",
        description: "Your BMI is below the healthy range",
        recommendation: "Consider consulting with a healthcare provider about healthy weight gain strategies.",
        range_min: 0.0,
        range_max: Some(18.5),
        reference_range: "< 18.5",
        color: "blue",
    },
    CategoryInfo {
        category: CategoryTag::Normal,
        label: "Normal Weight",
        description: "Your BMI is within the healthy range",
        recommendation: "Maintain your current weight with a balanced diet and regular physical activity.",
        range_min: 18.5,
        range_max: Some(25.0),
        reference_range: "18.5 - 24.9",
        color: "green",
    },
    CategoryInfo {
        category: CategoryTag::Overweight,
        label: "Overweight",
        description: "Your BMI is above the healthy range",
        recommendation: "Consider incorporating more physical activity and a balanced diet to achieve a healthier weight.",
        range_min: 25.0,
        range_max: Some(30.0),
        reference_range: "25 - 29.9",
        color: "yellow",
    },
    CategoryInfo {
        category: CategoryTag::Obese,
        label: "Obese",
        description: "Your BMI is significantly above the healthy range",
        recommendation: "It is recommended to consult with a healthcare provider to develop a comprehensive weight management plan.",
        range_min: 30.0,
        range_max: None,
        reference_range: "≥ 30",
        color: "red",
    },
];

pub fn category_info(tag: CategoryTag) -> &'static CategoryInfo {
    match tag {
        CategoryTag::Underweight => &CATEGORY_TABLE[0],
        CategoryTag::Normal => &CATEGORY_TABLE[1],
        CategoryTag::Overweight => &CATEGORY_TABLE[2],
        CategoryTag::Obese => &CATEGORY_TABLE[3],
    }
}

/// Lookup by raw tag name, e.g. from a query string or a stored label.
pub fn category_info_by_name(name: &str) -> Result<&'static CategoryInfo> {
    let tag: CategoryTag = name.parse()?;
    Ok(category_info(tag))
}
