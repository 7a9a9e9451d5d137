//! Structural checks on a parsed catalog.
//!
//! The JSON Schema only covers shapes; the cross-references the editor relies
//! on (unique types, items filed under their own category, ...) are checked
//! here. All violations are collected so a broken catalog can be fixed in one
//! pass.

use crate::palette::identity::{CategoryKey, ComponentType};
use crate::palette::model::{Category, ConnectionPoint, ThemeColor};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

/// Which connection list of an item a violation was found in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Input,
    Output,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => f.write_str("input"),
            Direction::Output => f.write_str("output"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("category #{index} has an empty key")]
    EmptyCategoryKey { index: usize },
    #[error("duplicate category key '{key}'")]
    DuplicateCategoryKey { key: CategoryKey },
    #[error("category '{key}' has invalid color '{color}' (expected #RRGGBB)")]
    InvalidColor { key: CategoryKey, color: String },
    #[error("item #{index} in category '{category}' has an empty type")]
    EmptyComponentType { category: CategoryKey, index: usize },
    #[error("duplicate component type '{component_type}' in categories '{first}' and '{second}'")]
    DuplicateComponentType {
        component_type: ComponentType,
        first: CategoryKey,
        second: CategoryKey,
    },
    #[error("component '{component_type}' references unknown category '{declared}'")]
    UnknownCategory {
        component_type: ComponentType,
        declared: CategoryKey,
    },
    #[error(
        "component '{component_type}' declares category '{declared}' but is listed under '{owner}'"
    )]
    CategoryMismatch {
        component_type: ComponentType,
        declared: CategoryKey,
        owner: CategoryKey,
    },
    #[error("component '{component_type}' has an {direction} with an empty id")]
    EmptyConnectionId {
        component_type: ComponentType,
        direction: Direction,
    },
    #[error("component '{component_type}' repeats {direction} id '{id}'")]
    DuplicateConnectionId {
        component_type: ComponentType,
        direction: Direction,
        id: String,
    },
}

/// A catalog that parsed but broke one or more invariants.
#[derive(Debug, Error)]
#[error("{origin} violates {} catalog invariant(s):\n{}", .violations.len(), bullet_list(.violations))]
pub struct InvalidConfig {
    pub origin: String,
    pub violations: Vec<InvariantViolation>,
}

fn bullet_list(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check a catalog, failing with every violation found.
pub fn check_categories<I>(categories: &[Category<I>], origin: &str) -> Result<(), InvalidConfig> {
    let violations = validate_categories(categories);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(InvalidConfig {
            origin: origin.to_string(),
            violations,
        })
    }
}

pub fn validate_categories<I>(categories: &[Category<I>]) -> Vec<InvariantViolation> {
    // Return a list rather than short-circuiting so callers see every issue.
    let mut errors = Vec::new();

    let mut keys: BTreeSet<&CategoryKey> = BTreeSet::new();
    for (index, category) in categories.iter().enumerate() {
        if category.key.0.trim().is_empty() {
            errors.push(InvariantViolation::EmptyCategoryKey { index });
        } else if !keys.insert(&category.key) {
            errors.push(InvariantViolation::DuplicateCategoryKey {
                key: category.key.clone(),
            });
        }
        if ThemeColor::from_hex(&category.color).is_err() {
            errors.push(InvariantViolation::InvalidColor {
                key: category.key.clone(),
                color: category.color.clone(),
            });
        }
    }

    let mut seen_types: BTreeMap<&ComponentType, &CategoryKey> = BTreeMap::new();
    for category in categories {
        for (index, item) in category.items.iter().enumerate() {
            if item.component_type.0.trim().is_empty() {
                errors.push(InvariantViolation::EmptyComponentType {
                    category: category.key.clone(),
                    index,
                });
            } else if let Some(first) = seen_types.get(&item.component_type) {
                errors.push(InvariantViolation::DuplicateComponentType {
                    component_type: item.component_type.clone(),
                    first: (*first).clone(),
                    second: category.key.clone(),
                });
            } else {
                seen_types.insert(&item.component_type, &category.key);
            }

            if item.category != category.key {
                let violation = if keys.contains(&item.category) {
                    InvariantViolation::CategoryMismatch {
                        component_type: item.component_type.clone(),
                        declared: item.category.clone(),
                        owner: category.key.clone(),
                    }
                } else {
                    InvariantViolation::UnknownCategory {
                        component_type: item.component_type.clone(),
                        declared: item.category.clone(),
                    }
                };
                errors.push(violation);
            }

            check_connections(&item.component_type, Direction::Input, &item.inputs, &mut errors);
            check_connections(&item.component_type, Direction::Output, &item.outputs, &mut errors);
        }
    }

    errors
}

fn check_connections(
    component_type: &ComponentType,
    direction: Direction,
    points: &[ConnectionPoint],
    errors: &mut Vec<InvariantViolation>,
) {
    let mut ids = BTreeSet::new();
    for point in points {
        if point.id.trim().is_empty() {
            errors.push(InvariantViolation::EmptyConnectionId {
                component_type: component_type.clone(),
                direction,
            });
            continue;
        }
        // Ids are scoped to one list; the same id may appear as input and output.
        if !ids.insert(point.id.as_str()) {
            errors.push(InvariantViolation::DuplicateConnectionId {
                component_type: component_type.clone(),
                direction,
                id: point.id.clone(),
            });
        }
    }
}
