//! Build profile records, task-level profile matching and per-build
//! validation.
//!
//! A task-level profile carries its matching filters and two pools of build
//! rules: one for the active folder, one for folders linked from it. The
//! rules inside a pool are validated against the available loader registry
//! once per build; valid rules get their matching data normalized and their
//! name filters compiled, cached on a [`ValidatedProfile`] record.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::registry::LoaderRegistry;

/// Task-level profile: matching filters plus the two pools of build rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskBuildProfile {
    /// Task types this profile applies to; empty matches any.
    #[serde(default)]
    pub task_types: Vec<String>,
    /// Task names this profile applies to; empty matches any.
    #[serde(default, alias = "tasks")]
    pub task_names: Vec<String>,
    /// Rules for the active folder.
    #[serde(default)]
    pub current_context: Vec<BuildProfile>,
    /// Rules for folders linked from the active one.
    #[serde(default)]
    pub linked_assets: Vec<BuildProfile>,
}

/// One build rule: which loaders and representation names apply to a set of
/// product types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildProfile {
    /// Loader identifiers in priority order.
    #[serde(default)]
    pub loaders: Vec<String>,
    /// Product types the rule matches.
    #[serde(default, alias = "families")]
    pub product_types: Vec<String>,
    /// Representation names in priority order.
    #[serde(default)]
    pub repre_names: Vec<String>,
    /// Optional product name regexes. A product must match at least one
    /// pattern from the start of its name.
    #[serde(default)]
    pub product_name_filters: Vec<String>,
}

/// Select the task-level profile for a task name and its folder's task type.
///
/// A profile matches when each of its non-empty filter lists contains the
/// value; an empty list is a wildcard. Explicit matches outrank wildcards:
/// every explicitly matched filter scores one point and the highest score
/// wins, first profile wins on ties.
pub fn select_task_profile<'a>(
    profiles: &'a [TaskBuildProfile],
    task_name: &str,
    task_type: Option<&str>,
) -> Option<&'a TaskBuildProfile> {
    let mut best: Option<(&TaskBuildProfile, u8)> = None;

    for profile in profiles {
        let mut score = 0u8;

        if !profile.task_types.is_empty() {
            let Some(task_type) = task_type else {
                continue;
            };
            if !profile.task_types.iter().any(|candidate| candidate == task_type) {
                continue;
            }
            score += 1;
        }

        if !profile.task_names.is_empty() {
            if !profile
                .task_names
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(task_name))
            {
                continue;
            }
            score += 1;
        }

        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((profile, score)),
        }
    }

    best.map(|(profile, _)| profile)
}

/// Build profile with matching data normalized once per build.
#[derive(Debug, Clone)]
pub struct ValidatedProfile {
    pub profile: BuildProfile,
    /// Case-normalized product types.
    pub product_types_lowered: Vec<String>,
    /// Case-normalized representation names, priority order preserved.
    pub repre_names_lowered: Vec<String>,
    /// Compiled product name filters.
    pub name_filters: Vec<Regex>,
}

impl ValidatedProfile {
    /// Whether the rule covers a product type. Expects a lowercased type.
    pub fn matches_product_type(&self, product_type_lowered: &str) -> bool {
        self.product_types_lowered
            .iter()
            .any(|candidate| candidate == product_type_lowered)
    }

    /// Whether a product name passes the optional name filters.
    ///
    /// Patterns are tested from the start of the name, not as a full match.
    /// No filters means every name passes.
    pub fn matches_product_name(&self, name: &str) -> bool {
        if self.name_filters.is_empty() {
            return true;
        }

        self.name_filters
            .iter()
            .any(|pattern| pattern.find(name).is_some_and(|found| found.start() == 0))
    }
}

/// Why a build profile was rejected during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileDiagnostic {
    /// The profile has no loader list.
    MissingLoaders { index: usize },
    /// None of the profile's loaders is available in the registry.
    NoAvailableLoader { index: usize, loaders: Vec<String> },
    /// The profile has no product type list.
    MissingProductTypes { index: usize },
    /// The profile has no representation name list.
    MissingRepreNames { index: usize },
    /// A product name filter is not a valid regex.
    InvalidNameFilter {
        index: usize,
        pattern: String,
        reason: String,
    },
}

impl fmt::Display for ProfileDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileDiagnostic::MissingLoaders { index } => {
                write!(f, "Build profile {index} has missing loaders configuration")
            }
            ProfileDiagnostic::NoAvailableLoader { index, loaders } => {
                write!(
                    f,
                    "All loaders from build profile {index} are not available: {loaders:?}"
                )
            }
            ProfileDiagnostic::MissingProductTypes { index } => {
                write!(
                    f,
                    "Build profile {index} is missing product types configuration"
                )
            }
            ProfileDiagnostic::MissingRepreNames { index } => {
                write!(
                    f,
                    "Build profile {index} is missing representation names filtering"
                )
            }
            ProfileDiagnostic::InvalidNameFilter {
                index,
                pattern,
                reason,
            } => {
                write!(
                    f,
                    "Build profile {index} has invalid product name filter `{pattern}`: {reason}"
                )
            }
        }
    }
}

/// Validate build profiles against the available loader registry.
///
/// Invalid profiles are dropped and reported in the returned diagnostics;
/// validation never fails a build. Valid profiles come back with their
/// matching data normalized.
pub fn filter_build_profiles(
    profiles: &[BuildProfile],
    registry: &LoaderRegistry,
) -> (Vec<ValidatedProfile>, Vec<ProfileDiagnostic>) {
    let mut valid = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, profile) in profiles.iter().enumerate() {
        if profile.loaders.is_empty() {
            diagnostics.push(ProfileDiagnostic::MissingLoaders { index });
            continue;
        }

        if !profile.loaders.iter().any(|name| registry.contains(name)) {
            diagnostics.push(ProfileDiagnostic::NoAvailableLoader {
                index,
                loaders: profile.loaders.clone(),
            });
            continue;
        }

        if profile.product_types.is_empty() {
            diagnostics.push(ProfileDiagnostic::MissingProductTypes { index });
            continue;
        }

        if profile.repre_names.is_empty() {
            diagnostics.push(ProfileDiagnostic::MissingRepreNames { index });
            continue;
        }

        let mut name_filters = Vec::with_capacity(profile.product_name_filters.len());
        let mut filters_valid = true;
        for pattern in &profile.product_name_filters {
            match Regex::new(pattern) {
                Ok(compiled) => name_filters.push(compiled),
                Err(err) => {
                    diagnostics.push(ProfileDiagnostic::InvalidNameFilter {
                        index,
                        pattern: pattern.clone(),
                        reason: err.to_string(),
                    });
                    filters_valid = false;
                    break;
                }
            }
        }
        if !filters_valid {
            continue;
        }

        valid.push(ValidatedProfile {
            product_types_lowered: profile
                .product_types
                .iter()
                .map(|product_type| product_type.to_lowercase())
                .collect(),
            repre_names_lowered: profile
                .repre_names
                .iter()
                .map(|name| name.to_lowercase())
                .collect(),
            name_filters,
            profile: profile.clone(),
        });
    }

    (valid, diagnostics)
}
