//! Pure projection of the catalog into the displayed view.
//!
//! Nothing in here touches a signal or the DOM: given the catalog and the
//! current control values, the same inputs always produce the same ordered
//! output. The screen recomputes this on every render.

use std::cmp::Ordering;

use api::ActivityRecord;
use api::Catalog;

/// Display order for the activity list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortOption {
    /// Keep the catalog's own entry order.
    #[default]
    Unsorted,
    NameAsc,
    NameDesc,
    TimeAsc,
    TimeDesc,
}

impl SortOption {
    pub fn from_value(value: &str) -> Self {
        match value {
            "name-asc" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            "time-asc" => Self::TimeAsc,
            "time-desc" => Self::TimeDesc,
            _ => Self::Unsorted,
        }
    }
}

/// Capacity filter for the activity list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AvailabilityFilter {
    #[default]
    Any,
    /// Any non-zero remaining capacity. Over-capacity entries (negative
    /// spots) count as available, not full.
    Available,
    /// Exactly zero spots left.
    Full,
}

impl AvailabilityFilter {
    pub fn from_value(value: &str) -> Self {
        match value {
            "available" => Self::Available,
            "full" => Self::Full,
            _ => Self::Any,
        }
    }
}

/// Current values of the four filter/sort controls.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ViewControls {
    /// Free-text search. Empty or whitespace-only matches everything.
    pub search: String,
    /// Exact category match. Empty selection matches everything.
    pub category: String,
    pub availability: AvailabilityFilter,
    pub sort: SortOption,
}

/// Filters and sorts the catalog into the ordered sequence of entries to
/// display. Filters are conjunctive; the sort is stable, so entries that
/// compare equal keep the catalog's own order.
pub fn derive_view<'a>(
    catalog: &'a Catalog,
    controls: &ViewControls,
) -> Vec<(&'a String, &'a ActivityRecord)> {
    let term = controls.search.trim().to_lowercase();

    let mut entries: Vec<(&String, &ActivityRecord)> = catalog
        .iter()
        .filter(|(name, record)| {
            if !term.is_empty() {
                let haystack =
                    format!("{name} {} {}", record.description, record.schedule).to_lowercase();
                if !haystack.contains(&term) {
                    return false;
                }
            }

            if !controls.category.is_empty()
                && record.category.as_deref() != Some(controls.category.as_str())
            {
                return false;
            }

            match controls.availability {
                AvailabilityFilter::Any => true,
                AvailabilityFilter::Available => record.spots_left() != 0,
                AvailabilityFilter::Full => record.spots_left() == 0,
            }
        })
        .collect();

    match controls.sort {
        SortOption::Unsorted => {}
        SortOption::NameAsc => entries.sort_by(|a, b| locale_cmp(a.0, b.0)),
        SortOption::NameDesc => entries.sort_by(|a, b| locale_cmp(b.0, a.0)),
        SortOption::TimeAsc => entries.sort_by(|a, b| datetime_key(a.1).cmp(datetime_key(b.1))),
        SortOption::TimeDesc => entries.sort_by(|a, b| datetime_key(b.1).cmp(datetime_key(a.1))),
    }

    entries
}

// Absent datetime sorts as the empty string: first ascending, last descending.
fn datetime_key(record: &ActivityRecord) -> &str {
    record.datetime.as_deref().unwrap_or("")
}

/// Case-insensitive total order standing in for locale collation: compares
/// Unicode-lowercased forms, then raw bytes so case variants still order
/// deterministically.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Distinct categories present in the catalog, sorted ascending. Entries
/// with no category (or an empty one) contribute nothing.
pub fn build_categories(catalog: &Catalog) -> Vec<String> {
    let mut categories: Vec<String> = catalog
        .values()
        .filter_map(|record| record.category.as_deref())
        .filter(|category| !category.is_empty())
        .map(str::to_owned)
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Every catalog name sorted ascending, for the signup selector. Deliberately
/// independent of the active filters: an activity filtered out of the list
/// must still be selectable for signup.
pub fn selector_names(catalog: &Catalog) -> Vec<String> {
    let mut names: Vec<String> = catalog.keys().cloned().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        description: &str,
        schedule: &str,
        category: Option<&str>,
        datetime: Option<&str>,
        max_participants: u32,
        participants: &[&str],
    ) -> ActivityRecord {
        ActivityRecord {
            description: description.into(),
            schedule: schedule.into(),
            category: category.map(str::to_owned),
            datetime: datetime.map(str::to_owned),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    // Insertion order is deliberately non-alphabetical so order-preservation
    // failures show up.
    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Yoga Basics".into(),
            record(
                "Stretching for beginners",
                "Wed 5pm",
                Some("Fitness"),
                Some("2024-01-03T17:00"),
                10,
                &["a@x.com"],
            ),
        );
        catalog.insert(
            "Chess Club".into(),
            record(
                "Weekly chess matches",
                "Mon 3pm",
                Some("Games"),
                Some("2024-01-01T15:00"),
                2,
                &["a@x.com"],
            ),
        );
        catalog.insert(
            "Art Workshop".into(),
            record("Watercolor painting", "Tue 4pm", None, None, 1, &["b@x.com"]),
        );
        catalog
    }

    fn controls() -> ViewControls {
        ViewControls::default()
    }

    #[test]
    fn derive_is_pure() {
        let catalog = sample_catalog();
        let controls = ViewControls {
            search: "  CLUB ".into(),
            category: "Games".into(),
            availability: AvailabilityFilter::Available,
            sort: SortOption::NameDesc,
        };
        assert_eq!(
            derive_view(&catalog, &controls),
            derive_view(&catalog, &controls)
        );
    }

    #[test]
    fn default_view_keeps_catalog_order() {
        let catalog = sample_catalog();
        let names: Vec<&String> = derive_view(&catalog, &controls())
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["Yoga Basics", "Chess Club", "Art Workshop"]);
    }

    #[test]
    fn available_means_nonzero_spots() {
        let catalog = sample_catalog();
        let filtered = derive_view(
            &catalog,
            &ViewControls {
                availability: AvailabilityFilter::Available,
                ..controls()
            },
        );
        // Chess Club has 1 spot left, Art Workshop has 0.
        let names: Vec<&String> = filtered.into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Yoga Basics", "Chess Club"]);
    }

    #[test]
    fn full_means_exactly_zero_spots() {
        let catalog = sample_catalog();
        let filtered = derive_view(
            &catalog,
            &ViewControls {
                availability: AvailabilityFilter::Full,
                ..controls()
            },
        );
        let names: Vec<&String> = filtered.into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Art Workshop"]);
    }

    #[test]
    fn full_activity_flips_filters_when_last_spot_taken() {
        let mut catalog = sample_catalog();
        catalog
            .get_mut("Chess Club")
            .unwrap()
            .participants
            .push("b@x.com".into());

        let available = derive_view(
            &catalog,
            &ViewControls {
                availability: AvailabilityFilter::Available,
                ..controls()
            },
        );
        assert!(available.iter().all(|(name, _)| *name != "Chess Club"));

        let full = derive_view(
            &catalog,
            &ViewControls {
                availability: AvailabilityFilter::Full,
                ..controls()
            },
        );
        assert!(full.iter().any(|(name, _)| *name == "Chess Club"));
    }

    #[test]
    fn over_capacity_counts_as_available_not_full() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Packed".into(),
            record("d", "s", None, None, 1, &["a@x.com", "b@x.com"]),
        );

        let available = derive_view(
            &catalog,
            &ViewControls {
                availability: AvailabilityFilter::Available,
                ..controls()
            },
        );
        assert_eq!(available.len(), 1);

        let full = derive_view(
            &catalog,
            &ViewControls {
                availability: AvailabilityFilter::Full,
                ..controls()
            },
        );
        assert!(full.is_empty());
    }

    #[test]
    fn search_is_case_insensitive_across_name_description_schedule() {
        let catalog = sample_catalog();

        let by_name = derive_view(
            &catalog,
            &ViewControls {
                search: "YOGA".into(),
                ..controls()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].0, "Yoga Basics");

        let by_description = derive_view(
            &catalog,
            &ViewControls {
                search: "watercolor".into(),
                ..controls()
            },
        );
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].0, "Art Workshop");

        let by_schedule = derive_view(
            &catalog,
            &ViewControls {
                search: "mon 3pm".into(),
                ..controls()
            },
        );
        assert_eq!(by_schedule.len(), 1);
        assert_eq!(by_schedule[0].0, "Chess Club");
    }

    #[test]
    fn whitespace_only_search_matches_everything() {
        let catalog = sample_catalog();
        let view = derive_view(
            &catalog,
            &ViewControls {
                search: "   ".into(),
                ..controls()
            },
        );
        assert_eq!(view.len(), catalog.len());
    }

    #[test]
    fn category_filter_is_exact_and_skips_uncategorized() {
        let catalog = sample_catalog();
        let view = derive_view(
            &catalog,
            &ViewControls {
                category: "Games".into(),
                ..controls()
            },
        );
        let names: Vec<&String> = view.into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Chess Club"]);
    }

    #[test]
    fn name_sort_is_nondecreasing_and_reversible() {
        let catalog = sample_catalog();
        let ascending = derive_view(
            &catalog,
            &ViewControls {
                sort: SortOption::NameAsc,
                ..controls()
            },
        );
        for pair in ascending.windows(2) {
            assert_ne!(locale_cmp(pair[0].0, pair[1].0), Ordering::Greater);
        }

        let descending = derive_view(
            &catalog,
            &ViewControls {
                sort: SortOption::NameDesc,
                ..controls()
            },
        );
        let reversed: Vec<&String> = descending.into_iter().rev().map(|(name, _)| name).collect();
        let forward: Vec<&String> = ascending.into_iter().map(|(name, _)| name).collect();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn time_desc_treats_absent_datetime_as_empty() {
        let catalog = sample_catalog();
        let view = derive_view(
            &catalog,
            &ViewControls {
                sort: SortOption::TimeDesc,
                ..controls()
            },
        );
        let names: Vec<&String> = view.into_iter().map(|(name, _)| name).collect();
        // Art Workshop has no datetime, so it sorts last on descending.
        assert_eq!(names, ["Yoga Basics", "Chess Club", "Art Workshop"]);
    }

    #[test]
    fn category_index_is_sorted_deduped_and_skips_empty() {
        let mut catalog = sample_catalog();
        catalog.insert(
            "Chess Night".into(),
            record("More chess", "Fri 7pm", Some("Games"), None, 5, &[]),
        );
        catalog.insert(
            "Unlabeled".into(),
            record("d", "s", Some(""), None, 5, &[]),
        );
        assert_eq!(build_categories(&catalog), ["Fitness", "Games"]);
    }

    #[test]
    fn selector_names_are_all_names_sorted() {
        let catalog = sample_catalog();
        assert_eq!(
            selector_names(&catalog),
            ["Art Workshop", "Chess Club", "Yoga Basics"]
        );
    }

    #[test]
    fn control_values_parse_with_fallback() {
        assert_eq!(SortOption::from_value("time-desc"), SortOption::TimeDesc);
        assert_eq!(SortOption::from_value(""), SortOption::Unsorted);
        assert_eq!(
            AvailabilityFilter::from_value("full"),
            AvailabilityFilter::Full
        );
        assert_eq!(
            AvailabilityFilter::from_value("anything-else"),
            AvailabilityFilter::Any
        );
    }
}
