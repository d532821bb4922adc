//! Mentor discovery
//!
//! Lists employees open to mentoring, narrowed by a free-text query and a set
//! of selected topics. Unlike plain search, an empty query keeps everyone.

use super::matcher::{employee_matches, normalize};
use crate::directory::{DirectoryStore, Employee};

/// Available mentors matching `query` and any of `topics`, in store order
///
/// A topic matches when it is a case-insensitive substring of one of the
/// mentor's topics. No topics selected means no topic filter.
pub fn find_mentors<'s, S: AsRef<str>>(
    store: &'s DirectoryStore,
    query: &str,
    topics: &[S],
) -> Vec<&'s Employee> {
    let needle = normalize(query);
    let wanted: Vec<String> = topics.iter().filter_map(|t| normalize(t.as_ref())).collect();

    store
        .iter_employees()
        .filter(|e| {
            let Some(mentoring) = e.mentoring.as_ref().filter(|m| m.available) else {
                return false;
            };
            if let Some(needle) = &needle {
                if !employee_matches(e, needle) {
                    return false;
                }
            }
            wanted.is_empty()
                || wanted.iter().any(|w| {
                    mentoring
                        .topics
                        .iter()
                        .any(|t| t.to_lowercase().contains(w.as_str()))
                })
        })
        .collect()
}
