//! Counting helpers over a resolved roster

use crate::directory::Employee;
use indexmap::{IndexMap, IndexSet};

fn tally<'a, I>(values: I) -> IndexMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Most common department; the first one seen wins a tie
pub fn dominant_department(members: &[&Employee]) -> Option<String> {
    let counts = tally(members.iter().map(|m| m.department.as_str()));
    let mut best: Option<(&str, usize)> = None;
    for (department, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((department, count));
        }
    }
    best.map(|(department, _)| department.to_string())
}

/// Distinct skills, most frequent first, ties in first-seen order
pub fn top_skills(members: &[&Employee]) -> Vec<String> {
    let counts = tally(
        members
            .iter()
            .flat_map(|m| m.skills.iter().map(String::as_str)),
    );
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // sort_by is stable, so equal counts keep insertion order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().map(|(skill, _)| skill.to_string()).collect()
}

/// Distinct non-empty locations in first-seen order
pub fn distinct_locations(members: &[&Employee]) -> Vec<String> {
    let set: IndexSet<&str> = members
        .iter()
        .map(|m| m.location.as_str())
        .filter(|l| !l.is_empty())
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// Members whose title contains any of `markers`
pub fn leaders<'a, S: AsRef<str>>(members: &[&'a Employee], markers: &[S]) -> Vec<&'a Employee> {
    members
        .iter()
        .copied()
        .filter(|m| m.title_contains_any(markers))
        .collect()
}
