//! Case-insensitive section grouping.

use skillmerge_core::types::{FxHashMap, ResolutionStrategy, Section};

use crate::conflict::resolve;

/// Grouped sections plus how many groups had to be reconciled.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSections {
    pub sections: Vec<Section>,
    /// Groups with more than one member.
    pub reconciled_groups: usize,
}

/// Group `sections` by lower-cased title, in first-seen title order.
///
/// Single-member groups pass through untouched. Larger groups keep the first
/// member's title and level, and their contents are reduced with `strategy`
/// (`Combine` joins the distinct non-empty contents with a blank line).
pub fn group_sections(sections: Vec<Section>, strategy: ResolutionStrategy) -> GroupedSections {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<Section>> = Vec::new();

    for section in sections {
        match index.get(&section.title_key()) {
            Some(&slot) => groups[slot].push(section),
            None => {
                index.insert(section.title_key(), groups.len());
                groups.push(vec![section]);
            }
        }
    }

    let mut reconciled_groups = 0;
    let sections = groups
        .into_iter()
        .filter_map(|mut members| {
            if members.len() > 1 {
                reconciled_groups += 1;
                let contents: Vec<&str> = members.iter().map(|s| s.content.as_str()).collect();
                let content = resolve(&contents, strategy);
                let first = members.swap_remove(0);
                Some(Section { content, ..first })
            } else {
                members.pop()
            }
        })
        .collect();

    GroupedSections {
        sections,
        reconciled_groups,
    }
}
