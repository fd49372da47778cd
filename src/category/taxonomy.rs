//! Fixed Czech sentence-member taxonomy (větné členy)
//!
//! Compiled in; there is no runtime loading. Ids are unique across the
//! whole tree and 0 is reserved for "Nezařazeno" (uncategorized).

use super::{CategoryEntry, CategoryNode, CategoryTree};

/// The taxonomy offered by the selector
pub fn czech() -> CategoryTree {
    CategoryTree::new(vec![
        CategoryNode::leaf(0, "Nezařazeno", None, &[]),
        CategoryNode::leaf(1, "Podmět", Some("Po"), &["is-cat-1"]),
        CategoryNode::leaf(2, "Přísudek", Some("Př"), &["is-cat-2"]),
        CategoryNode::leaf(3, "Předmět", Some("Pt"), &["is-cat-3"]),
        CategoryNode::group(
            "Příslovečné určení",
            &["is-cat-4"],
            vec![
                CategoryEntry::new(4, "Příslovečné určení místa", Some("Pum")),
                CategoryEntry::new(5, "Příslovečné určení času", Some("Puč")),
                CategoryEntry::new(6, "Příslovečné určení způsobu", Some("Puz")),
                CategoryEntry::new(7, "Příslovečné určení příčiny", Some("Pupř")),
                CategoryEntry::new(8, "Příslovečné určení účelu", Some("Puú")),
            ],
        ),
        CategoryNode::group(
            "Přívlastek",
            &["is-cat-5"],
            vec![
                CategoryEntry::new(9, "Přívlastek shodný", Some("Pk")),
                CategoryEntry::new(10, "Přívlastek neshodný", Some("Pkn")),
            ],
        ),
        CategoryNode::leaf(11, "Doplněk", Some("D"), &["is-cat-6"]),
        CategoryNode::group(
            "Ostatní",
            &["is-cat-7"],
            vec![
                CategoryEntry::new(12, "Spojovací výraz", Some("Sv")),
                CategoryEntry::new(13, "Oslovení", Some("Osl")),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryId;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let options = czech().options();
        let ids: HashSet<_> = options.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), options.len());
    }

    #[test]
    fn uncategorized_entry_comes_first() {
        let options = czech().options();
        assert_eq!(options[0].id, CategoryId::UNCATEGORIZED);
        assert!(options[0].short_name.is_none());
    }

    #[test]
    fn every_other_entry_has_a_label() {
        let tree = czech();
        for option in tree.options().iter().skip(1) {
            let resolved = tree.resolve(option.id);
            assert_eq!(resolved.short_name, option.short_name, "{}", option.name);
            assert!(!resolved.is_uncategorized());
        }
    }

    #[test]
    fn adverbials_share_group_class() {
        let tree = czech();
        for id in 4..=8 {
            assert_eq!(
                tree.resolve(CategoryId(id)).classes,
                vec!["is-categorizable", "is-cat-4"]
            );
        }
    }
}
