//! Nickname listing widened through alternate spellings.

use std::collections::BTreeSet;

use crate::dictionary::{NameDictionary, VariantDictionary};

/// Every nickname known for `name`, sorted and without duplicates.
///
/// Collects the nicknames of each formal name equal to `name` ignoring case.
/// If `name` belongs to a variant group (the canonical spelling or any
/// alternate, ignoring case), the nicknames of every group member stored in
/// `dict` under that exact spelling are added too.
pub fn get_nicknames(name: &str, dict: &NameDictionary, variants: &VariantDictionary) -> Vec<String> {
    let wanted = name.to_lowercase();
    let mut nicknames = BTreeSet::new();

    for (formal_name, record) in dict.iter() {
        if formal_name.to_lowercase() == wanted {
            nicknames.extend(record.nicknames.iter().cloned());
        }
    }

    for (canonical, alternates) in variants.iter() {
        let group = std::iter::once(canonical).chain(alternates.iter().map(String::as_str));
        if !group.clone().any(|member| member.to_lowercase() == wanted) {
            continue;
        }
        for member in group {
            if let Some(record) = dict.get(member) {
                nicknames.extend(record.nicknames.iter().cloned());
            }
        }
    }

    nicknames.into_iter().collect()
}
