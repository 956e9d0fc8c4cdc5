use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

thread_local! {
    // Root locale, tertiary strength, punctuation not ignorable.
    static ROOT_COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                warn!(error = %err, "Root collator unavailable, falling back to code point order");
                None
            }
        };
}

/// Orders strings the way a default-locale collator presents them in a
/// picker.
///
/// Uses the Unicode Collation Algorithm with CLDR root data: accented
/// letters sort next to their base letter (`"éa"` before `"eb"`),
/// punctuation before digits before letters, and strings that differ only
/// in case put lowercase first (`"name"` before `"Name"`). Strings the
/// collator considers equal fall back to code point order, so only identical
/// strings compare equal and sorting is deterministic.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| {
            collator
                .as_ref()
                .map_or(Ordering::Equal, |collator| collator.compare(a, b))
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_before_anything_else() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn lowercase_first_on_case_ties() {
        assert_eq!(locale_cmp("name", "Name"), Ordering::Less);
        assert_eq!(locale_cmp("Name", "name"), Ordering::Greater);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(locale_cmp("id", "identifier"), Ordering::Less);
    }

    #[test]
    fn accents_sort_with_base_letter() {
        assert_eq!(locale_cmp("éa", "eb"), Ordering::Less);
        assert_eq!(locale_cmp("éa", "Zeta"), Ordering::Less);
    }

    #[test]
    fn punctuation_before_digits() {
        assert_eq!(locale_cmp("a_b", "a1"), Ordering::Less);
        assert_eq!(locale_cmp("item-2", "item2"), Ordering::Less);
        assert_eq!(locale_cmp("item_2", "item-2"), Ordering::Less);
    }

    #[test]
    fn equal_only_when_identical() {
        assert_eq!(locale_cmp("created_at", "created_at"), Ordering::Equal);
        assert_ne!(locale_cmp("ID", "id"), Ordering::Equal);
    }
}
