#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use crate::toolchain::lexer::keywords::*;

    #[test]
    fn set_indices() {
        for (i, set) in KeywordSet::ALL.iter().enumerate() {
            assert_eq!(set.index(), i);
            assert_eq!(KeywordSet::from_index(i), Some(*set));
        }
        assert_eq!(KeywordSet::from_index(KEYWORD_SET_COUNT), None);
        assert!(KeywordSet::Primary.applies_to_code());
        assert!(!KeywordSet::DocComment.applies_to_code());
    }

    #[test]
    fn words_unique_within_sets() {
        for set in KeywordSet::ALL {
            let words = static_words(set);
            let unique: HashSet<_> = words.iter().collect();
            assert_eq!(unique.len(), words.len(), "duplicate word in {:?}", set);
        }
    }

    #[test]
    fn sets_are_disjoint() {
        let mut seen: HashMap<&str, KeywordSet> = HashMap::new();
        for set in KeywordSet::ALL {
            for word in static_words(set) {
                if let Some(other) = seen.insert(*word, set) {
                    panic!("'{}' appears in both {:?} and {:?}", word, other, set);
                }
            }
        }
    }

    #[test]
    fn words_are_single_names() {
        for set in KeywordSet::ALL {
            for word in static_words(set) {
                assert!(!word.is_empty());
                assert!(
                    word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
                    "'{}' is not a name",
                    word
                );
                assert!(!word.starts_with(|c: char| c.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn keyword_lists() {
        let table = KeywordTable::new();
        for set in KeywordSet::ALL {
            let listed: Vec<&str> = table.keywords(set.index()).split(' ').collect();
            assert_eq!(listed, static_words(set));
        }
        assert!(table.keywords(0).split(' ').any(|w| w == "now"));
        assert!(table.keywords(1).split(' ').any(|w| w == "dur"));
        assert!(table.keywords(2).split(' ').any(|w| w == "SinOsc"));
    }

    #[test]
    fn unused_sets_are_empty() {
        let table = KeywordTable::new();
        assert_eq!(table.keywords(KEYWORD_SET_COUNT), "");
        assert_eq!(table.keywords(99), "");
        assert_eq!(table.keywords(usize::MAX), "");
        assert_eq!(NoKeywords.keywords(0), "");
    }

    #[test]
    fn lists_are_stable() {
        let table = KeywordTable::new();
        let again = KeywordTable::new();
        for i in 0..=KEYWORD_SET_COUNT {
            assert_eq!(table.keywords(i), table.keywords(i));
            assert_eq!(table.keywords(i), again.keywords(i));
        }
    }

    #[test]
    fn lookup() {
        let table = KeywordTable::new();
        assert_eq!(table.lookup("spork"), Some(KeywordSet::Primary));
        assert_eq!(table.lookup("now"), Some(KeywordSet::Primary));
        assert_eq!(table.lookup("float"), Some(KeywordSet::Types));
        assert_eq!(table.lookup("ADSR"), Some(KeywordSet::Classes));
        assert_eq!(table.lookup("param"), Some(KeywordSet::DocComment));
        assert_eq!(table.lookup("toDur"), None);
        assert_eq!(table.lookup(""), None);
        // Words are case-sensitive.
        assert_eq!(table.lookup("Now"), None);
        assert_eq!(table.lookup("sinosc"), None);
        assert!(table.contains(KeywordSet::Types, "int"));
        assert!(!table.contains(KeywordSet::Primary, "int"));
        assert_eq!(NoKeywords.lookup("now"), None);
    }

    #[test]
    fn every_word_looks_up_to_its_set() {
        let table = KeywordTable::new();
        for set in KeywordSet::ALL {
            for word in table.words(set) {
                assert_eq!(table.lookup(word), Some(set), "{}", word);
            }
        }
    }
}
