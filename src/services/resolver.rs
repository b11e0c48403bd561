use crate::models::{ClassifierEmotion, GenreId, UiEmotion};

/// Catalog genre ids referenced by the mapping tables
pub mod genres {
    use crate::models::GenreId;

    pub const ACTION: GenreId = 28;
    pub const COMEDY: GenreId = 35;
    pub const DOCUMENTARY: GenreId = 99;
    pub const DRAMA: GenreId = 18;
    pub const FAMILY: GenreId = 10751;
    pub const HORROR: GenreId = 27;
    pub const MYSTERY: GenreId = 9648;
    pub const SCIFI: GenreId = 878;
}

/// Fallback genre when a label cannot be mapped
///
/// The classifier is best-effort and a recommendation must always be
/// produced, so unrecognized labels fall closed to Comedy instead of erroring.
pub const DEFAULT_GENRE: GenreId = genres::COMEDY;

/// Genre for a classifier-vocabulary emotion
pub fn genre_for_classifier(emotion: ClassifierEmotion) -> GenreId {
    match emotion {
        ClassifierEmotion::Happy => genres::COMEDY,
        ClassifierEmotion::Sad => genres::DRAMA,
        ClassifierEmotion::Angry => genres::ACTION,
        ClassifierEmotion::Surprise => genres::HORROR,
        ClassifierEmotion::Neutral => genres::SCIFI,
        ClassifierEmotion::Fear => genres::MYSTERY,
        ClassifierEmotion::Disgust => genres::DOCUMENTARY,
    }
}

/// Genre for a UI-vocabulary emotion
///
/// Covers all 8 UI labels. The classifier table alone cannot represent
/// `relaxed`, so manual selections route through this table instead.
pub fn genre_for_ui(emotion: UiEmotion) -> GenreId {
    match emotion.to_classifier() {
        Some(classifier) => genre_for_classifier(classifier),
        None => genres::FAMILY,
    }
}

/// Total label-to-genre resolution
///
/// Accepts any string: a classifier label resolves through the classifier
/// table, anything else through the fallback policy.
pub fn resolve(label: &str) -> GenreId {
    label
        .parse::<ClassifierEmotion>()
        .map(genre_for_classifier)
        .unwrap_or(DEFAULT_GENRE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_table_matches_catalog_taxonomy() {
        assert_eq!(genre_for_classifier(ClassifierEmotion::Happy), 35);
        assert_eq!(genre_for_classifier(ClassifierEmotion::Sad), 18);
        assert_eq!(genre_for_classifier(ClassifierEmotion::Angry), 28);
        assert_eq!(genre_for_classifier(ClassifierEmotion::Surprise), 27);
        assert_eq!(genre_for_classifier(ClassifierEmotion::Neutral), 878);
        assert_eq!(genre_for_classifier(ClassifierEmotion::Fear), 9648);
        assert_eq!(genre_for_classifier(ClassifierEmotion::Disgust), 99);
    }

    #[test]
    fn test_resolve_known_labels() {
        assert_eq!(resolve("fear"), 9648);
        assert_eq!(resolve("happy"), 35);
        assert_eq!(resolve("disgust"), 99);
    }

    #[test]
    fn test_resolve_is_total_over_arbitrary_strings() {
        assert_eq!(resolve("bogus"), 35);
        assert_eq!(resolve(""), 35);
        // UI-only spellings are not classifier labels and fall back too
        assert_eq!(resolve("fearful"), 35);
        assert_eq!(resolve("relaxed"), 35);
    }

    #[test]
    fn test_ui_table_covers_all_eight_labels() {
        for ui in UiEmotion::ALL {
            // Every UI label resolves to some genre without panicking
            let genre = genre_for_ui(ui);
            assert!(genre > 0);
        }
    }

    #[test]
    fn test_ui_table_agrees_with_classifier_table_where_both_apply() {
        for ui in UiEmotion::ALL {
            if let Some(classifier) = ui.to_classifier() {
                assert_eq!(genre_for_ui(ui), genre_for_classifier(classifier));
            }
        }
    }

    #[test]
    fn test_relaxed_resolves_through_ui_table_only() {
        assert_eq!(genre_for_ui(UiEmotion::Relaxed), genres::FAMILY);
    }
}
