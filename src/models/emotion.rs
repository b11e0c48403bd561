use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Genre identifier in the external movie catalog's taxonomy
pub type GenreId = u32;

/// Emotion label presented to the user
///
/// This is the vocabulary the browser client shows; it is one label wider
/// than the classifier's (`relaxed` cannot be detected, only picked by hand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiEmotion {
    Happy,
    Sad,
    Angry,
    Fearful,
    Surprised,
    Disgusted,
    Neutral,
    Relaxed,
}

/// Emotion label returned by the external vision classifier
///
/// Lexically diverges from [`UiEmotion`] on three labels (`fear`, `surprise`,
/// `disgust`) and has no counterpart for `relaxed`. The only way to cross
/// between the two vocabularies is the explicit translation below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierEmotion {
    Happy,
    Sad,
    Angry,
    Fear,
    Surprise,
    Neutral,
    Disgust,
}

impl UiEmotion {
    pub const ALL: [UiEmotion; 8] = [
        UiEmotion::Happy,
        UiEmotion::Sad,
        UiEmotion::Angry,
        UiEmotion::Fearful,
        UiEmotion::Surprised,
        UiEmotion::Disgusted,
        UiEmotion::Neutral,
        UiEmotion::Relaxed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UiEmotion::Happy => "happy",
            UiEmotion::Sad => "sad",
            UiEmotion::Angry => "angry",
            UiEmotion::Fearful => "fearful",
            UiEmotion::Surprised => "surprised",
            UiEmotion::Disgusted => "disgusted",
            UiEmotion::Neutral => "neutral",
            UiEmotion::Relaxed => "relaxed",
        }
    }

    /// Translate to the classifier vocabulary
    ///
    /// Partial: `relaxed` has no classifier equivalent and returns `None`.
    pub fn to_classifier(self) -> Option<ClassifierEmotion> {
        match self {
            UiEmotion::Happy => Some(ClassifierEmotion::Happy),
            UiEmotion::Sad => Some(ClassifierEmotion::Sad),
            UiEmotion::Angry => Some(ClassifierEmotion::Angry),
            UiEmotion::Fearful => Some(ClassifierEmotion::Fear),
            UiEmotion::Surprised => Some(ClassifierEmotion::Surprise),
            UiEmotion::Disgusted => Some(ClassifierEmotion::Disgust),
            UiEmotion::Neutral => Some(ClassifierEmotion::Neutral),
            UiEmotion::Relaxed => None,
        }
    }
}

impl ClassifierEmotion {
    pub const ALL: [ClassifierEmotion; 7] = [
        ClassifierEmotion::Happy,
        ClassifierEmotion::Sad,
        ClassifierEmotion::Angry,
        ClassifierEmotion::Fear,
        ClassifierEmotion::Surprise,
        ClassifierEmotion::Neutral,
        ClassifierEmotion::Disgust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierEmotion::Happy => "happy",
            ClassifierEmotion::Sad => "sad",
            ClassifierEmotion::Angry => "angry",
            ClassifierEmotion::Fear => "fear",
            ClassifierEmotion::Surprise => "surprise",
            ClassifierEmotion::Neutral => "neutral",
            ClassifierEmotion::Disgust => "disgust",
        }
    }

    /// Translate to the UI vocabulary (total)
    pub fn to_ui(self) -> UiEmotion {
        match self {
            ClassifierEmotion::Happy => UiEmotion::Happy,
            ClassifierEmotion::Sad => UiEmotion::Sad,
            ClassifierEmotion::Angry => UiEmotion::Angry,
            ClassifierEmotion::Fear => UiEmotion::Fearful,
            ClassifierEmotion::Surprise => UiEmotion::Surprised,
            ClassifierEmotion::Disgust => UiEmotion::Disgusted,
            ClassifierEmotion::Neutral => UiEmotion::Neutral,
        }
    }
}

impl Display for UiEmotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for ClassifierEmotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UiEmotion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UiEmotion::ALL
            .iter()
            .find(|e| e.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl FromStr for ClassifierEmotion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassifierEmotion::ALL
            .iter()
            .find(|e| e.as_str() == s)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_round_trip_for_every_ui_label_except_relaxed() {
        for ui in UiEmotion::ALL {
            match ui.to_classifier() {
                Some(classifier) => assert_eq!(classifier.to_ui(), ui),
                None => assert_eq!(ui, UiEmotion::Relaxed),
            }
        }
    }

    #[test]
    fn test_relaxed_has_no_classifier_equivalent() {
        assert_eq!(UiEmotion::Relaxed.to_classifier(), None);
    }

    #[test]
    fn test_lexical_divergence_between_vocabularies() {
        assert_eq!(
            UiEmotion::Fearful.to_classifier(),
            Some(ClassifierEmotion::Fear)
        );
        assert_eq!(
            UiEmotion::Surprised.to_classifier(),
            Some(ClassifierEmotion::Surprise)
        );
        assert_eq!(
            UiEmotion::Disgusted.to_classifier(),
            Some(ClassifierEmotion::Disgust)
        );
    }

    #[test]
    fn test_serde_uses_lowercase_labels() {
        let json = serde_json::to_string(&UiEmotion::Fearful).unwrap();
        assert_eq!(json, r#""fearful""#);

        let parsed: ClassifierEmotion = serde_json::from_str(r#""fear""#).unwrap();
        assert_eq!(parsed, ClassifierEmotion::Fear);
    }

    #[test]
    fn test_from_str_rejects_cross_vocabulary_labels() {
        // "fearful" belongs to the UI set only, "fear" to the classifier set only
        assert!("fearful".parse::<ClassifierEmotion>().is_err());
        assert!("fear".parse::<UiEmotion>().is_err());
        assert!("relaxed".parse::<ClassifierEmotion>().is_err());
    }

    #[test]
    fn test_from_str_accepts_every_label_in_its_own_vocabulary() {
        for ui in UiEmotion::ALL {
            assert_eq!(ui.as_str().parse::<UiEmotion>(), Ok(ui));
        }
        for c in ClassifierEmotion::ALL {
            assert_eq!(c.as_str().parse::<ClassifierEmotion>(), Ok(c));
        }
    }
}
