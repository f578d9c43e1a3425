//! Canned phrase-to-reply table for chat mode

use super::normalize::normalize;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key that gets a follow-up question appended to its reply
pub const FOLLOW_UP_KEY: &str = "hlo";

/// Follow-up questions appended after the reply for [`FOLLOW_UP_KEY`]
pub const FOLLOW_UP_QUESTIONS: [&str; 2] = ["మీరు బాగా ఉన్నారా?", "మీ రోజు ఎలా ఉంది?"];

#[derive(Debug, Error)]
pub enum PhraseError {
    #[error("Phrase '{phrase}' has no replies")]
    EmptyReplies { phrase: String },

    #[error("Phrase '{phrase}' is empty after normalization")]
    EmptyPhrase { phrase: String },

    #[error("Failed to read phrase file {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("Invalid phrase file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Extra question appended to the reply of one specific key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    pub key: String,
    pub questions: Vec<String>,
}

/// Mapping from normalized phrase to a non-empty list of candidate replies
///
/// Keys are normalized on insertion, so lookups must use normalized input.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    entries: HashMap<String, Vec<String>>,
    follow_up: Option<FollowUp>,
}

impl PhraseTable {
    /// Empty table without a follow-up rule
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Telugu/transliterated table
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parse a JSON object `{ "phrase": ["reply", ...] }`
    ///
    /// The default follow-up rule is attached; it only fires if the file
    /// defines the follow-up key.
    pub fn from_json(content: &str) -> Result<Self, PhraseError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(content)?;

        let mut table = Self::new().with_follow_up(FOLLOW_UP_KEY, FOLLOW_UP_QUESTIONS);
        let mut phrases: Vec<_> = raw.into_iter().collect();
        // later duplicates after normalization should not depend on hash order
        phrases.sort_by(|a, b| a.0.cmp(&b.0));
        for (phrase, replies) in phrases {
            table.insert(&phrase, replies)?;
        }
        Ok(table)
    }

    /// Load a JSON phrase file
    pub fn from_file(path: &Path) -> Result<Self, PhraseError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| PhraseError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&content)
    }

    /// Attach a follow-up rule
    pub fn with_follow_up<I, S>(mut self, key: &str, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let questions: Vec<String> = questions.into_iter().map(Into::into).collect();
        self.follow_up = if questions.is_empty() {
            None
        } else {
            Some(FollowUp { key: normalize(key), questions })
        };
        self
    }

    /// Insert a phrase, replacing any previous replies for the same key
    pub fn insert<I, S>(&mut self, phrase: &str, replies: I) -> Result<(), PhraseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = normalize(phrase);
        if key.is_empty() {
            return Err(PhraseError::EmptyPhrase { phrase: phrase.to_string() });
        }

        let replies: Vec<String> = replies.into_iter().map(Into::into).collect();
        if replies.is_empty() {
            return Err(PhraseError::EmptyReplies { phrase: phrase.to_string() });
        }

        self.entries.insert(key, replies);
        Ok(())
    }

    /// Candidate replies for a normalized phrase
    pub fn lookup(&self, normalized: &str) -> Option<&[String]> {
        self.entries.get(normalized).map(Vec::as_slice)
    }

    /// Follow-up questions if `normalized` is the follow-up key
    pub fn follow_up_for(&self, normalized: &str) -> Option<&[String]> {
        self.follow_up
            .as_ref()
            .filter(|follow_up| follow_up.key == normalized)
            .map(|follow_up| follow_up.questions.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static BUILTIN: Lazy<PhraseTable> = Lazy::new(|| {
    let entries = BUILTIN_PHRASES
        .iter()
        .map(|(phrase, replies)| {
            (normalize(phrase), replies.iter().map(|reply| reply.to_string()).collect())
        })
        .collect();

    PhraseTable { entries, follow_up: None }.with_follow_up(FOLLOW_UP_KEY, FOLLOW_UP_QUESTIONS)
});

/// Telugu phrases paired with their Latin transliterations
const BUILTIN_PHRASES: &[(&str, &[&str])] = &[
    ("హలో", &["హాయ్! మీ రోజు ఎలా ఉంది?", "హలో! మీరు ఎలా ఉన్నారు?", "హలో! మీకు ఎలా సహాయం చేయగలను?"]),
    ("hello", &["హాయ్! మీ రోజు ఎలా ఉంది?", "హలో! మీరు ఎలా ఉన్నారు?", "హలో! మీకు ఎలా సహాయం చేయగలను?"]),
    ("హాయ్", &["హాయ్! మీరు ఎలా ఉన్నారు?"]),
    ("hi", &["హాయ్! మీరు ఎలా ఉన్నారు?"]),
    ("మీరు ఎలా ఉన్నారు", &["నేను బాగా ఉన్నాను! మీరు ఎలా ఉన్నారు?"]),
    ("meeru ela unnaru", &["నేను బాగా ఉన్నాను! మీరు ఎలా ఉన్నారు?"]),
    ("ఎలా ఉన్నావ్", &["నేను బాగా ఉన్నాను! మీరు ఎలా ఉన్నారు?"]),
    ("ela unnav", &["నేను బాగా ఉన్నాను! మీరు ఎలా ఉన్నారు?"]),
    ("మీ పేరు ఏమిటి", &["నా పేరు తెలుగుబాట్!"]),
    ("mee peru emiti", &["నా పేరు తెలుగుబాట్!"]),
    ("మీ రోజు ఎలా ఉంది", &["నా రోజు బాగుంది! మీది?"]),
    ("mee roju ela undi", &["నా రోజు బాగుంది! మీది?"]),
    ("బాగున్నావా", &["అవును! మీరు ఎలా ఉన్నారు?"]),
    ("bagunnava", &["అవును! మీరు ఎలా ఉన్నారు?"]),
    ("ఎమి చేస్తున్నావు", &["ఇప్పుడే మీతో మాట్లాడుతున్నాను!", "మీ ప్రశ్నకు సమాధానం ఇవ్వడానికి సిద్ధంగా ఉన్నాను!"]),
    ("em chestunnav", &["మీతో మాట్లాడుతున్నాను!", "ఇప్పుడే రిలాక్స్ అవుతున్నాను."]),
    ("నువ్వెవరు", &["నేను తెలుగుబాట్! మీకు సహాయం చేయడానికి ఇక్కడ ఉన్నాను."]),
    ("nuvveru", &["నేను తెలుగుబాట్! మీకు సహాయం చేయడానికి ఇక్కడ ఉన్నాను."]),
    ("ధన్యవాదాలు", &["స్వాగతం! మీకు ఎప్పుడైనా సహాయం చేసేందుకు సిద్ధంగా ఉన్నాను."]),
    ("thanks", &["స్వాగతం! ఎప్పుడైనా సాయం కావాలంటే చెప్పండి."]),
    ("సాయపడతావా", &["ఖచ్చితంగా! ఏం కావాలో చెప్పండి."]),
    ("saayapadutava", &["ఖచ్చితంగా! ఏం కావాలో చెప్పండి."]),
    ("ఎంత గంటయ్యింది", &["క్షమించండి, నాకు సమయం తెలియదు. కానీ మీరు ఫోన్ చూడండి 😅"]),
    ("time enta", &["క్షమించండి, నాకు సమయం తెలియదు. కానీ మీరు ఫోన్ చూడండి 😅"]),
    ("నీకు తెలుగు వచ్చా", &["అవును! నాకు తెలుగు చాలా బాగొచ్చును!"]),
    ("neeku telugu vaccha", &["అవును! నాకు తెలుగు చాలా బాగొచ్చును!"]),
    ("నీకు ఇంగ్లీష్ వచ్చా", &["అవును, నాకు ఇంగ్లీష్ కూడా వచ్చును."]),
    ("neeku english vaccha", &["అవును, నాకు ఇంగ్లీష్ కూడా వచ్చును."]),
    ("శుభోదయం", &["శుభోదయం! మీ రోజు ఆనందంగా సాగాలని కోరుకుంటున్నాను."]),
    ("good morning", &["శుభోదయం! మీ రోజు ఆనందంగా సాగాలని కోరుకుంటున్నాను."]),
    ("శుభసంధ్యా", &["శుభసంధ్యా! ఈ రోజు ఎలా ఉంది?"]),
    ("good evening", &["శుభసంధ్యా! ఈ రోజు ఎలా ఉంది?"]),
    ("ఎం చేస్తున్నావ్", &["మీతో మాట్లాడుతున్నాను!", "ఇప్పుడే రిలాక్స్ అవుతున్నాను."]),
    ("బ్రేక్\u{200c}ఫాస్ట్ చేశావా", &["ఓ అవును! మీరు చేశారా?"]),
    ("breakfast chesava", &["ఓ అవును! మీరు చేశారా?"]),
    ("మీలో బిజీనా", &["కొంచెం. కానీ మీకోసం టైమ్ ఉంది!"]),
    ("are you busy", &["కొంచెం. కానీ మీకోసం టైమ్ ఉంది!"]),
    ("ఒక జోక్ చెప్తావా", &["ఎందుకు కంప్యూటర్ చింతించదు? ఎందుకంటే అది వైరస్\u{200c}లను తొలగించగలదు! 😂"]),
    ("cheppu oka joke", &["పెన driveకి ఎందుకు కలవరంగా ఉంది? ఎందుకంటే అది 'full' అయిపోయింది! 😄"]),
    ("హాస్యం చెప్తావా", &["పుస్తకం జైలుకు ఎందుకు వెళ్ళింది? ఎందుకంటే అది 'cover' లో దాచబడింది! 😂"]),
    ("hasyam cheppu", &["సార్ అంటే ఎవరంటే... క్లాస్\u{200c}లోకి వచ్చి ప్రశ్నలే అడిగే వాడు! 😆"]),
    ("నా మనస్సు బాదగా ఉంది", &["బాధగా ఉన్నప్పుడు మాట్లాడటం మంచిదే. నేను ఇక్కడ ఉన్నాను."]),
    ("naku badhaga undi", &["ఇది తాత్కాలికమే. మీరు బలంగా ఉన్నారు."]),
    ("నాకు ఒంటరిగా ఉంది", &["మీరు ఒంటరిగా లేరండి. నేను ఇక్కడ ఉన్నాను మీతో మాట్లాడడానికి."]),
    ("naku ontariga undi", &["మీరు ఒంటరిగా లేరండి. నేను ఇక్కడ ఉన్నాను మీతో మాట్లాడడానికి."]),
    ("నాకు ఏం చేయాలో అర్థం కావడం లేదు", &["ఆలస్యం చేయకండి, ఒక్కసారి బ్రేక్ తీసుకోండి. తర్వాత తేలికగా అనిపిస్తుంది."]),
    ("naku em cheyyalo ardham kavatam ledu", &["తగినంత విశ్రాంతి తీసుకోండి. నెమ్మదిగా ముందుకెళ్ళండి."]),
    ("నాకు భయం గా ఉంది", &["నిజమైన ధైర్యం అంటే భయాన్ని అంగీకరించడం. మీరు ధైర్యంగా ఉన్నారు!"]),
    ("naku bhayam ga undi", &["చింతించకండి. మీకు సహాయం అందుతుంది. మీరు బలంగా ఉన్నారు."]),
    ("నాకు సహాయం కావాలి", &["తప్పకుండా! ఏ విషయమై సహాయం కావాలి?"]),
    ("naku sahayam kavali", &["చెప్పండి, నేను మీకు సహాయం చేస్తాను."]),
    ("మీరు నాకు సహాయం చేస్తారా", &["అవును, నేనిక్కడే ఉన్నాను సహాయం చేయడానికి."]),
    ("meeru naaku sahayam chestara", &["అవును, ఏ విషయమై సహాయం కావాలో చెప్పండి."]),
    ("hlo", &["హలో! మీకు ఎలా సహాయం చేయగలను?"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = PhraseTable::builtin();
        assert_eq!(table.len(), BUILTIN_PHRASES.len());
        assert_eq!(table.lookup("hello").map(<[String]>::len), Some(3));
        assert_eq!(table.lookup("hello"), table.lookup("హలో"));
        assert_eq!(table.lookup("mee peru emiti").unwrap(), ["నా పేరు తెలుగుబాట్!"]);
        assert!(table.lookup("Hello").is_none());
    }

    #[test]
    fn test_builtin_replies_are_never_empty() {
        for (phrase, replies) in BUILTIN_PHRASES {
            assert!(!replies.is_empty(), "{phrase} has no replies");
            assert_eq!(normalize(phrase), *phrase, "{phrase} is not normalized");
        }
    }

    #[test]
    fn test_follow_up_only_for_its_key() {
        let table = PhraseTable::builtin();
        assert_eq!(table.follow_up_for("hlo").unwrap(), FOLLOW_UP_QUESTIONS);
        assert!(table.follow_up_for("hello").is_none());
    }

    #[test]
    fn test_insert_normalizes_and_validates() {
        let mut table = PhraseTable::new();
        table.insert("  How Are You?! ", ["fine"]).unwrap();
        assert_eq!(table.lookup("how are you").unwrap(), ["fine"]);

        let err = table.insert("anything", Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, PhraseError::EmptyReplies { .. }));

        let err = table.insert("?!", ["x"]).unwrap_err();
        assert!(matches!(err, PhraseError::EmptyPhrase { .. }));
    }

    #[test]
    fn test_from_json() {
        let table = PhraseTable::from_json(r#"{"Hlo": ["హలో!"], "bye": ["వీడ్కోలు!", "మళ్ళీ కలుద్దాం!"]}"#)
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("bye").unwrap().len(), 2);
        assert!(table.follow_up_for("hlo").is_some());

        assert!(PhraseTable::from_json(r#"{"bye": []}"#).is_err());
        assert!(PhraseTable::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_how_are_you_key_is_telugu_script() {
        let table = PhraseTable::builtin();
        assert!(table.lookup("ఎలా ఉన్నావ్").is_some());
        // Tamil vowel sign mixed into the word
        assert!(table.lookup("ఎலா ఉన్నావ్").is_none());
    }
}
