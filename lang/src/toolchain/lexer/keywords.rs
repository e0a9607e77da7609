//! The ChucK keyword vocabulary, and the lookup interface the scanner uses to classify words.
//!
//! The words are partitioned into [KEYWORD_SET_COUNT] sets, following the keyword-set contract
//! of C-family editor lexers:
//!
//! | index | set                         | style                 |
//! |-------|-----------------------------|-----------------------|
//! | 0     | [KeywordSet::Primary]       | keyword               |
//! | 1     | [KeywordSet::Types]         | primitive type        |
//! | 2     | [KeywordSet::Classes]       | builtin class         |
//! | 3     | [KeywordSet::DocComment]    | doc comment keyword   |
//!
//! A word belongs to at most one set. Words are matched case-sensitively.

use std::collections::HashMap;

/// The number of keyword sets a [KeywordLookup] exposes.
pub const KEYWORD_SET_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KeywordSet {
    /// Control flow, declarations, and the special values of the language, `now` for example.
    Primary = 0,

    /// Primitive type names, such as `dur` and `float`.
    Types = 1,

    /// Classes built into the ChucK virtual machine, such as `SinOsc` and `Std`.
    Classes = 2,

    /// Words recognized after an `@` inside a doc comment.
    DocComment = 3,
}

assert_eq_size!(KeywordSet, u8);

impl KeywordSet {
    pub const ALL: [KeywordSet; KEYWORD_SET_COUNT] =
        [KeywordSet::Primary, KeywordSet::Types, KeywordSet::Classes, KeywordSet::DocComment];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<KeywordSet> {
        KeywordSet::ALL.get(index).copied()
    }

    /// Doc comment keywords only have meaning inside doc comments. All other sets classify
    /// identifiers in code.
    pub fn applies_to_code(self) -> bool {
        self != KeywordSet::DocComment
    }
}

/// The capability the generic scanner consults to classify words.
pub trait KeywordLookup {
    /// The space-delimited words of the set at `index`, or an empty string for any index the
    /// language doesn't use.
    fn keywords(&self, index: usize) -> &str;

    /// The set containing `word`, if any.
    fn lookup(&self, word: &str) -> Option<KeywordSet>;
}

/// A lookup with no keywords at all, every word scans as a plain identifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoKeywords;

impl KeywordLookup for NoKeywords {
    fn keywords(&self, _index: usize) -> &str {
        ""
    }

    fn lookup(&self, _word: &str) -> Option<KeywordSet> {
        None
    }
}

pub(crate) const PRIMARY_KEYWORDS: &[&str] = &[
    // Control flow.
    "if", "else", "while", "until", "for", "repeat", "do", "loop", "break", "continue", "return",
    "switch", "case", "default",
    // Declarations and modifiers.
    "class", "extends", "implements", "interface", "public", "private", "protected", "static",
    "pure", "abstract", "const", "global", "fun", "function", "operator", "new", "spork",
    "typeof", "instanceof", "same",
    // Special values.
    "now", "me", "this", "super", "true", "false", "maybe", "null", "NULL", "pi", "dac", "adc",
    "blackhole", "chout", "cherr",
    // Durations.
    "samp", "ms", "second", "minute", "hour", "day", "week", "eon",
];

pub(crate) const TYPE_KEYWORDS: &[&str] = &[
    "int", "float", "time", "dur", "void", "complex", "polar", "vec2", "vec3", "vec4", "string",
    "auto",
];

pub(crate) const CLASS_KEYWORDS: &[&str] = &[
    // Language and system.
    "Object", "Array", "Event", "Shred", "Type", "Std", "Math", "Machine", "RegEx", "Reflect",
    "StringTokenizer", "ConsoleInput", "IO", "FileIO", "SerialIO", "KBHit", "CKDoc",
    // Unit generators.
    "UGen", "UGen_Multi", "UGen_Stereo", "UAna", "Chugen", "Chugraph", "Chubgraph", "Gain",
    "Pan2", "Mix2", "Step", "Impulse", "Noise", "CNoise", "Osc", "Phasor", "SinOsc", "TriOsc",
    "SawOsc", "SqrOsc", "PulseOsc", "Blit", "BlitSaw", "BlitSquare", "Envelope", "ADSR",
    "Delay", "DelayL", "DelayA", "DelayP", "Echo", "JCRev", "NRev", "PRCRev", "GVerb", "Chorus",
    "PitShift", "Modulate", "SubNoise", "Filter", "FilterBasic", "LPF", "HPF", "BPF", "BRF",
    "ResonZ", "BiQuad", "OnePole", "OneZero", "TwoPole", "TwoZero", "PoleZero", "Dyno",
    "HalfRect", "FullRect", "ZeroX", "SndBuf", "SndBuf2", "LiSa", "WvIn", "WvOut", "WvOut2",
    "WaveLoop", "Gen5", "Gen7", "Gen9", "Gen10", "Gen17", "CurveTable", "WarpTable",
    // Instruments.
    "StkInstrument", "FM", "BandedWG", "BeeThree", "BlowBotl", "BlowHole", "Bowed", "Brass",
    "Clarinet", "Flute", "FMVoices", "HevyMetl", "Mandolin", "ModalBar", "Moog", "PercFlut",
    "Rhodey", "Saxofony", "Shakers", "Sitar", "StifKarp", "TubeBell", "VoicForm", "Wurley",
    // Analysis.
    "FFT", "IFFT", "DCT", "IDCT", "RMS", "Centroid", "Flux", "RollOff", "Flip", "UnFlip",
    "Windowing", "ZeroCross", "AutoCorr", "XCorr", "MFCC", "SFM", "Kurtosis", "Chroma",
    // Devices and networking.
    "MidiIn", "MidiOut", "MidiMsg", "MidiFileIn", "Hid", "HidMsg", "OscIn", "OscOut", "OscMsg",
    "OscRecv", "OscSend", "OscEvent",
];

pub(crate) const DOC_COMMENT_KEYWORDS: &[&str] = &[
    "author", "brief", "deprecated", "example", "note", "param", "returns", "see", "since",
    "todo", "version", "warning",
];

/// The words of a set in the static table, by index.
pub(crate) fn static_words(set: KeywordSet) -> &'static [&'static str] {
    match set {
        KeywordSet::Primary => PRIMARY_KEYWORDS,
        KeywordSet::Types => TYPE_KEYWORDS,
        KeywordSet::Classes => CLASS_KEYWORDS,
        KeywordSet::DocComment => DOC_COMMENT_KEYWORDS,
    }
}

/// The ChucK keyword table. Built once from static data and read-only thereafter.
#[derive(Clone, Debug)]
pub struct KeywordTable {
    lists: [String; KEYWORD_SET_COUNT],
    words: HashMap<&'static str, KeywordSet>,
}

assert_impl_all!(KeywordTable: Send, Sync);

impl KeywordTable {
    pub fn new() -> KeywordTable {
        let mut words = HashMap::new();
        for set in KeywordSet::ALL {
            for word in static_words(set) {
                // The first set wins. Duplicates are caught by the table's unit tests.
                words.entry(*word).or_insert(set);
            }
        }
        let lists = KeywordSet::ALL.map(|set| static_words(set).join(" "));
        tracing::trace!(words = words.len(), "built keyword table");
        KeywordTable { lists, words }
    }

    /// Iterates over the words of one set, in table order.
    pub fn words(&self, set: KeywordSet) -> impl Iterator<Item = &'static str> {
        static_words(set).iter().copied()
    }

    pub fn contains(&self, set: KeywordSet, word: &str) -> bool {
        self.words.get(word) == Some(&set)
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        KeywordTable::new()
    }
}

impl KeywordLookup for KeywordTable {
    fn keywords(&self, index: usize) -> &str {
        self.lists.get(index).map(String::as_str).unwrap_or("")
    }

    fn lookup(&self, word: &str) -> Option<KeywordSet> {
        self.words.get(word).copied()
    }
}
