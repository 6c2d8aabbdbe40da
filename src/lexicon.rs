//! Fixed word lists and thresholds used by quote detection and matching.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Quotes with fewer whitespace-separated words than this are ignored.
pub const MIN_QUOTE_LENGTH: usize = 3;

/// Maximum distance (in offset units) between a speaker and a cluster member
/// start, and between their sentence starts, for the two to be equivalent.
pub const MIN_SPEAKER_DIFF: usize = 5;

/// Code point of a paragraph break, which may close a quote.
pub const PARAGRAPH_BREAK: u32 = 10;

/// Label of person entities.
pub const PERSON_LABEL: &str = "PERSON";

/// Characters a provider treats as quotation marks.
pub const QUOTE_CHARS: &[char] = &[
    '"', '\'', '`', '«', '»', '‘', '’', '‚', '‛', '“', '”', '„', '‟', '‹', '›', '❮', '❯', '「',
    '」', '『', '』', '〝', '〞', '＂',
];

/// Double quotation marks, used by text prep.
pub const DOUBLE_QUOTES: &[char] = &['‹', '「', '」', '»', '"', '„', '『', '”', '‚', '』', '›', '«', '“'];

/// Every quotation mark text prep considers when deciding whether a
/// paragraph opens a quote.
pub const ALL_QUOTES: &[char] = &[
    '‹', '「', '`', '»', '」', '‘', '"', '„', '›', '”', '‚', '’', '\'', '』', '『', '«', '“',
];

/// Compatible `(open, close)` code point pairs.
///
/// Straight, curly, low-9, guillemet and CJK styles, degenerate straight-quote
/// closers, and paragraph breaks as implicit closers.
pub const QUOTATION_MARK_PAIRS: &[(u32, u32)] = &[
    (34, 34),
    (39, 39),
    (96, 8217),
    (171, 187),
    (8216, 8217),
    (8218, 8217),
    (8220, 8221),
    (8222, 8221),
    (8249, 8250),
    (12300, 12301),
    (12302, 12303),
    (8220, 34),
    (8216, 34),
    (96, 34),
    (171, 34),
    (8249, 34),
    (12300, 34),
    (12302, 34),
    (8222, 34),
    (8218, 34),
    (34, 8221),
    (34, 8217),
    (34, 10),
    (39, 10),
    (96, 10),
    (171, 10),
    (8216, 10),
    (8218, 10),
    (8249, 10),
];

static QUOTATION_MARK_PAIR_SET: Lazy<HashSet<(u32, u32)>> =
    Lazy::new(|| QUOTATION_MARK_PAIRS.iter().copied().collect());

/// Returns true if `open` may be closed by `close`.
pub fn is_compatible_pair(open: u32, close: u32) -> bool {
    QUOTATION_MARK_PAIR_SET.contains(&(open, close))
}

/// Lemmas of verbs that introduce reported speech.
pub const REPORTING_VERBS: &[&str] = &[
    "according", "accuse", "acknowledge", "add", "admit", "agree", "allege", "announce", "argue",
    "ask", "assert", "believe", "blame", "charge", "cite", "claim", "complain", "concede",
    "conclude", "confirm", "contend", "continue", "criticize", "declare", "decline", "deny",
    "describe", "disagree", "disclose", "estimate", "explain", "fear", "hope", "insist",
    "maintain", "mention", "note", "observe", "order", "post", "predict", "promise", "read",
    "recall", "recommend", "reply", "report", "say", "scream", "state", "stress", "suggest",
    "tell", "testify", "think", "tweet", "urge", "warn", "worry", "write",
];

static REPORTING_VERB_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| REPORTING_VERBS.iter().copied().collect());

/// Returns true if `lemma` is a reporting verb.
pub fn is_reporting_verb(lemma: &str) -> bool {
    REPORTING_VERB_SET.contains(lemma)
}

/// English stop words.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "both", "bottom", "but", "by", "call", "can", "cannot",
    "ca", "could", "did", "do", "does", "doing", "done", "down", "due", "during", "each",
    "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "even", "ever",
    "every", "everyone", "everything", "everywhere", "except", "few", "fifteen", "fifty",
    "first", "five", "for", "former", "formerly", "forty", "four", "from", "front", "full",
    "further", "get", "give", "go", "had", "has", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "if", "in", "indeed", "into", "is", "it", "its",
    "itself", "just", "keep", "last", "latter", "latterly", "least", "less", "made", "make",
    "many", "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most", "mostly",
    "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
    "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing",
    "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or",
    "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "quite", "rather", "re", "really", "regarding", "same",
    "say", "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should",
    "show", "side", "since", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "take", "ten", "than", "that",
    "the", "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "third", "this", "those", "though",
    "three", "through", "throughout", "thru", "thus", "to", "together", "too", "top", "toward",
    "towards", "twelve", "twenty", "two", "under", "until", "up", "unless", "upon", "us",
    "used", "using", "various", "very", "via", "was", "we", "well", "were", "what", "whatever",
    "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein",
    "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole",
    "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves", "n't", "'d", "'ll", "'m", "'re", "'s", "'ve",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Case-insensitive stop word lookup.
pub fn is_stop_word(text: &str) -> bool {
    STOP_WORD_SET.contains(text.to_lowercase().as_str())
}

/// Returns true if `c` is a quotation mark character.
pub fn is_quote_char(c: char) -> bool {
    QUOTE_CHARS.contains(&c)
}
