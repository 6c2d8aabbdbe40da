use serde::{Deserialize, Serialize};

use crate::lexicon::PARAGRAPH_BREAK;

/// Universal part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    Space,
    X,
}

impl Pos {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pos::Adj => "ADJ",
            Pos::Adp => "ADP",
            Pos::Adv => "ADV",
            Pos::Aux => "AUX",
            Pos::Cconj => "CCONJ",
            Pos::Det => "DET",
            Pos::Intj => "INTJ",
            Pos::Noun => "NOUN",
            Pos::Num => "NUM",
            Pos::Part => "PART",
            Pos::Pron => "PRON",
            Pos::Propn => "PROPN",
            Pos::Punct => "PUNCT",
            Pos::Sconj => "SCONJ",
            Pos::Sym => "SYM",
            Pos::Verb => "VERB",
            Pos::Space => "SPACE",
            Pos::X => "X",
        }
    }
}

impl From<&str> for Pos {
    fn from(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "ADJ" => Pos::Adj,
            "ADP" => Pos::Adp,
            "ADV" => Pos::Adv,
            "AUX" => Pos::Aux,
            "CCONJ" | "CONJ" => Pos::Cconj,
            "DET" => Pos::Det,
            "INTJ" => Pos::Intj,
            "NOUN" => Pos::Noun,
            "NUM" => Pos::Num,
            "PART" => Pos::Part,
            "PRON" => Pos::Pron,
            "PROPN" => Pos::Propn,
            "PUNCT" => Pos::Punct,
            "SCONJ" => Pos::Sconj,
            "SYM" => Pos::Sym,
            "VERB" => Pos::Verb,
            "SPACE" => Pos::Space,
            _ => Pos::X,
        }
    }
}

impl From<String> for Pos {
    fn from(tag: String) -> Self {
        Pos::from(tag.as_str())
    }
}

impl From<Pos> for String {
    fn from(pos: Pos) -> Self {
        pos.as_str().to_string()
    }
}

/// Dependency relation of a token to its head.
///
/// Both spaCy (`nsubjpass`) and Universal Dependencies (`nsubj:pass`)
/// spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Dep {
    Root,
    Nsubj,
    Nsubjpass,
    Csubj,
    Csubjpass,
    Aux,
    Auxpass,
    Neg,
    Compound,
    Conj,
    Cc,
    Dobj,
    Ccomp,
    Punct,
    Other(String),
}

impl Dep {
    /// Active subject relations, the ones that can name a speaker.
    pub fn is_active_subject(&self) -> bool {
        matches!(self, Dep::Nsubj | Dep::Csubj)
    }

    /// Relations that belong to a cue verb phrase.
    pub fn is_verb_modifier(&self) -> bool {
        matches!(self, Dep::Aux | Dep::Auxpass | Dep::Neg)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Dep::Root => "ROOT",
            Dep::Nsubj => "nsubj",
            Dep::Nsubjpass => "nsubjpass",
            Dep::Csubj => "csubj",
            Dep::Csubjpass => "csubjpass",
            Dep::Aux => "aux",
            Dep::Auxpass => "auxpass",
            Dep::Neg => "neg",
            Dep::Compound => "compound",
            Dep::Conj => "conj",
            Dep::Cc => "cc",
            Dep::Dobj => "dobj",
            Dep::Ccomp => "ccomp",
            Dep::Punct => "punct",
            Dep::Other(label) => label,
        }
    }
}

impl From<&str> for Dep {
    fn from(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "root" => Dep::Root,
            "nsubj" => Dep::Nsubj,
            "nsubjpass" | "nsubj:pass" => Dep::Nsubjpass,
            "csubj" => Dep::Csubj,
            "csubjpass" | "csubj:pass" => Dep::Csubjpass,
            "aux" => Dep::Aux,
            "auxpass" | "aux:pass" => Dep::Auxpass,
            "neg" => Dep::Neg,
            "compound" => Dep::Compound,
            "conj" => Dep::Conj,
            "cc" => Dep::Cc,
            "dobj" | "obj" => Dep::Dobj,
            "ccomp" => Dep::Ccomp,
            "punct" => Dep::Punct,
            _ => Dep::Other(label.to_string()),
        }
    }
}

impl From<String> for Dep {
    fn from(label: String) -> Self {
        Dep::from(label.as_str())
    }
}

impl From<Dep> for String {
    fn from(dep: Dep) -> Self {
        dep.as_str().to_string()
    }
}

/// A single annotated token.
///
/// `idx` is the byte offset of the token's text within the document text.
/// Tokens are immutable once the provider has produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Position in the document's token sequence
    pub i: usize,
    /// Byte offset of the first character
    pub idx: usize,
    pub text: String,
    /// Whether the token is followed by whitespace
    pub whitespace: bool,
    pub pos: Pos,
    pub lemma: String,
    pub dep: Dep,
    /// Index of the syntactic head; a root heads itself
    pub head: usize,
    /// Index of the containing sentence
    pub sent: usize,
    pub is_quote: bool,
}

impl Token {
    /// End offset (exclusive).
    pub fn end_char(&self) -> usize {
        self.idx + self.text.len()
    }

    /// Number of characters in the token text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn text_with_ws(&self) -> String {
        if self.whitespace {
            format!("{} ", self.text)
        } else {
            self.text.clone()
        }
    }

    /// Paragraph breaks are whitespace tokens starting with a newline.
    pub fn is_paragraph_break(&self) -> bool {
        self.text.starts_with('\n')
    }

    /// The quotation mark code point, for single-character quote tokens and
    /// paragraph breaks.
    pub fn code_point(&self) -> Option<u32> {
        if self.is_paragraph_break() {
            return Some(PARAGRAPH_BREAK);
        }
        if !self.is_quote {
            return None;
        }
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c as u32),
            _ => None,
        }
    }

    pub fn is_pronoun(&self) -> bool {
        self.pos == Pos::Pron
    }

    pub fn is_punct(&self) -> bool {
        self.pos == Pos::Punct
            || (!self.text.is_empty()
                && self
                    .text
                    .chars()
                    .all(|c| !c.is_alphanumeric() && !c.is_whitespace()))
    }

    /// Title case check: every cased run starts with an uppercase letter and
    /// continues in lowercase, and at least one cased character exists.
    pub fn is_title(&self) -> bool {
        let mut previous_is_cased = false;
        let mut cased = false;
        for c in self.text.chars() {
            if c.is_uppercase() {
                if previous_is_cased {
                    return false;
                }
                previous_is_cased = true;
                cased = true;
            } else if c.is_lowercase() {
                if !previous_is_cased {
                    return false;
                }
                previous_is_cased = true;
                cased = true;
            } else {
                previous_is_cased = false;
            }
        }
        cased
    }
}
