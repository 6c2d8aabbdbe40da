//! An [`AnnotationProvider`] that replays annotations stored as CoNLL-U.
//!
//! The document text is rebuilt from the `FORM` column and `SpaceAfter=No`.
//! Besides the standard columns the reader understands a few `MISC` keys:
//!
//! - `NER=B-PERSON`, `NER=I-PERSON`, `NER=O`: BIO entity tags
//! - `Coref=(3`, `Coref=3)`, `Coref=(3)`: coreference mention brackets,
//!   repeatable on one token
//!
//! and these comments:
//!
//! - `# newpar`: the sentence starts a new paragraph
//! - `# base_model = …`, `# coref_model = …`: models behind the annotations

use tracing::debug;

use crate::doc::{CharSpan, Dep, Doc, Pos, Token};
use crate::error::{AttributionError, Result};
use crate::lexicon::is_quote_char;
use crate::provider::AnnotationProvider;

const COLUMNS: usize = 10;

#[derive(Debug, Clone)]
pub struct ConlluProvider {
    doc: Doc,
    clusters: Vec<Vec<CharSpan>>,
    base_model: Option<String>,
    coref_model: Option<String>,
}

struct Row {
    line: usize,
    form: String,
    lemma: String,
    upos: String,
    head: usize,
    deprel: String,
    misc: Vec<(String, String)>,
}

impl Row {
    fn misc_values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.misc
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn space_after(&self) -> bool {
        !self.misc_values("SpaceAfter").any(|v| v == "No")
    }
}

#[derive(Default)]
struct Builder {
    text: String,
    tokens: Vec<Token>,
    ents: Vec<(usize, usize, String)>,
    open_entity: Option<(usize, String)>,
    /// Cluster ids in order of first mention, with their closed mentions.
    clusters: Vec<(String, Vec<CharSpan>)>,
    /// Mentions opened but not yet closed: `(cluster id, start offset)`.
    open_mentions: Vec<(String, usize)>,
    sentences: usize,
    newpar: bool,
}

impl Builder {
    fn drop_trailing_space(&mut self) {
        if let Some(last) = self.tokens.last_mut() {
            if last.whitespace {
                last.whitespace = false;
                self.text.pop();
            }
        }
    }

    fn paragraph_break(&mut self) {
        let Some(previous_sent) = self.tokens.last().map(|t| t.sent) else {
            return;
        };
        self.drop_trailing_space();
        let i = self.tokens.len();
        let idx = self.text.len();
        self.text.push('\n');
        self.tokens.push(Token {
            i,
            idx,
            text: "\n".to_string(),
            whitespace: false,
            pos: Pos::Space,
            lemma: "\n".to_string(),
            dep: Dep::Other("dep".to_string()),
            head: i,
            sent: previous_sent,
            is_quote: false,
        });
    }

    fn close_entity(&mut self, end: usize) {
        if let Some((start, label)) = self.open_entity.take() {
            self.ents.push((start, end, label));
        }
    }

    fn sentence(&mut self, rows: Vec<Row>) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        if std::mem::take(&mut self.newpar) {
            self.paragraph_break();
        }
        let sentence_start = self.tokens.len();
        let sent = self.sentences;

        for (offset, row) in rows.iter().enumerate() {
            let i = sentence_start + offset;
            let head = match row.head {
                0 => i,
                h if h <= rows.len() => sentence_start + h - 1,
                h => {
                    return Err(AttributionError::Conllu {
                        line: row.line,
                        message: format!("head {h} outside a sentence of {} words", rows.len()),
                    })
                }
            };
            let idx = self.text.len();
            self.text.push_str(&row.form);
            let whitespace = row.space_after();
            if whitespace {
                self.text.push(' ');
            }
            self.tokens.push(Token {
                i,
                idx,
                text: row.form.clone(),
                whitespace,
                pos: Pos::from(row.upos.as_str()),
                lemma: row.lemma.clone(),
                dep: Dep::from(row.deprel.as_str()),
                head,
                sent,
                is_quote: !row.form.is_empty() && row.form.chars().all(is_quote_char),
            });

            self.tag_entity(row, i);
            self.tag_mentions(row, idx)?;
        }
        self.close_entity(self.tokens.len());
        self.sentences += 1;
        Ok(())
    }

    fn tag_entity(&mut self, row: &Row, i: usize) {
        let tag = row.misc_values("NER").next().unwrap_or("O");
        let (prefix, label) = parse_bio_tag(tag);
        match prefix {
            "B" => {
                self.close_entity(i);
                self.open_entity = Some((i, label.to_string()));
            }
            "I" => {
                let continues = matches!(&self.open_entity, Some((_, open)) if open == label);
                if !continues {
                    self.close_entity(i);
                    self.open_entity = Some((i, label.to_string()));
                }
            }
            _ => self.close_entity(i),
        }
    }

    fn tag_mentions(&mut self, row: &Row, idx: usize) -> Result<()> {
        let end = idx + row.form.len();
        for value in row.misc_values("Coref") {
            let opens = value.starts_with('(');
            let closes = value.ends_with(')');
            let id = value.trim_start_matches('(').trim_end_matches(')');
            if id.is_empty() || !(opens || closes) {
                return Err(AttributionError::Conllu {
                    line: row.line,
                    message: format!("malformed coreference bracket {value:?}"),
                });
            }
            if opens {
                self.open_mentions.push((id.to_string(), idx));
                if !self.clusters.iter().any(|(known, _)| known == id) {
                    self.clusters.push((id.to_string(), Vec::new()));
                }
            }
            if closes {
                let position = self
                    .open_mentions
                    .iter()
                    .rposition(|(open, _)| open == id)
                    .ok_or_else(|| AttributionError::Conllu {
                        line: row.line,
                        message: format!("coreference mention {id} closed before it was opened"),
                    })?;
                let (_, start) = self.open_mentions.remove(position);
                if let Some((_, members)) = self.clusters.iter_mut().find(|(known, _)| known == id) {
                    members.push(CharSpan::new(start, end));
                }
            }
        }
        Ok(())
    }
}

fn parse_bio_tag(tag: &str) -> (&str, &str) {
    if tag == "O" || tag == "_" {
        return ("O", "");
    }
    match tag.find('-') {
        Some(pos) => (&tag[..pos], &tag[pos + 1..]),
        None => ("B", tag),
    }
}

fn parse_row(line: &str, line_num: usize) -> Result<Option<Row>> {
    let columns: Vec<&str> = if line.contains('\t') {
        line.split('\t').collect()
    } else {
        line.split_whitespace().collect()
    };
    if columns.len() != COLUMNS {
        return Err(AttributionError::Conllu {
            line: line_num,
            message: format!("expected {COLUMNS} columns, found {}", columns.len()),
        });
    }
    // Multiword token ranges and empty nodes carry no syntactic word.
    if columns[0].contains('-') || columns[0].contains('.') {
        return Ok(None);
    }
    if columns[0].parse::<usize>().is_err() {
        return Err(AttributionError::Conllu {
            line: line_num,
            message: format!("invalid word id {:?}", columns[0]),
        });
    }
    let head = match columns[6] {
        "_" => 0,
        value => value.parse::<usize>().map_err(|_| AttributionError::Conllu {
            line: line_num,
            message: format!("invalid head {value:?}"),
        })?,
    };
    let misc = columns[9]
        .split('|')
        .filter(|entry| *entry != "_" && !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (entry.to_string(), String::new()),
        })
        .collect();
    let form = columns[1].to_string();
    let lemma = match columns[2] {
        "_" => form.to_lowercase(),
        lemma => lemma.to_string(),
    };

    Ok(Some(Row {
        line: line_num,
        form,
        lemma,
        upos: columns[3].to_string(),
        head,
        deprel: columns[7].to_string(),
        misc,
    }))
}

fn comment_value<'a>(comment: &'a str, key: &str) -> Option<&'a str> {
    let (name, value) = comment.split_once('=')?;
    (name.trim() == key).then(|| value.trim())
}

impl ConlluProvider {
    /// Parses a CoNLL-U document.
    pub fn parse(input: &str) -> Result<Self> {
        let mut builder = Builder::default();
        let mut rows = Vec::new();
        let mut base_model = None;
        let mut coref_model = None;
        let mut last_line = 0;

        for (line_num, line) in input.lines().enumerate() {
            let line_num = line_num + 1;
            last_line = line_num;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                builder.sentence(std::mem::take(&mut rows))?;
                continue;
            }

            if let Some(comment) = trimmed.strip_prefix('#') {
                let comment = comment.trim();
                if comment == "newpar" || comment.starts_with("newpar ") {
                    builder.newpar = true;
                } else if let Some(model) = comment_value(comment, "base_model") {
                    base_model = Some(model.to_string());
                } else if let Some(model) = comment_value(comment, "coref_model") {
                    coref_model = Some(model.to_string());
                }
                continue;
            }

            if let Some(row) = parse_row(trimmed, line_num)? {
                rows.push(row);
            }
        }
        builder.sentence(rows)?;
        builder.drop_trailing_space();

        if let Some((id, _)) = builder.open_mentions.first() {
            return Err(AttributionError::Conllu {
                line: last_line,
                message: format!("coreference mention {id} is never closed"),
            });
        }

        let clusters: Vec<Vec<CharSpan>> = builder
            .clusters
            .into_iter()
            .map(|(_, mut members)| {
                members.sort();
                members
            })
            .collect();
        let doc = Doc::from_parts(builder.text, builder.tokens, builder.ents)?;
        debug!(
            tokens = doc.len(),
            sentences = doc.sents().len(),
            entities = doc.ents().len(),
            clusters = clusters.len(),
            "parsed CoNLL-U document"
        );

        Ok(Self {
            doc,
            clusters,
            base_model,
            coref_model,
        })
    }

    /// The reconstructed document text.
    pub fn text(&self) -> &str {
        self.doc.text()
    }

    pub fn doc(&self) -> &Doc {
        &self.doc
    }

    fn check_text(&self, text: &str) -> Result<()> {
        if text == self.doc.text() {
            Ok(())
        } else {
            Err(AttributionError::ProviderMismatch {
                message: format!(
                    "annotations cover {:?}, asked for {:?}",
                    self.doc.text(),
                    text
                ),
            })
        }
    }
}

impl AnnotationProvider for ConlluProvider {
    fn tokenize_and_annotate(&self, text: &str) -> Result<Doc> {
        self.check_text(text)?;
        Ok(self.doc.clone())
    }

    fn coreference_clusters(&self, text: &str) -> Result<Vec<Vec<CharSpan>>> {
        self.check_text(text)?;
        Ok(self.clusters.clone())
    }

    fn base_model(&self) -> Option<&str> {
        self.base_model.as_deref()
    }

    fn coref_model(&self) -> Option<&str> {
        self.coref_model.as_deref()
    }
}
