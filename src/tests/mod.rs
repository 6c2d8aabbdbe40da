mod quote_finding;

use crate::{
    AttributionConfig, Attribution, Attributor, ConlluProvider, Dep, Doc, Pos, Token,
};

/// `Burton said, “I love those cats!”`
pub(crate) const BURTON_SAID: &str = "\
# text = Burton said, “I love those cats!”
1\tBurton\tBurton\tPROPN\t_\t_\t2\tnsubj\t_\tNER=B-PERSON|Coref=(0)
2\tsaid\tsay\tVERB\t_\t_\t0\tROOT\t_\tSpaceAfter=No
3\t,\t,\tPUNCT\t_\t_\t2\tpunct\t_\t_
4\t“\t“\tPUNCT\t_\t_\t6\tpunct\t_\tSpaceAfter=No
5\tI\tI\tPRON\t_\t_\t6\tnsubj\t_\t_
6\tlove\tlove\tVERB\t_\t_\t2\tccomp\t_\t_
7\tthose\tthose\tDET\t_\t_\t8\tdet\t_\t_
8\tcats\tcat\tNOUN\t_\t_\t6\tdobj\t_\tSpaceAfter=No
9\t!\t!\tPUNCT\t_\t_\t6\tpunct\t_\tSpaceAfter=No
10\t”\t”\tPUNCT\t_\t_\t6\tpunct\t_\t_
";

/// A document whose tokens are `words`, each its own root in one sentence.
/// Quotation marks and paragraph breaks carry no trailing whitespace.
pub(crate) fn words_doc(words: &[&str]) -> Doc {
    let mut text = String::new();
    let mut tokens = Vec::new();
    for (i, word) in words.iter().enumerate() {
        let is_quote = word.chars().all(crate::lexicon::is_quote_char);
        let is_break = word.starts_with('\n');
        let whitespace = !(is_quote || is_break) && i + 1 < words.len();
        let pos = if is_break {
            Pos::Space
        } else if is_quote || word.chars().all(|c| c.is_ascii_punctuation()) {
            Pos::Punct
        } else {
            Pos::X
        };
        tokens.push(Token {
            i,
            idx: text.len(),
            text: word.to_string(),
            whitespace,
            pos,
            lemma: word.to_lowercase(),
            dep: Dep::Root,
            head: i,
            sent: 0,
            is_quote,
        });
        text.push_str(word);
        if whitespace {
            text.push(' ');
        }
    }
    Doc::from_parts(text, tokens, Vec::new()).unwrap()
}

pub(crate) fn provider(conllu: &str) -> ConlluProvider {
    ConlluProvider::parse(conllu).unwrap()
}

pub(crate) fn doc(conllu: &str) -> Doc {
    provider(conllu).doc().clone()
}

pub(crate) fn attribute_with(conllu: &str, config: AttributionConfig) -> Attribution {
    let provider = provider(conllu);
    Attributor::new(config)
        .attribute(&provider, provider.text())
        .unwrap()
}

pub(crate) fn attribute(conllu: &str) -> Attribution {
    attribute_with(conllu, AttributionConfig::default())
}

pub(crate) fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
