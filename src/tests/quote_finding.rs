use super::{doc, texts, BURTON_SAID};
use crate::quotes::{find_quotes, pair_quotation_marks, Window};
use crate::QuotePair;

const INSISTS_BURTON: &str = "\
# text = \"I love those cats!\" insists Burton. \"Yeah, I absolutely do.\"
1\t\"\t\"\tPUNCT\t_\t_\t3\tpunct\t_\tSpaceAfter=No
2\tI\tI\tPRON\t_\t_\t3\tnsubj\t_\t_
3\tlove\tlove\tVERB\t_\t_\t8\tccomp\t_\t_
4\tthose\tthose\tDET\t_\t_\t5\tdet\t_\t_
5\tcats\tcat\tNOUN\t_\t_\t3\tdobj\t_\tSpaceAfter=No
6\t!\t!\tPUNCT\t_\t_\t3\tpunct\t_\tSpaceAfter=No
7\t\"\t\"\tPUNCT\t_\t_\t3\tpunct\t_\t_
8\tinsists\tinsist\tVERB\t_\t_\t0\tROOT\t_\t_
9\tBurton\tBurton\tPROPN\t_\t_\t8\tnsubj\t_\tNER=B-PERSON|SpaceAfter=No
10\t.\t.\tPUNCT\t_\t_\t8\tpunct\t_\t_

# text = \"Yeah, I absolutely do.\"
1\t\"\t\"\tPUNCT\t_\t_\t6\tpunct\t_\tSpaceAfter=No
2\tYeah\tyeah\tINTJ\t_\t_\t6\tintj\t_\tSpaceAfter=No
3\t,\t,\tPUNCT\t_\t_\t6\tpunct\t_\t_
4\tI\tI\tPRON\t_\t_\t6\tnsubj\t_\t_
5\tabsolutely\tabsolutely\tADV\t_\t_\t6\tadvmod\t_\t_
6\tdo\tdo\tVERB\t_\t_\t0\tROOT\t_\tSpaceAfter=No
7\t.\t.\tPUNCT\t_\t_\t6\tpunct\t_\tSpaceAfter=No
8\t\"\t\"\tPUNCT\t_\t_\t6\tpunct\t_\t_
";

const BOOK_TITLE: &str = "\
1\tBurton\tBurton\tPROPN\t_\t_\t2\tnsubj\t_\tNER=B-PERSON
2\tclaims\tclaim\tVERB\t_\t_\t0\tROOT\t_\t_
3\tthat\tthat\tSCONJ\t_\t_\t7\tmark\t_\t_
4\this\this\tPRON\t_\t_\t6\tposs\t_\t_
5\tfavorite\tfavorite\tADJ\t_\t_\t6\tamod\t_\t_
6\tbook\tbook\tNOUN\t_\t_\t7\tnsubj\t_\t_
7\tis\tbe\tAUX\t_\t_\t2\tccomp\t_\t_
8\t\"\t\"\tPUNCT\t_\t_\t11\tpunct\t_\tSpaceAfter=No
9\tOne\tone\tNUM\t_\t_\t10\tnummod\t_\t_
10\tHundred\thundred\tNUM\t_\t_\t11\tnummod\t_\t_
11\tYears\tyear\tNOUN\t_\t_\t7\tattr\t_\t_
12\tof\tof\tADP\t_\t_\t11\tprep\t_\t_
13\tSolitude\tSolitude\tPROPN\t_\t_\t12\tpobj\t_\tSpaceAfter=No
14\t\"\t\"\tPUNCT\t_\t_\t11\tpunct\t_\tSpaceAfter=No
15\t.\t.\tPUNCT\t_\t_\t2\tpunct\t_\t_
";

const YES_SIR: &str = "\
1\tBurton\tBurton\tPROPN\t_\t_\t2\tnsubj\t_\t_
2\tsaid\tsay\tVERB\t_\t_\t0\tROOT\t_\tSpaceAfter=No
3\t,\t,\tPUNCT\t_\t_\t2\tpunct\t_\t_
4\t\"\t\"\tPUNCT\t_\t_\t5\tpunct\t_\tSpaceAfter=No
5\tYes\tyes\tINTJ\t_\t_\t2\tccomp\t_\t_
6\tsir\tsir\tNOUN\t_\t_\t5\tnpadvmod\t_\tSpaceAfter=No
7\t.\t.\tPUNCT\t_\t_\t5\tpunct\t_\tSpaceAfter=No
8\t\"\t\"\tPUNCT\t_\t_\t5\tpunct\t_\t_
";

/// The first quote is closed by the paragraph break, not a quotation mark.
const OPEN_PARAGRAPH: &str = "\
1\tSmith\tSmith\tPROPN\t_\t_\t2\tnsubj\t_\t_
2\tsaid\tsay\tVERB\t_\t_\t0\tROOT\t_\tSpaceAfter=No
3\t:\t:\tPUNCT\t_\t_\t2\tpunct\t_\t_
4\t\"\t\"\tPUNCT\t_\t_\t7\tpunct\t_\tSpaceAfter=No
5\tWe\twe\tPRON\t_\t_\t7\tnsubj\t_\t_
6\twill\twill\tAUX\t_\t_\t7\taux\t_\t_
7\tfight\tfight\tVERB\t_\t_\t2\tccomp\t_\t_
8\ton\ton\tADP\t_\t_\t7\tprt\t_\t_

# newpar
1\t\"\t\"\tPUNCT\t_\t_\t4\tpunct\t_\tSpaceAfter=No
2\tNothing\tnothing\tPRON\t_\t_\t4\tnsubj\t_\t_
3\twill\twill\tAUX\t_\t_\t4\taux\t_\t_
4\tstop\tstop\tVERB\t_\t_\t9\tccomp\t_\t_
5\tus\twe\tPRON\t_\t_\t4\tdobj\t_\tSpaceAfter=No
6\t,\t,\tPUNCT\t_\t_\t9\tpunct\t_\tSpaceAfter=No
7\t\"\t\"\tPUNCT\t_\t_\t4\tpunct\t_\t_
8\the\the\tPRON\t_\t_\t9\tnsubj\t_\t_
9\tadded\tadd\tVERB\t_\t_\t0\tROOT\t_\tSpaceAfter=No
10\t.\t.\tPUNCT\t_\t_\t9\tpunct\t_\t_
";

/// Smith's cue is nearer the quote, but sits past the paragraph break.
const NEXT_PARAGRAPH: &str = "\
1\tJones\tJones\tPROPN\t_\t_\t2\tnsubj\t_\t_
2\tsaid\tsay\tVERB\t_\t_\t0\tROOT\t_\t_
3\tit\tit\tPRON\t_\t_\t2\tdobj\t_\t_
4\tplainly\tplainly\tADV\t_\t_\t2\tadvmod\t_\tSpaceAfter=No
5\t.\t.\tPUNCT\t_\t_\t2\tpunct\t_\t_

1\t\"\t\"\tPUNCT\t_\t_\t3\tpunct\t_\tSpaceAfter=No
2\tTaxes\ttax\tNOUN\t_\t_\t3\tnsubj\t_\t_
3\tare\tbe\tAUX\t_\t_\t0\tROOT\t_\t_
4\tfar\tfar\tADV\t_\t_\t5\tadvmod\t_\t_
5\ttoo\ttoo\tADV\t_\t_\t6\tadvmod\t_\t_
6\thigh\thigh\tADJ\t_\t_\t3\tacomp\t_\tSpaceAfter=No
7\t.\t.\tPUNCT\t_\t_\t3\tpunct\t_\tSpaceAfter=No
8\t\"\t\"\tPUNCT\t_\t_\t3\tpunct\t_\t_

# newpar
1\tSmith\tSmith\tPROPN\t_\t_\t2\tnsubj\t_\t_
2\tsaid\tsay\tVERB\t_\t_\t0\tROOT\t_\t_
3\tnothing\tnothing\tPRON\t_\t_\t2\tdobj\t_\tSpaceAfter=No
4\t.\t.\tPUNCT\t_\t_\t2\tpunct\t_\t_
";

/// Single quotes nested inside a double-quoted passage.
const NESTED: &str = "\
1\t\"\t\"\tPUNCT\t_\t_\t3\tpunct\t_\tSpaceAfter=No
2\tHe\the\tPRON\t_\t_\t3\tnsubj\t_\t_
3\ttold\ttell\tVERB\t_\t_\t14\tccomp\t_\t_
4\tme\tI\tPRON\t_\t_\t3\tdative\t_\t_
5\t'\t'\tPUNCT\t_\t_\t7\tpunct\t_\tSpaceAfter=No
6\tnever\tnever\tADV\t_\t_\t7\tneg\t_\t_
7\tagain\tagain\tADV\t_\t_\t3\tadvmod\t_\tSpaceAfter=No
8\t'\t'\tPUNCT\t_\t_\t7\tpunct\t_\t_
9\tand\tand\tCCONJ\t_\t_\t3\tcc\t_\t_
10\tleft\tleave\tVERB\t_\t_\t3\tconj\t_\tSpaceAfter=No
11\t,\t,\tPUNCT\t_\t_\t14\tpunct\t_\tSpaceAfter=No
12\t\"\t\"\tPUNCT\t_\t_\t3\tpunct\t_\t_
13\tSmith\tSmith\tPROPN\t_\t_\t14\tnsubj\t_\t_
14\tsaid\tsay\tVERB\t_\t_\t0\tROOT\t_\tSpaceAfter=No
15\t.\t.\tPUNCT\t_\t_\t14\tpunct\t_\t_
";

const COORDINATED: &str = "\
1\tMary\tMary\tPROPN\t_\t_\t2\tcompound\t_\t_
2\tJones\tJones\tPROPN\t_\t_\t6\tnsubj\t_\t_
3\tand\tand\tCCONJ\t_\t_\t5\tcc\t_\t_
4\tPaul\tPaul\tPROPN\t_\t_\t5\tcompound\t_\t_
5\tSmith\tSmith\tPROPN\t_\t_\t2\tconj\t_\t_
6\tsaid\tsay\tVERB\t_\t_\t0\tROOT\t_\tSpaceAfter=No
7\t,\t,\tPUNCT\t_\t_\t6\tpunct\t_\t_
8\t\"\t\"\tPUNCT\t_\t_\t10\tpunct\t_\tSpaceAfter=No
9\tWe\twe\tPRON\t_\t_\t10\tnsubj\t_\t_
10\tare\tbe\tAUX\t_\t_\t6\tccomp\t_\t_
11\tvery\tvery\tADV\t_\t_\t12\tadvmod\t_\t_
12\thappy\thappy\tADJ\t_\t_\t10\tacomp\t_\tSpaceAfter=No
13\t\"\t\"\tPUNCT\t_\t_\t10\tpunct\t_\t_
";

const WITH_AUXILIARY: &str = "\
1\tOfficials\tofficial\tNOUN\t_\t_\t3\tnsubj\t_\t_
2\thave\thave\tAUX\t_\t_\t3\taux\t_\t_
3\tsaid\tsay\tVERB\t_\t_\t0\tROOT\t_\t_
4\t\"\t\"\tPUNCT\t_\t_\t8\tpunct\t_\tSpaceAfter=No
5\tthe\tthe\tDET\t_\t_\t6\tdet\t_\t_
6\troad\troad\tNOUN\t_\t_\t8\tnsubj\t_\t_
7\twill\twill\tAUX\t_\t_\t8\taux\t_\t_
8\treopen\treopen\tVERB\t_\t_\t3\tccomp\t_\t_
9\tsoon\tsoon\tADV\t_\t_\t8\tadvmod\t_\tSpaceAfter=No
10\t\"\t\"\tPUNCT\t_\t_\t8\tpunct\t_\tSpaceAfter=No
11\t.\t.\tPUNCT\t_\t_\t3\tpunct\t_\t_
";

fn pairs(conllu: &str) -> Vec<(usize, usize)> {
    pair_quotation_marks(&doc(conllu))
        .into_iter()
        .map(|p| (p.open, p.close))
        .collect()
}

#[test]
fn speaker_before_quote() {
    let doc = doc(BURTON_SAID);
    let quotes = find_quotes(&doc);
    assert_eq!(quotes.len(), 1);
    assert_eq!(texts(&quotes[0].speaker), vec!["Burton"]);
    assert_eq!(texts(&quotes[0].cue), vec!["said"]);
    assert_eq!(doc.span_text(&quotes[0].content), "“I love those cats!”");
}

#[test]
fn one_speaker_for_two_quotes() {
    let doc = doc(INSISTS_BURTON);
    assert_eq!(doc.text(), "\"I love those cats!\" insists Burton. \"Yeah, I absolutely do.\"");

    let quotes = find_quotes(&doc);
    assert_eq!(quotes.len(), 2);
    for quote in &quotes {
        assert_eq!(quote.speaker_text(), "Burton");
        assert_eq!(quote.cue_text(), "insists");
    }
    assert_eq!(doc.span_text(&quotes[0].content), "\"I love those cats!\"");
    assert_eq!(doc.span_text(&quotes[1].content), "\"Yeah, I absolutely do.\"");
}

#[test]
fn second_quote_borrows_the_previous_sentence() {
    let doc = doc(INSISTS_BURTON);
    let second = QuotePair { open: 10, close: 17 };
    let overlap = Window::Overlap.sentences(&doc, &second);
    assert_eq!(overlap.len(), 1);
    assert_eq!(overlap[0].start, 10);

    // The paragraph ends with the quote, so its own sentence is cut.
    let paragraph = Window::Paragraph.sentences(&doc, &second);
    assert_eq!(paragraph.len(), 1);
    assert_eq!(paragraph[0].start, 0);
}

#[test]
fn quoted_titles_are_not_speech() {
    assert_eq!(pairs(BOOK_TITLE), vec![(7, 13)]);
    assert!(find_quotes(&doc(BOOK_TITLE)).is_empty());
}

#[test]
fn short_quotes_are_dropped() {
    assert_eq!(pairs(YES_SIR), vec![(3, 7)]);
    assert!(find_quotes(&doc(YES_SIR)).is_empty());
}

#[test]
fn paragraph_break_closes_an_open_quote() {
    let doc = doc(OPEN_PARAGRAPH);
    assert_eq!(
        doc.text(),
        "Smith said: \"We will fight on\n\"Nothing will stop us,\" he added."
    );
    assert_eq!(pairs(OPEN_PARAGRAPH), vec![(3, 8), (9, 15)]);

    let quotes = find_quotes(&doc);
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].speaker_text(), "Smith");
    assert_eq!(quotes[0].cue_text(), "said");
    assert_eq!(doc.span_text(&quotes[0].content), "\"We will fight on\n");
    assert_eq!(quotes[1].speaker_text(), "he");
    assert_eq!(quotes[1].cue_text(), "added");
}

#[test]
fn cue_search_stops_at_the_paragraph_break() {
    let doc = doc(NEXT_PARAGRAPH);
    let quotes = find_quotes(&doc);
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].speaker_text(), "Jones");
    assert_eq!(quotes[0].cue[0].i, 1);
}

#[test]
fn nested_quotes_follow_the_outer_pair() {
    assert_eq!(pairs(NESTED), vec![(0, 11)]);

    let quotes = find_quotes(&doc(NESTED));
    assert_eq!(quotes.len(), 1);
    // "told" is a reporting verb, but it is inside the quote.
    assert_eq!(quotes[0].cue_text(), "said");
    assert_eq!(quotes[0].speaker_text(), "Smith");
}

#[test]
fn speaker_takes_conjuncts_and_compounds() {
    let quotes = find_quotes(&doc(COORDINATED));
    assert_eq!(quotes.len(), 1);
    assert_eq!(texts(&quotes[0].speaker), vec!["Mary", "Jones", "Paul", "Smith"]);
}

#[test]
fn cue_takes_auxiliaries() {
    let quotes = find_quotes(&doc(WITH_AUXILIARY));
    assert_eq!(quotes.len(), 1);
    assert_eq!(texts(&quotes[0].cue), vec!["have", "said"]);
    assert_eq!(quotes[0].speaker_text(), "Officials");
}

#[test]
fn finding_quotes_is_deterministic() {
    let doc = doc(OPEN_PARAGRAPH);
    assert_eq!(find_quotes(&doc), find_quotes(&doc));
}

#[test]
fn quote_records_serialize() {
    let doc = doc(BURTON_SAID);
    let quotes = find_quotes(&doc);
    let json = serde_json::to_value(&quotes[0]).unwrap();
    assert_eq!(json["speaker"][0]["text"], "Burton");
    assert_eq!(json["cue"][0]["lemma"], "say");
    assert_eq!(json["content"]["start"], 3);
    assert_eq!(json["content"]["end"], 10);
}
