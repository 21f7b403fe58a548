//! Devamitta Pāli Study (DPS) records.
//!
//! DPS sheets are edited freely, so fields are resolved through the header
//! row by column name rather than by position.

use super::record::{
    field, make_group_id, make_sort_key, to_delimited_row, when, HeaderIndex, WordRecord,
};
use crate::dict::types::models::{DictionaryInfo, DEFAULT_WEBSITE};

pub const SHORT_NAME: &str = "dps";

const PALI: &str = "Pāli1";
const POS: &str = "POS";
const GRAMMAR: &str = "Grammar";
const DERIVED_FROM: &str = "Derived from";
const NEG: &str = "Neg";
const VERB: &str = "Verb";
const TRANS: &str = "Trans";
const CASE: &str = "Case";
const IN_ENGLISH: &str = "Meaning IN CONTEXT";
const IN_NATIVE: &str = "Meaning in native language";
const PALI_ROOT: &str = "Pāli Root";
const BASE: &str = "Base";
const CONSTRUCTION: &str = "Construction";
const SANSKRIT: &str = "Sanskrit";
const SANSKRIT_ROOT: &str = "Sk Root";
const COMMENTARY: &str = "Commentary";
const SOURCE1: &str = "Source1";
const EXAMPLE1: &str = "Example1";
const SUTTA1: &str = "Sutta1";
const SOURCE2: &str = "Source 2";
const EXAMPLE2: &str = "Example 2";
const SUTTA2: &str = "Sutta2";
const CHAPTER: &str = "Chapter";

const ICON: &str = "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAADSUlEQVRYR+3WW4hVVRzH8c86muGtKBMrMjW7QUqRIEpQaD2UEEG+Si9JEUEQRaHGnHUmHVEriEAq7EEqegh8mAojKiiCILrQxZIKKaO0IhMds8aZs2Kvs2fcOmcuNQ++zHo6Z6///q/v/q3f/79WcIZHOMPrmwCYUCBYZ5bppg2a8YQkOCzqaWvQTeZIppwy1+eY6NCwhq67VLLQZL2a9ogOD8QG0YtY0+blfZKdDtniGf8MzkcfYtmQ+ORHQZfo+cG5jebqsxMrKvEn8BweFPVVAXrxMSZhHi4sX+oW3TEEIPhDyjCFGldifhlzb4aIJuMzLEKP5AM152Fp1pjNovVVgIOii3KSIqChE4+VSW8WvZt/n1TgfdFN5XyR51ncg/2ieaJbsRvFhy0WfZtj69YLNmUo5rQHaC00TXJEyIpsEz0yAgANK6QSss9lznKn5Al8Ibq2omDhtz+zck0rhwdoQfyES7BLtHpEgJil/rJc6IbSJ0/iZ9HcrOvAiN6T/KapczSAvbgKb4puGwXgenySY2qW6jdb8Eb+H6xV90K7KhkN4BtcPSaADner2SHpF1yAvwR7JQvQh/tEO06HGA/Ap2rW6nc2rlPTKZkt2aVRblfdMjVvSWaWC28UdVS3YzwAQxUN9khuER0cnOy0RNPrlbIu+s5aMVeH8QD8WpZZkeeo5COzvOqBStMaoHjcAv25JAs/FaMbq09vRCf7wEm3jt0D7RxWfdZlll6vYXn5eKvo0fEoUG1Eoy3fmt9muh5vC5aVZl00MkDdd4LLJbs1rBqxDE9HeMpUR92Y+0i1BOsuxveCqWiMpsCBbJ7kZY3ywGrfiocq0GGdmi7sEy08JSB6Byslr4zUimfkYzmZJNmgkZMNdxYMBWi4XdItSJrma9g/GBRzg1pVfNjwAHUNQUdOECzWYc9/Aij2+5hfcA5eUndXztXagq8F5+KhKkBx5hfS1PLlIbiiJN4uur9CP3AfGN2E0cPZeq1RtPXijrFcyMfyAX+7ZqQLSWGU7ZKnRc3/BVD0mbp1gg1Ubl3J54I1oq8KgPNNzo5sjeM44YitjratrS6zNU1xTK/Nfh9T/W0x03FLMAM/FAsPvDdxK55QYEKBfwGdwU6OcOXRFwAAAABJRU5ErkJggg==";

/// Metadata of the DPS dictionary.
pub fn info() -> DictionaryInfo {
    DictionaryInfo {
        name: "Devamitta Pāli Study".to_string(),
        short_name: SHORT_NAME.to_string(),
        author: "Devamitta Bhikkhu".to_string(),
        description: "A detailed Pāli language word lookup".to_string(),
        website: DEFAULT_WEBSITE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        accent_color: "green".to_string(),
        icon_base64: ICON.to_string(),
    }
}

/// A DPS entry: the raw row plus the header positions it is read through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpsWord {
    header: HeaderIndex,
    record: Vec<String>,
}

impl DpsWord {
    pub fn new(header: HeaderIndex, record: Vec<String>) -> Self {
        Self { header, record }
    }

    /// Word factory for DPS rows. Without a header every named field reads as empty.
    pub fn create(record: Vec<String>, header: Option<&HeaderIndex>) -> Box<dyn WordRecord> {
        Box::new(Self::new(header.cloned().unwrap_or_default(), record))
    }

    fn get(&self, column: &str) -> &str {
        self.header
            .position(column)
            .map(|i| field(&self.record, i))
            .unwrap_or_default()
    }

    pub fn pali(&self) -> &str {
        self.get(PALI)
    }

    fn grammar_row(&self) -> String {
        when(self.get(GRAMMAR), || {
            format!(
                "<tr><td>Grammar</td><td><span>{}, {}{}{}{}{}{}</span></td></tr>",
                self.get(POS),
                self.get(GRAMMAR),
                when(self.get(DERIVED_FROM), || format!(", from {}", self.get(DERIVED_FROM))),
                when(self.get(VERB), || format!(", {}", self.get(VERB))),
                when(self.get(NEG), || format!(", {}", self.get(NEG))),
                when(self.get(TRANS), || format!(", {}", self.get(TRANS))),
                when(self.get(CASE), || format!(" ({})", self.get(CASE))),
            )
        })
    }

    fn simple_row(&self, label: &str, column: &str) -> String {
        when(self.get(column), || {
            format!("<tr><td>{}</td><td><span>{}</span></td></tr>", label, self.get(column))
        })
    }

    fn strong_row(&self, label: &str, column: &str) -> String {
        when(self.get(column), || {
            format!(
                "<tr><td>{}</td><td><span><strong>{}</strong></span></td></tr>",
                label,
                self.get(column)
            )
        })
    }

    fn example(&self, example: &str, source: &str, sutta: &str) -> String {
        let mut html = when(self.get(example), || {
            format!("<br /><span>{}</span><br />", self.get(example))
        });
        html.push_str(&when(self.get(source), || {
            format!(
                "<span class=\"sutta-source-{}\"><i>{} {}</i></span><br />",
                SHORT_NAME,
                self.get(source),
                self.get(sutta)
            )
        }));
        html
    }
}

impl WordRecord for DpsWord {
    fn sort_key(&self) -> String {
        make_sort_key(self.pali())
    }

    fn group_id(&self) -> String {
        make_group_id(self.pali())
    }

    fn toc_id(&self) -> String {
        let id: String = self.pali().chars().filter(|c| !c.is_whitespace()).collect();
        format!("{}-{}", id, SHORT_NAME)
    }

    fn is_valid_word(&self) -> bool {
        !self.pali().is_empty()
    }

    fn include_in_root_csv(&self) -> bool {
        true
    }

    fn include_in_dictionary(&self) -> bool {
        !self.get(IN_ENGLISH).is_empty() && !self.get(IN_NATIVE).is_empty()
    }

    fn to_delimited_row(&self) -> String {
        to_delimited_row(&self.record)
    }

    fn render_summary_line(&self) -> String {
        format!(
            "<li><a href=\"#{}\">{}</a>: {}. {}</li>",
            self.toc_id(),
            self.pali(),
            self.get(POS),
            self.get(IN_ENGLISH)
        )
    }

    fn render_full_entry(&self) -> String {
        let mut html = format!(
            "\n  <hr />\n  <div>\n    <h4 id=\"{}\">{}</h4>\n    <table class=\"word-info-table-{}\">\n      <tbody>",
            self.toc_id(),
            self.pali(),
            SHORT_NAME
        );
        html.push_str(&self.grammar_row());
        html.push_str(&self.strong_row("English", IN_ENGLISH));
        html.push_str(&self.strong_row("Russian", IN_NATIVE));
        html.push_str(&self.simple_row("Pāli Root", PALI_ROOT));
        html.push_str(&self.simple_row("Base", BASE));
        html.push_str(&self.simple_row("Construction", CONSTRUCTION));
        html.push_str(&self.simple_row("Sanskrit", SANSKRIT));
        html.push_str(&self.simple_row("Sanskrit Root", SANSKRIT_ROOT));
        html.push_str(&self.simple_row("Commentary", COMMENTARY));
        html.push_str("</tbody>\n    </table>");
        html.push_str(&self.example(EXAMPLE1, SOURCE1, SUTTA1));
        html.push_str(&self.example(EXAMPLE2, SOURCE2, SUTTA2));
        html.push_str(&when(self.get(CHAPTER), || {
            format!(
                "<span class=\"sutta-source-{}\"><i>{}</i></span><br /><br />",
                SHORT_NAME,
                self.get(CHAPTER)
            )
        }));
        html.push_str("</div>");
        html
    }
}
