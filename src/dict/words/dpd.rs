//! Digital Pāli Dictionary (DPD) records.
//!
//! DPD rows are positional: the sheet always has the same 40 columns.

use super::record::{
    field, make_group_id, make_sort_key, to_delimited_row, when, HeaderIndex, WordRecord,
};
use crate::dict::types::models::{DictionaryInfo, DEFAULT_WEBSITE};

pub const SHORT_NAME: &str = "dpd";

const PALI1: usize = 0;
const PALI2: usize = 1;
const POS: usize = 3;
const GRAMMAR: usize = 4;
const NEG: usize = 6;
const VERB: usize = 7;
const TRANS: usize = 8;
const CASE: usize = 9;
const IN_ENGLISH: usize = 10;
const SANSKRIT: usize = 11;
const SANSKRIT_ROOT: usize = 12;
const FAMILY: usize = 13;
const PALI_ROOT: usize = 14;
const ROOT_V: usize = 15;
const ROOT_GROUP: usize = 16;
const ROOT_SIGN: usize = 17;
const ROOT_MEANING: usize = 18;
const BASE: usize = 19;
const CONSTRUCTION: usize = 20;
const DERIVATIVE: usize = 21;
const SUFFIX: usize = 22;
const COMPOUND: usize = 23;
const COMPOUND_CONSTRUCTION: usize = 24;
const SOURCE1: usize = 25;
const SUTTA1: usize = 26;
const EXAMPLE1: usize = 27;
const SOURCE2: usize = 28;
const SUTTA2: usize = 29;
const EXAMPLE2: usize = 30;
const ANTONYMS: usize = 31;
const SYNONYMS: usize = 32;
const VARIANT: usize = 33;
const COMMENTARY: usize = 34;
const NOTES: usize = 35;

const ICON: &str = "iVBORw0KGgoAAAANSUhEUgAAAEAAAABACAYAAACqaXHeAAAABGdBTUEAALGPC/xhBQAAACBjSFJNAAB6JgAAgIQAAPoAAACA6AAAdTAAAOpgAAA6mAAAF3CculE8AAAABmJLR0QA/wD/AP+gvaeTAAAAB3RJTUUH5AsdFSgpkaAaOgAAAF50RVh0UmF3IHByb2ZpbGUgdHlwZSBpcHRjAAppcHRjCiAgICAgIDI4CjM4NDI0OTRkMDQwNDAwMDAwMDAwMDAwZjFjMDI2ZTAwMDM1MjQ2NDcxYzAyMDAwMDAyMDAwNDAwCmCaPZ4AAAcQSURBVHja7dprjF1VFQfw35pHOy0dW8daCxYoUx5BI1SEQKIQiBFMNCZqCIaOIB8UCKD4gEhiDI36QWkkgsQQFYF06hvrB/GRaDRICYnRECzIo6FVQAFpbSl9zHTu9sPe9865t9M77djpDPH+v8ycc/fZZ63/Xmuvxz500EEHHXTQQQcd/J8iZlqA6URaC3pwCgawSfK8IIZeowSke9GNJDBH6MOr2Ber9lO+FzfiOvTjSVyPP5BJ6Jl2gYcb/56K45DaDA/Js56y0Qrispa5slJzJFcKZ+FNRcmr8UTLTHAmPiOvPqyU3ICHsYcjQEAF1+Aq7Gszpgd32e0TbcbMxaU4p1xvRd8Bxi7HohZilkv6Z4KAHtl4uycddzikSgibJduF11d+2SS8UhVqejFu8BswD2NtRnfjQfO0d5SDf/efsAbXlFV/HF8V9tTnn34C/om3YIN7jbh3UrIW4ljtHeUgEEOkYaP4muSnsis84y4vuoL46BEiIG6Y7je0eXeOCvu0bpC/G/+3a+bEmx3oEDDTAsw0emgkGIHFmFN+2ylsr4w7SXKGsAS7JH/DX7CD8dRyIlTmX4jjhUEcLUeFPZJnsVHYrCWjmyrSPXgJSy3CUcbjyjbsrstb3QQX4Ns4rQj7A9wkeTM+K1wiLJWtJmEX/ojVeCgNNzadVsX75KTl/TgPg4WIbuOp+KjwL/xCsiYN2yS1J3VSRFF1qc/jEnkzrOHTuL/JAooYXXIAOiFL7wTJIL4lvEdz3RDCUbgIK3C5ZENaO6HQg7hHOK6NsL3l3VdhJT4mPDERqYeEHEqXCMuLTmNloRs48B4Qlgm3CBdKRiWPSNbjAeysjDwRXxIG9iutAmGL8GQRYETyDzyI9ZL1Zd69lWfOwRcdOL09eNQmH3LgPCA5s/z+Ar4iu8RWSR8uxhrhDWXsufgA7m5atZyOvipZi834JR6RvCDsLqMWCZfJrtRf7r0PZxWypxXtLGBu2QQ/iduFl2LImFx63iN8tzK2t5DSV01hG+4QhnGlcF8M2RRDdsYqYzFkTHgZ35TcV3n7QpxLYx+ZAQKSVBT/iRhf1aJUkvxY8nLliZUUX6vyuIpYZV8MqU3oz9lPR/Er1TohOeWw1ANTJiCb+8+kAwjOU3h6XFNLhLceaoslLlcPUM9JuUQtGJBr/RkiIIwJo20UekV4pnJdzxWmarYjmivFXklMtxVMrRhK6FKTPF/IqmNZy/WBp1gnZwJ75WWozUx7bmoE7FPPF7e2ELMYXVJzAKr08ebJDcqVak5Us1iXeWX0G+XMcPYTEFc0en27W9ZtQVG1QUBxh27JBbgW7xQGzJI6ZOr9gBzjR1ruVtPbOkm9uFbyhaJ4/fl92I5dQk0yV87ajigxUycg5NZ0c4KcCjXVjfBirBYlyUlG5JD3Q2zEjnLvTKzVkqrOXgIy+ool1LFHNQFNluD6ivI13I6bsVMXcWmDrGUOKnmdBQRUVre/ZQ/Yrh7KsoWcLVeXdWzErdj5P1V6hxFT97es+NJmZrxQ/tZxujC38sxD+jw3m86jpk5AzTz10nlcwU0tiUsrQc9W6r5ZgfYu0D4LOxonVcbukE28bv7Efocgee0n9vT+SeWZBrQrhhbgZNGc2lbO+s5Xz/wynlRtP2cStrbMeowuTZliI08IHxTmN5EVpv34tl0tMB+rJW+vk9BQPiwXrm5Z4ftLaZsrx2wBj5cuTP25s41ZWleqMt97JR9pkWC+iYuhRqitUD3ZcdsUCMhTnyYMSz4uFzrLJBdI7sQ7KiJtluN6c0sseUjYUrl+G27A4rRWl2SB8CHcKgyUajCVd58sxsmvYFTkRmxBP94tGUxrHZu+f2jFWDsXGJFsx6nCHfi9fK7+c1yobpw5ibnNDo/tty49NuF7DSsI3cJ1+DV+JHeI7pb3ko3CN+TeACyR3CY5uWVR9kr+XLnTI7lZ2CCsUTP3UNymnQtsw5clT6NXOEYYFE2xf69wO+70uubVj1Vy0ZTcgXUVV+jFGcKHhXehX7JF8jncIuWPF4oMi1ROCSsdpnVS6TPm6/nytwLnqW7MB7GlthsScvv4t5IbcX45Zu6S22JPSL4jrBN2Tdg0yRvhNnxKjhCr5K5RX8kKtwoP4OtqHi6efC1ukvuCG4S/N82Z0O2vxlwtWS2sLHXECJ5TbaZm6h7Fb+QErSYf1zaJWN+MFsrHhmeU317EBXgMcyWDwvHGG6VPy533SVvXaVj9k5YlwopSNu/FFjyDvY3oMIYwp6zkiNx5st/nL9kKB3CqZAD/KYvyoiiqPorTdTcKrNSgJTV9IzQZAYfjpGa2YlbU5B0COgR0COgQMDsJOAInMzONnhZFR4Qdkm3CU8KumRbwyBCQsUv+eGAU/5YTix1TmLODDjrooIMOOuigg9cC/gu5oRLRMf4VEgAAACV0RVh0ZGF0ZTpjcmVhdGUAMjAyMC0xMS0yOVQxMjoyOTo0MiswMDowMP2hmhAAAAAldEVYdGRhdGU6bW9kaWZ5ADIwMjAtMTEtMjlUMjE6MzA6MjcrMDA6MDDkm7mTAAAAAElFTkSuQmCC";

/// Metadata of the DPD dictionary.
pub fn info() -> DictionaryInfo {
    DictionaryInfo {
        name: "Digital Pāli Dictionary (DPD)".to_string(),
        short_name: SHORT_NAME.to_string(),
        author: "A Pāli Instructor".to_string(),
        description: "A detailed Pāli language word lookup".to_string(),
        website: DEFAULT_WEBSITE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        accent_color: "orange".to_string(),
        icon_base64: ICON.to_string(),
    }
}

/// A DPD entry; holds the raw row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpdWord {
    record: Vec<String>,
}

impl DpdWord {
    pub fn new(record: Vec<String>) -> Self {
        Self { record }
    }

    /// Word factory for DPD rows. The header index is not needed.
    pub fn create(record: Vec<String>, _header: Option<&HeaderIndex>) -> Box<dyn WordRecord> {
        Box::new(Self::new(record))
    }

    fn get(&self, column: usize) -> &str {
        field(&self.record, column)
    }

    pub fn pali1(&self) -> &str {
        self.get(PALI1)
    }

    fn grammar_row(&self) -> String {
        when(self.get(GRAMMAR), || {
            format!(
                "<tr><td>Grammar</td><td><span>{}{}{}{}{}</span></td></tr>",
                self.get(GRAMMAR),
                when(self.get(VERB), || format!(", {}", self.get(VERB))),
                when(self.get(NEG), || format!(", {}", self.get(NEG))),
                when(self.get(TRANS), || format!(", {}", self.get(TRANS))),
                when(self.get(CASE), || format!(" ({})", self.get(CASE))),
            )
        })
    }

    fn root_row(&self) -> String {
        when(self.get(PALI_ROOT), || {
            format!(
                "<tr><td>Root</td><td><span>{}<sup>{}</sup>{} {} ({})</span></td></tr>",
                self.get(PALI_ROOT),
                self.get(ROOT_V),
                self.get(ROOT_GROUP),
                self.get(ROOT_SIGN),
                self.get(ROOT_MEANING),
            )
        })
    }

    fn simple_row(&self, label: &str, column: usize) -> String {
        when(self.get(column), || {
            format!("<tr><td>{}</td><td><span>{}</span></td></tr>", label, self.get(column))
        })
    }

    fn with_detail_row(&self, label: &str, column: usize, detail: usize) -> String {
        when(self.get(column), || {
            format!(
                "<tr><td>{}</td><td><span>{} ({})</span></td></tr>",
                label,
                self.get(column),
                self.get(detail)
            )
        })
    }

    fn example(&self, example: usize, source: usize, sutta: usize) -> String {
        let mut html = when(self.get(example), || {
            format!("<span>{}</span><br />", self.get(example))
        });
        html.push_str(&when(self.get(source), || {
            format!(
                "<span class=\"sutta-source-{}\"><i>{} {}</i></span><br /><br />",
                SHORT_NAME,
                self.get(source),
                self.get(sutta)
            )
        }));
        html
    }
}

impl WordRecord for DpdWord {
    fn sort_key(&self) -> String {
        make_sort_key(self.pali1())
    }

    fn group_id(&self) -> String {
        make_group_id(self.pali1())
    }

    fn toc_id(&self) -> String {
        let id: String = self
            .pali1()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        format!("{}_{}", id, SHORT_NAME)
    }

    fn is_valid_word(&self) -> bool {
        !self.pali1().is_empty()
    }

    fn include_in_root_csv(&self) -> bool {
        !self.get(PALI_ROOT).is_empty()
    }

    fn include_in_dictionary(&self) -> bool {
        !self.get(IN_ENGLISH).is_empty()
    }

    fn to_delimited_row(&self) -> String {
        to_delimited_row(&self.record)
    }

    fn render_summary_line(&self) -> String {
        format!(
            "<li><a href=\"#{}\">{}</a>: {}. {}</li>",
            self.toc_id(),
            self.pali1(),
            self.get(POS),
            self.get(IN_ENGLISH)
        )
    }

    fn render_full_entry(&self) -> String {
        let mut html = format!(
            "\n  <hr />\n  <div>\n    <h4 id=\"{}\">{}</h4>\n    <table class=\"word-info-table-{}\">\n      <tbody>",
            self.toc_id(),
            self.pali1(),
            SHORT_NAME
        );
        html.push_str(&format!(
            "<tr><td>Pāli</td><td><span>{}</span></td></tr>",
            self.get(PALI2)
        ));
        html.push_str(&self.grammar_row());
        html.push_str(&when(self.get(IN_ENGLISH), || {
            format!(
                "<tr><td>English</td><td><span><strong>{}</strong></span></td></tr>",
                self.get(IN_ENGLISH)
            )
        }));
        html.push_str(&self.simple_row("Family", FAMILY));
        html.push_str(&self.root_row());
        html.push_str(&self.simple_row("Base", BASE));
        html.push_str(&self.simple_row("Construction", CONSTRUCTION));
        html.push_str(&self.with_detail_row("Derivative", DERIVATIVE, SUFFIX));
        html.push_str(&self.with_detail_row("Compound", COMPOUND, COMPOUND_CONSTRUCTION));
        html.push_str(&self.simple_row("Antonym", ANTONYMS));
        html.push_str(&self.simple_row("Synonym", SYNONYMS));
        html.push_str(&self.simple_row("Variant", VARIANT));
        html.push_str(&self.simple_row("Sanskrit", SANSKRIT));
        html.push_str(&self.simple_row("Sanskrit Root", SANSKRIT_ROOT));
        html.push_str(&self.simple_row("Commentary", COMMENTARY));
        html.push_str(&self.simple_row("Notes", NOTES));
        html.push_str("</tbody>\n    </table>\n    <br />");
        html.push_str(&self.example(EXAMPLE1, SOURCE1, SUTTA1));
        html.push_str(&self.example(EXAMPLE2, SOURCE2, SUTTA2));
        html.push_str("</div>");
        html
    }
}
