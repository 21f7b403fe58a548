//! Detection of bold automatic styles.

use std::collections::HashSet;

use log::debug;

use super::document::ContentDocument;

/// Set of style names whose text properties are bold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoldStyles {
    names: HashSet<String>,
}

impl BoldStyles {
    pub fn contains(&self, style_name: &str) -> bool {
        self.names.contains(style_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in ascending order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<String>> FromIterator<S> for BoldStyles {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Collects the names of all automatic styles that carry a bold font weight.
///
/// Walks every `office:automatic-styles` block; a style qualifies when one of
/// its direct `style:text-properties` children has `fo:font-weight="bold"`.
pub fn bold_styles(doc: &ContentDocument) -> BoldStyles {
    let styles: BoldStyles = doc
        .elements_by_tag("office:automatic-styles")
        .flat_map(|automatic_styles| automatic_styles.child_elements())
        .filter(|style| {
            style.child_elements().any(|props| {
                props.name() == "style:text-properties"
                    && props.attribute("fo:font-weight") == Some("bold")
            })
        })
        .filter_map(|style| style.attribute("style:name"))
        .collect();

    debug!("Found {} bold styles", styles.len());
    styles
}
