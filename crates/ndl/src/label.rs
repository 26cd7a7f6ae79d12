//! Field labels of the catalog detail page and the parser that splits raw fragments into
//! `(label, value)` entries.

use std::borrow::Cow;

/// How a [`FieldLabel`] is matched against a fragment and what entry it emits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// The fragment starts with the label text. Emits `(text, fragment)`.
    Prefix,
    /// The label text includes surrounding spaces that must match literally. The emitted label is
    /// the trimmed text and the value is the whole fragment, label and padding included.
    Padded,
    /// Like [`MatchMode::Prefix`], unless the rest of the fragment starts with `suffix`. In that
    /// case the entry is relabelled to `compound`, with every `compound` removed from the value.
    Heading {
        /// Text that follows the label when the fragment is the longer heading form.
        suffix: Cow<'static, str>,
        /// Label emitted for the heading form.
        compound: Cow<'static, str>,
    },
}

/// A known field label of the detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLabel {
    text: Cow<'static, str>,
    mode: MatchMode,
}

impl FieldLabel {
    /// A label matched by plain prefix.
    #[must_use]
    pub const fn prefix(text: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            mode: MatchMode::Prefix,
        }
    }

    /// A label whose padding is part of the match.
    #[must_use]
    pub const fn padded(text: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            mode: MatchMode::Padded,
        }
    }

    /// A label with a longer heading form, see [`MatchMode::Heading`].
    #[must_use]
    pub const fn heading(text: &'static str, suffix: &'static str, compound: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            mode: MatchMode::Heading {
                suffix: Cow::Borrowed(suffix),
                compound: Cow::Borrowed(compound),
            },
        }
    }

    /// Creates a label from owned parts.
    #[must_use]
    pub fn new<S: Into<Cow<'static, str>>>(text: S, mode: MatchMode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }

    /// The literal text matched against the start of a fragment.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The match mode of the label.
    #[must_use]
    pub const fn mode(&self) -> &MatchMode {
        &self.mode
    }

    fn parse(&self, fragment: &str) -> Option<FieldEntry> {
        let rest = fragment.strip_prefix(&*self.text)?;

        let entry = match &self.mode {
            MatchMode::Prefix => FieldEntry::new(self.text.clone(), fragment),
            MatchMode::Padded => FieldEntry::new(self.text.trim().to_owned(), fragment),
            MatchMode::Heading { suffix, compound } if rest.starts_with(&**suffix) => {
                FieldEntry::new(compound.clone(), fragment.replace(&**compound, ""))
            }
            MatchMode::Heading { .. } => FieldEntry::new(self.text.clone(), fragment),
        };
        Some(entry)
    }
}

/// A parsed `(label, value)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEntry {
    /// Canonical label of the field.
    pub label: String,
    /// The value as found on the page, which may still contain the label text.
    pub value: String,
}

impl FieldEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new<L, V>(label: L, value: V) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The labels of the NDL search detail page in match order.
///
/// `著者標目` has its own entry but is reached through the heading form of `著者`, which is
/// listed first. `注記` only matches together with its padding.
pub const NDL_LABELS: [FieldLabel; 19] = [
    FieldLabel::prefix("タイトル"),
    FieldLabel::heading("著者", "標目", "著者標目"),
    FieldLabel::prefix("著者標目"),
    FieldLabel::prefix("出版社"),
    FieldLabel::prefix("出版年月日等"),
    FieldLabel::prefix("大きさ、容量等"),
    FieldLabel::padded("    注記        "),
    FieldLabel::prefix("ISBN"),
    FieldLabel::prefix("NACSIS-CATレコード"),
    FieldLabel::prefix("別タイトル"),
    FieldLabel::prefix("出版年(W3CDTF)"),
    FieldLabel::prefix("件名（キーワード）"),
    FieldLabel::prefix("NDLC"),
    FieldLabel::prefix("NDC（10版）"),
    FieldLabel::prefix("NDC（9版）"),
    FieldLabel::prefix("NDC(8版)"),
    FieldLabel::prefix("対象利用者"),
    FieldLabel::prefix("資料の種別"),
    FieldLabel::prefix("言語（ISO639-2形式）"),
];

/// An ordered set of labels. The first label matching a fragment wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<FieldLabel>,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::new(NDL_LABELS.to_vec())
    }
}

impl LabelSet {
    /// Creates a label set that matches in the order given.
    #[must_use]
    pub const fn new(labels: Vec<FieldLabel>) -> Self {
        Self { labels }
    }

    /// The labels in match order.
    #[must_use]
    pub fn labels(&self) -> &[FieldLabel] {
        &self.labels
    }

    /// Parses a single fragment, returning `None` when no label matches.
    #[must_use]
    pub fn parse_fragment(&self, fragment: &str) -> Option<FieldEntry> {
        self.labels.iter().find_map(|label| label.parse(fragment))
    }

    /// Parses every fragment in order, dropping the ones that match no label.
    pub fn parse_fragments<'a, I>(&'a self, fragments: I) -> impl Iterator<Item = FieldEntry> + 'a
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        I::IntoIter: 'a,
    {
        fragments
            .into_iter()
            .filter_map(move |fragment| self.parse_fragment(fragment.as_ref()))
    }
}
