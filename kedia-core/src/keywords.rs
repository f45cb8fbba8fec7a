//! Keyword table mapping each category to the words that select it.
//!
//! The table is plain data: English plus transliterated Hindi terms per
//! category, looked up by substring containment. It can be replaced from
//! configuration without touching the lookup logic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::category::Category;
use crate::error::UnknownCategory;

const FOOD: &[&str] = &[
    "food", "meal", "lunch", "dinner", "breakfast", "restaurant", "pizza", "burger", "dominos",
];

const TRANSPORT: &[&str] = &[
    "transport", "uber", "ola", "cab", "taxi", "metro", "bus", "train", "petrol", "gas", "auto",
    "rick", "rickshaw", "auto-rickshaw",
];

const SHOPPING: &[&str] = &[
    "shop", "mall", "clothes", "dress", "shirt", "pants", "jeans", "shoes", "purchase", "h&m",
    "zara", "forever21", "uniqlo", "adidas", "nike", "puma", "levis", "myntra", "amazon",
    "flipkart", "ajio",
];

const ENTERTAINMENT: &[&str] = &[
    "movie", "theatre", "concert", "show", "netflix", "amazon", "prime", "disney", "hotstar",
];

const BILLS: &[&str] = &[
    "bill", "electricity", "water", "gas", "internet", "wifi", "broadband", "rent", "maintenance",
];

const HEALTH: &[&str] = &[
    "medicine", "doctor", "hospital", "clinic", "medical", "health", "healthcare", "pharmacy",
];

const EDUCATION: &[&str] = &[
    "book", "course", "class", "tuition", "school", "college", "university", "education",
];

const LENT: &[&str] = &["lent", "borrowed", "loan", "gave", "friend", "lending"];

/// Ordered keyword lists per category, iterated in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct KeywordTable {
    entries: BTreeMap<Category, Vec<String>>,
}

impl KeywordTable {
    /// Empty table: everything classifies as [`Category::Other`].
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Build a table from `(category, keywords)` pairs. Keywords are
    /// lowercased and trimmed; blank ones are dropped. A category given
    /// twice keeps both lists, in the order supplied.
    pub fn from_pairs<I, K, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Category, K)>,
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: BTreeMap<Category, Vec<String>> = BTreeMap::new();
        for (category, keywords) in pairs {
            let list = entries.entry(category).or_default();
            for kw in keywords {
                let kw = kw.as_ref().trim().to_lowercase();
                if !kw.is_empty() {
                    list.push(kw);
                }
            }
        }
        entries.retain(|_, list| !list.is_empty());
        Self { entries }
    }

    /// Keywords for one category, in match order.
    pub fn keywords(&self, category: Category) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `(category, keywords)` in classification order, skipping empty lists.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries.iter().map(|(c, kws)| (*c, kws.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First `(category, keyword)` contained in `description`, scanning
    /// categories in order and then keywords in order.
    pub fn matching_keyword(&self, description: &str) -> Option<(Category, &str)> {
        let desc = description.to_lowercase();
        self.iter().find_map(|(category, keywords)| {
            keywords
                .iter()
                .find(|kw| desc.contains(kw.as_str()))
                .map(|kw| (category, kw.as_str()))
        })
    }

    /// Category of the first matching keyword, or [`Category::Other`].
    pub fn classify(&self, description: &str) -> Category {
        self.matching_keyword(description)
            .map(|(category, _)| category)
            .unwrap_or(Category::Other)
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::from_pairs([
            (Category::Food, FOOD),
            (Category::Transport, TRANSPORT),
            (Category::Shopping, SHOPPING),
            (Category::Entertainment, ENTERTAINMENT),
            (Category::Bills, BILLS),
            (Category::Health, HEALTH),
            (Category::Education, EDUCATION),
            (Category::Lent, LENT),
        ])
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for KeywordTable {
    type Error = UnknownCategory;

    fn try_from(raw: BTreeMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        let pairs = raw
            .into_iter()
            .map(|(name, keywords)| Ok((name.parse::<Category>()?, keywords)))
            .collect::<Result<Vec<_>, UnknownCategory>>()?;
        Ok(Self::from_pairs(pairs))
    }
}

impl From<KeywordTable> for BTreeMap<String, Vec<String>> {
    fn from(table: KeywordTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|(c, kws)| (c.to_string(), kws))
            .collect()
    }
}
