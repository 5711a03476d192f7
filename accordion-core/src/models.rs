use serde::{Deserialize, Deserializer, Serialize};

/// A single selectable filter value. Identity is its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facet {
    pub name: String,
}

impl Facet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named collection of facets such as "brand" or "color".
/// The title is both the label lookup key and the accordion identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub title: String,
    /// Missing or null facets are read as an empty list
    #[serde(default, deserialize_with = "null_as_empty")]
    pub facets: Vec<Facet>,
}

impl FilterGroup {
    pub fn new<I, S>(title: impl Into<String>, facet_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            facets: facet_names.into_iter().map(Facet::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Look up a facet of this group by name
    pub fn facet(&self, name: &str) -> Option<&Facet> {
        self.facets.iter().find(|f| f.name == name)
    }
}

/// A node in the category hierarchy handed to `on_category_select`
pub type Category = CategoryNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn leaf(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<CategoryNode>) -> Self {
        self.children = children;
        self
    }
}

/// Externally owned category hierarchy; the accordion only checks its
/// emptiness and passes it through.
pub type CategoryTree = Vec<CategoryNode>;

/// Depth-first search for a category by id
pub fn find_category<'a>(tree: &'a [CategoryNode], id: &str) -> Option<&'a CategoryNode> {
    tree.iter().find_map(|node| {
        if node.id == id {
            Some(node)
        } else {
            find_category(&node.children, id)
        }
    })
}

/// On-disk shape of the component input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub filters: Vec<FilterGroup>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tree: CategoryTree,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
