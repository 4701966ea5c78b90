use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// The asset classes collected by the inliner. Each maps to one
/// subdirectory of the input directory and one top-level key in the
/// output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Js,
    Fonts,
    Images,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Js, Category::Fonts, Category::Images];

    /// The subdirectory this category is read from, which is also its
    /// key in the output document.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Js => "js",
            Category::Fonts => "fonts",
            Category::Images => "images",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// The output document: category -> file name -> base64-encoded contents.
///
/// All three categories are always serialized, even when empty. Entries
/// keep insertion order so the output follows the filesystem listing
/// order of the source directories.
#[derive(Debug, Default, Serialize)]
pub struct AssetBundle {
    js: IndexMap<String, String>,
    fonts: IndexMap<String, String>,
    images: IndexMap<String, String>,
}

impl AssetBundle {
    pub fn insert(&mut self, category: Category, file_name: String, encoded: String) {
        self.category_mut(category).insert(file_name, encoded);
    }

    pub fn len(&self) -> usize {
        self.js.len() + self.fonts.len() + self.images.len()
    }

    fn category_mut(&mut self, category: Category) -> &mut IndexMap<String, String> {
        match category {
            Category::Js => &mut self.js,
            Category::Fonts => &mut self.fonts,
            Category::Images => &mut self.images,
        }
    }
}
