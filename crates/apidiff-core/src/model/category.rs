use serde::{Deserialize, Serialize};

/// Counting and reporting category
///
/// The member categories double as `MemberGroup` types in snapshot JSON.
/// `Classes` and `ClassProps` exist only on the output side.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Classes,
    ClassProps,
    Configs,
    StaticConfigs,
    Properties,
    StaticProperties,
    Methods,
    StaticMethods,
    Events,
    Vars,
    SassMixins,
    /// Any group type this engine does not diff
    #[default]
    #[serde(other)]
    Unknown,
}

impl Category {
    /// Member categories in report order
    pub const MEMBERS: [Category; 9] = [
        Category::Configs,
        Category::StaticConfigs,
        Category::Properties,
        Category::StaticProperties,
        Category::Methods,
        Category::StaticMethods,
        Category::Events,
        Category::Vars,
        Category::SassMixins,
    ];

    /// Canonical JSON name
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Classes => "classes",
            Category::ClassProps => "class-props",
            Category::Configs => "configs",
            Category::StaticConfigs => "static-configs",
            Category::Properties => "properties",
            Category::StaticProperties => "static-properties",
            Category::Methods => "methods",
            Category::StaticMethods => "static-methods",
            Category::Events => "events",
            Category::Vars => "vars",
            Category::SassMixins => "sass-mixins",
            Category::Unknown => "unknown",
        }
    }

    /// Heading label used by the renderer
    pub fn label(self) -> &'static str {
        match self {
            Category::Classes => "Classes",
            Category::ClassProps => "Class Details",
            Category::Configs => "Configs",
            Category::StaticConfigs => "Static Configs",
            Category::Properties => "Properties",
            Category::StaticProperties => "Static Properties",
            Category::Methods => "Methods",
            Category::StaticMethods => "Static Methods",
            Category::Events => "Events",
            Category::Vars => "Vars",
            Category::SassMixins => "Sass Mixins",
            Category::Unknown => "Other",
        }
    }
}
