use serde::{Deserialize, Serialize};

/// Names of all built-in component kinds, as they appear in editor exports.
pub const BUILTIN_KINDS: &[&str] = &[
    "HeaderText",
    "BodyText",
    "ImageComponent",
    "ButtonComponent",
    "NavigationButton",
    "Container",
    "SingleSelect",
    "TextInput",
    "Slider",
    "Spacer",
];

/// The resolved component kind of a node.
///
/// This is a closed set: the kind string is matched once at parse time
/// (case-sensitive, exact) and anything unrecognized lands in `Unknown`,
/// which renders as a plain vertical stack when the node has children and
/// as nothing when it does not. There is no runtime registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    HeaderText,
    BodyText,
    Image,
    Button,
    NavButton,
    Container,
    Select,
    Input,
    Slider,
    Spacer,
    /// Unresolved kind; carries the raw name (empty when the node had no
    /// usable type hint at all).
    Unknown(String),
}

impl ComponentKind {
    /// Resolve a kind name from a document. Exact match only.
    pub fn from_name(name: &str) -> ComponentKind {
        match name {
            "HeaderText" => ComponentKind::HeaderText,
            "BodyText" => ComponentKind::BodyText,
            "ImageComponent" => ComponentKind::Image,
            "ButtonComponent" => ComponentKind::Button,
            "NavigationButton" => ComponentKind::NavButton,
            "Container" => ComponentKind::Container,
            "SingleSelect" => ComponentKind::Select,
            "TextInput" => ComponentKind::Input,
            "Slider" => ComponentKind::Slider,
            "Spacer" => ComponentKind::Spacer,
            other => ComponentKind::Unknown(other.to_string()),
        }
    }

    /// The document-facing name of this kind, when it has one.
    pub fn name(&self) -> &str {
        match self {
            ComponentKind::HeaderText => "HeaderText",
            ComponentKind::BodyText => "BodyText",
            ComponentKind::Image => "ImageComponent",
            ComponentKind::Button => "ButtonComponent",
            ComponentKind::NavButton => "NavigationButton",
            ComponentKind::Container => "Container",
            ComponentKind::Select => "SingleSelect",
            ComponentKind::Input => "TextInput",
            ComponentKind::Slider => "Slider",
            ComponentKind::Spacer => "Spacer",
            ComponentKind::Unknown(name) => name,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ComponentKind::Unknown(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_resolves_builtins() {
        for name in BUILTIN_KINDS {
            let kind = ComponentKind::from_name(name);
            assert!(!kind.is_unknown(), "'{}' should resolve", name);
            assert_eq!(kind.name(), *name);
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert!(ComponentKind::from_name("headertext").is_unknown());
        assert!(ComponentKind::from_name("HEADERTEXT").is_unknown());
        assert!(ComponentKind::from_name("Headertext").is_unknown());
    }

    #[test]
    fn test_unknown_keeps_raw_name() {
        let kind = ComponentKind::from_name("TotallyUnknown");
        assert_eq!(kind, ComponentKind::Unknown("TotallyUnknown".to_string()));
        assert_eq!(kind.name(), "TotallyUnknown");
    }
}
