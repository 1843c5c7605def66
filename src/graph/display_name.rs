//! Friendly labels for well-known library families

enum Rule {
    /// Drop the group prefix, join the rest with `-` and append the name
    StripGroupPrefix(&'static str),
    /// Exact group, prefix the name
    PrefixName {
        group: &'static str,
        prefix: &'static str,
    },
    /// Exact coordinate, fixed label
    Fixed {
        group: &'static str,
        name: &'static str,
        label: &'static str,
    },
}

static RULES: &[Rule] = &[
    Rule::StripGroupPrefix("android.arch."),
    Rule::PrefixName {
        group: "com.squareup.sqldelight",
        prefix: "sqldelight-",
    },
    Rule::Fixed {
        group: "org.jetbrains",
        name: "annotations",
        label: "jetbrains-annotations",
    },
];

impl Rule {
    fn apply(&self, group: &str, name: &str) -> Option<String> {
        match *self {
            Rule::StripGroupPrefix(prefix) => group
                .strip_prefix(prefix)
                .map(|rest| format!("{}-{name}", rest.replace('.', "-"))),
            Rule::PrefixName {
                group: expected,
                prefix,
            } => (group == expected).then(|| format!("{prefix}{name}")),
            Rule::Fixed {
                group: expected_group,
                name: expected_name,
                label,
            } => (group == expected_group && name == expected_name).then(|| label.to_string()),
        }
    }
}

/// Label of a library node; the bare name unless a rule applies
pub fn display_name(group: &str, name: &str) -> String {
    RULES
        .iter()
        .find_map(|rule| rule.apply(group, name))
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_arch_prefix() {
        assert_eq!(
            display_name("android.arch.lifecycle", "runtime"),
            "lifecycle-runtime"
        );
        assert_eq!(
            display_name("android.arch.persistence.room", "runtime"),
            "persistence-room-runtime"
        );
    }

    #[test]
    fn test_sqldelight() {
        assert_eq!(
            display_name("com.squareup.sqldelight", "runtime"),
            "sqldelight-runtime"
        );
    }

    #[test]
    fn test_jetbrains_annotations() {
        assert_eq!(
            display_name("org.jetbrains", "annotations"),
            "jetbrains-annotations"
        );
        assert_eq!(display_name("org.jetbrains", "markdown"), "markdown");
    }

    #[test]
    fn test_default_is_name() {
        assert_eq!(display_name("io.reactivex.rxjava2", "rxjava"), "rxjava");
        assert_eq!(display_name("android.archive", "x"), "x");
    }
}
