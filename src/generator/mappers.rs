//! Built-in predicates and mappers

use miette::Result;

use crate::constants::graph::{COMPILE_CLASSPATH, TEST_CONFIGURATION_MARKERS};
use crate::core::{Configuration, Module, ResolvedDependency};
use crate::dot::{Color, NodeAttributes, Style};

/// Category of a module, detected from its markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleType {
    Multiplatform,
    Android,
    Jvm,
    Ios,
    Js,
    Other,
}

struct ModuleTypeRule {
    module_type: ModuleType,
    markers: &'static [&'static str],
}

// First match wins
static MODULE_TYPE_RULES: &[ModuleTypeRule] = &[
    ModuleTypeRule {
        module_type: ModuleType::Multiplatform,
        markers: &["org.jetbrains.kotlin.multiplatform"],
    },
    ModuleTypeRule {
        module_type: ModuleType::Android,
        markers: &[
            "com.android.library",
            "com.android.application",
            "com.android.test",
            "com.android.feature",
            "com.android.instantapp",
        ],
    },
    ModuleTypeRule {
        module_type: ModuleType::Jvm,
        markers: &[
            "java-library",
            "java",
            "java-gradle-plugin",
            "application",
            "org.jetbrains.kotlin.jvm",
        ],
    },
    ModuleTypeRule {
        module_type: ModuleType::Ios,
        markers: &["org.jetbrains.kotlin.native.cocoapods"],
    },
    ModuleTypeRule {
        module_type: ModuleType::Js,
        markers: &["com.eriwen.gradle.js"],
    },
];

impl ModuleType {
    pub fn detect(module: &Module) -> Self {
        MODULE_TYPE_RULES
            .iter()
            .find(|rule| module.has_any_marker(rule.markers))
            .map_or(ModuleType::Other, |rule| rule.module_type)
    }

    pub fn color(&self) -> Color {
        let hex = match self {
            ModuleType::Multiplatform => "#A280FF",
            ModuleType::Android => "#66BB6A",
            ModuleType::Jvm => "#FF7043",
            ModuleType::Ios => "#42A5F5",
            ModuleType::Js => "#FFCA28",
            ModuleType::Other => "#BDBDBD",
        };
        Color::from_hex(hex).unwrap_or(Color::GREY)
    }
}

/// Fill every module node with the color of its detected [`ModuleType`]
pub fn default_module_mapper(module: &Module) -> Result<Option<NodeAttributes>> {
    Ok(Some(
        NodeAttributes::new().with_fill_color(ModuleType::detect(module).color()),
    ))
}

/// Compile classpaths, minus the ones belonging to tests
pub fn default_configuration_predicate(configuration: &Configuration) -> Result<bool> {
    let name = configuration.name();
    let marker = COMPILE_CLASSPATH.to_lowercase();

    if !name.to_lowercase().contains(&marker) {
        return Ok(false);
    }

    let remainder = remove_ignore_case(name, &marker);
    Ok(!TEST_CONFIGURATION_MARKERS
        .iter()
        .any(|fragment| remainder.contains(fragment)))
}

/// Remove every case-insensitive occurrence of an ASCII `needle`, keeping the
/// casing of everything else
fn remove_ignore_case(value: &str, needle: &str) -> String {
    if needle.is_empty() {
        return value.to_string();
    }

    let mut result = String::with_capacity(value.len());
    let mut skip_until = 0;
    for (index, c) in value.char_indices() {
        if index < skip_until {
            continue;
        }
        let matches = value
            .get(index..index + needle.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(needle));
        if matches {
            skip_until = index + needle.len();
        } else {
            result.push(c);
        }
    }
    result
}

/// Java's `String.hashCode` over UTF-16 code units
pub fn java_string_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Fill every library node with a color derived from its group, so all
/// libraries of one group share a color
pub fn tint_dependency_by_group(dependency: &ResolvedDependency<'_>) -> Result<Option<NodeAttributes>> {
    let color = Color::from_rgb_int(java_string_hash(dependency.group()) as u32);
    Ok(Some(
        NodeAttributes::new()
            .with_style(Style::Filled)
            .with_fill_color(color),
    ))
}
