//! Dead import removal.
//!
//! Drops whole lines containing any of a fixed set of import statements for
//! the result-display libraries, keeping all other lines in order.

/// Imports made dead once the display getters are gone.
pub const DEFAULT_DEAD_IMPORTS: &[&str] = &[
    "import '../models/results/result_types.dart';",
    "import '../models/results/display_sections.dart';",
    "import \"results/result_types.dart\";",
    "import \"results/display_sections.dart\";",
    "import 'result_types.dart';",
    "import 'display_sections.dart';",
];

/// Returns true if the line contains one of `patterns`.
pub fn is_dead_import(line: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| line.contains(p.as_str()))
}

/// Remove every line matching `patterns`; `\n` separators are preserved.
pub fn prune_imports(content: &str, patterns: &[String]) -> String {
    if patterns.is_empty() {
        return content.to_string();
    }
    content
        .split('\n')
        .filter(|line| !is_dead_import(line, patterns))
        .collect::<Vec<_>>()
        .join("\n")
}
