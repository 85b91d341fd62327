//! Recognizes the declaration following a marker line.
//!
//! Starting from a marker, looks past blanks, `@override` and extra doc
//! comments for the marker's getter signature. Single-line getters end on the
//! signature line; list getters are followed through the delimiter balance
//! until their closing line.

use crate::balance::DelimiterBalance;
use crate::grammar::{self, GetterShape, Marker};

/// Body style of a balanced getter, decided by its signature line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyForm {
    /// `get sections => [ ... ];`
    Expression,
    /// `get sections { ... }`
    Block,
}

impl BodyForm {
    pub fn of_signature(line: &str) -> Self {
        if line.contains(grammar::ARROW) {
            Self::Expression
        } else {
            Self::Block
        }
    }

    /// True if `line` closes a body of this form under `balance`, which must
    /// already include `line`.
    fn closes(self, line: &str, balance: &DelimiterBalance) -> bool {
        match self {
            Self::Expression => {
                balance.brackets == 0 && line.trim_end().ends_with(grammar::LIST_TERMINATOR)
            }
            Self::Block => balance.braces == 0 && line.trim() == grammar::BLOCK_CLOSER,
        }
    }
}

/// Outcome of looking for a getter after a marker. Line indices are 0-based
/// and `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognition {
    /// The marker is followed by something else; leave it alone.
    None,
    SingleLine { end: usize },
    Balanced { end: usize, form: BodyForm },
    /// The signature was found but its body never closed before end of file.
    Unterminated { signature: usize },
}

/// Examine the lines after the marker at `marker_idx`.
pub fn recognize(lines: &[&str], marker_idx: usize, marker: Marker) -> Recognition {
    let mut j = marker_idx + 1;
    while j < lines.len() {
        let line = lines[j];
        // Doc comments are checked first so prose mentioning a signature
        // is never taken for the getter itself.
        if grammar::is_skippable(line) {
            j += 1;
            continue;
        }
        if !marker.is_signature(line) {
            return Recognition::None;
        }
        return match marker.shape() {
            GetterShape::SingleLine => Recognition::SingleLine { end: j + 1 },
            GetterShape::Balanced => find_balanced_end(lines, j),
        };
    }
    Recognition::None
}

/// Feed lines from `signature` onward through a fresh balance until the
/// body's closing line.
fn find_balanced_end(lines: &[&str], signature: usize) -> Recognition {
    let form = BodyForm::of_signature(lines[signature]);
    let mut balance = DelimiterBalance::new();
    for (k, line) in lines.iter().enumerate().skip(signature) {
        balance = balance.after_line(line);
        if balance.started && form.closes(line, &balance) {
            return Recognition::Balanced { end: k + 1, form };
        }
    }
    Recognition::Unterminated { signature }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &str) -> Vec<&str> {
        src.split('\n').collect()
    }

    #[test]
    fn single_line_with_override() {
        let src = "  /// UI display type for generic rendering.\n  @override\n  ResultDisplayType get displayType => ResultDisplayType.simple;\n  int x = 1;";
        let l = lines(src);
        assert_eq!(
            recognize(&l, 0, Marker::DisplayType),
            Recognition::SingleLine { end: 3 }
        );
    }

    #[test]
    fn single_line_without_override() {
        let src = "/// UI display type for generic rendering.\nResultDisplayType get displayType => ResultDisplayType.table;";
        let l = lines(src);
        assert_eq!(
            recognize(&l, 0, Marker::DisplayType),
            Recognition::SingleLine { end: 2 }
        );
    }

    #[test]
    fn skips_blanks_and_extra_docs() {
        let src = "/// UI display type for generic rendering.\n\n/// Used by the renderer.\n@override\n\nResultDisplayType get displayType => ResultDisplayType.simple;";
        let l = lines(src);
        assert_eq!(
            recognize(&l, 0, Marker::DisplayType),
            Recognition::SingleLine { end: 6 }
        );
    }

    #[test]
    fn doc_line_quoting_signature_is_skipped() {
        let src = "/// UI display type for generic rendering.\n/// ResultDisplayType get displayType => ResultDisplayType.legacy;\n@override\nResultDisplayType get displayType => ResultDisplayType.simple;\nint x = 1;";
        let l = lines(src);
        assert_eq!(
            recognize(&l, 0, Marker::DisplayType),
            Recognition::SingleLine { end: 4 }
        );
    }

    #[test]
    fn prose_after_marker_is_not_a_getter() {
        let src = "/// UI display type for generic rendering.\nfinal String label;\nResultDisplayType get displayType => x;";
        let l = lines(src);
        assert_eq!(recognize(&l, 0, Marker::DisplayType), Recognition::None);
    }

    #[test]
    fn wrong_signature_for_marker() {
        let src = "/// UI display type for generic rendering.\n@override\nList<ResultSection> get sections => [];";
        let l = lines(src);
        assert_eq!(recognize(&l, 0, Marker::DisplayType), Recognition::None);
    }

    #[test]
    fn marker_at_end_of_file() {
        let l = lines("/// Structured display sections for generic rendering.\n@override\n");
        assert_eq!(recognize(&l, 0, Marker::Sections), Recognition::None);
    }

    #[test]
    fn block_form_with_nesting() {
        let src = r#"  /// Structured display sections for generic rendering.
  @override
  List<ResultSection> get sections {
    final rows = [1, 2];
    if (rows.isEmpty) {
      return [];
    }
    return [
      ResultSection(title: 'A', items: [
        ResultItem(label: 'x', value: '${rows[0]}'),
      ]),
      ResultSection(title: 'B', items: []),
    ];
  }

  @override
  String toString() => 'x';"#;
        let l = lines(src);
        assert_eq!(
            recognize(&l, 0, Marker::Sections),
            Recognition::Balanced { end: 14, form: BodyForm::Block }
        );
        assert_eq!(l[13].trim(), "}");
    }

    #[test]
    fn block_form_ignores_inner_lone_brace() {
        // The `}` closing the `if` stands alone on its line but depth is still 1.
        let src = "List<ResultSection> get sections {\n  if (a) {\n    return [];\n  }\n  return [];\n}\nint y = 0;";
        let mut l = vec!["/// Structured display sections for generic rendering."];
        l.extend(lines(src));
        assert_eq!(
            recognize(&l, 0, Marker::Sections),
            Recognition::Balanced { end: 7, form: BodyForm::Block }
        );
    }

    #[test]
    fn expression_form_ends_on_list_terminator() {
        let src = r#"/// Structured display sections for generic rendering.
@override
List<ResultSection> get sections => [
      ResultSection(items: [
        ResultItem(label: 'a'),
      ]),
      ResultSection(items: const []),
    ];
String get name => 'n';"#;
        let l = lines(src);
        assert_eq!(
            recognize(&l, 0, Marker::Sections),
            Recognition::Balanced { end: 8, form: BodyForm::Expression }
        );
    }

    #[test]
    fn expression_form_on_one_line() {
        let src = "/// Structured display sections for generic rendering.\n@override\nList<ResultSection> get sections => [ResultSection(items: [])];\nint z = 0;";
        let l = lines(src);
        assert_eq!(
            recognize(&l, 0, Marker::Sections),
            Recognition::Balanced { end: 3, form: BodyForm::Expression }
        );
    }

    #[test]
    fn unterminated_body() {
        let src = "/// Structured display sections for generic rendering.\n@override\nList<ResultSection> get sections {\n  return [\n    ResultSection(),\n  ];\n";
        let l = lines(src);
        assert_eq!(
            recognize(&l, 0, Marker::Sections),
            Recognition::Unterminated { signature: 2 }
        );
    }

    #[test]
    fn body_form_detection() {
        assert_eq!(
            BodyForm::of_signature("List<ResultSection> get sections => ["),
            BodyForm::Expression
        );
        assert_eq!(
            BodyForm::of_signature("List<ResultSection> get sections {"),
            BodyForm::Block
        );
    }
}
