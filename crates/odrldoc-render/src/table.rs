use crate::extractor::TableRow;

/// AsciiDoc table cell delimiter
const DELIMITER: char = '|';
const ESCAPED_DELIMITER: &str = "\\|";

/// Renders one rule section of a policy page as an AsciiDoc table
pub struct TableRenderer;

impl TableRenderer {
    /// Render `rows` under a `.Section` title, or a "none defined" line when
    /// there are no rows.
    ///
    /// Section names are expected to be plural nouns already; the empty
    /// placeholder only lowercases them.
    pub fn render(section_name: &str, rows: &[TableRow]) -> String {
        if rows.is_empty() {
            return format!("*No {} defined.*\n\n", section_name.to_lowercase());
        }

        let mut table = format!(
            ".{}\n|===\n| UID | Description | Action | Assignee(s)\n\n",
            section_name
        );
        for row in rows {
            table.push_str(&format!(
                "| {} | {} | {} | {}\n",
                row.id,
                Self::escape_cell(&row.description),
                row.action,
                row.assignees.join(", ")
            ));
        }
        table.push_str("|===\n\n");
        table
    }

    /// Escape the cell delimiter so free text cannot split a row
    pub fn escape_cell(text: &str) -> String {
        text.replace(DELIMITER, ESCAPED_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, description: &str, action: &str, assignees: &[&str]) -> TableRow {
        TableRow {
            id: id.to_string(),
            description: description.to_string(),
            action: action.to_string(),
            assignees: assignees.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_section_placeholder() {
        assert_eq!(
            TableRenderer::render("Permissions", &[]),
            "*No permissions defined.*\n\n"
        );
        assert_eq!(
            TableRenderer::render("Obligations", &[]),
            "*No obligations defined.*\n\n"
        );
    }

    #[test]
    fn test_single_row_table() {
        let rendered = TableRenderer::render(
            "Permissions",
            &[row("ex:p1", "Read only", "read", &["Data Provider"])],
        );

        assert_eq!(
            rendered,
            ".Permissions\n\
             |===\n\
             | UID | Description | Action | Assignee(s)\n\
             \n\
             | ex:p1 | Read only | read | Data Provider\n\
             |===\n\
             \n"
        );
    }

    #[test]
    fn test_assignees_joined() {
        let rendered = TableRenderer::render(
            "Obligations",
            &[row("ex:o1", "Attribute", "attribute", &["Alice", "Bob"])],
        );
        assert!(rendered.contains("| ex:o1 | Attribute | attribute | Alice, Bob\n"));
    }

    #[test]
    fn test_no_assignees_leaves_empty_cell() {
        let rendered = TableRenderer::render("Prohibitions", &[row("ex:x", "", "", &[])]);
        assert!(rendered.contains("| ex:x |  |  | \n"));
        assert!(!rendered.to_lowercase().contains("none"));
    }

    #[test]
    fn test_description_delimiter_escaped() {
        let rendered =
            TableRenderer::render("Permissions", &[row("ex:p1", "A|B", "read", &[])]);
        assert!(rendered.contains("| ex:p1 | A\\|B | read | \n"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(TableRenderer::escape_cell("plain"), "plain");
        assert_eq!(TableRenderer::escape_cell("a|b|c"), "a\\|b\\|c");
        assert_eq!(TableRenderer::escape_cell("||"), "\\|\\|");
    }

    #[test]
    fn test_rows_in_given_order() {
        let rendered = TableRenderer::render(
            "Permissions",
            &[row("ex:b", "", "", &[]), row("ex:a", "", "", &[])],
        );
        let b = rendered.find("ex:b").unwrap();
        let a = rendered.find("ex:a").unwrap();
        assert!(b < a);
    }
}
