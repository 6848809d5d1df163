use odrldoc_graph::vocab::{dcterms, odrl};
use odrldoc_graph::{GraphQuery, Term};

/// One rule as it appears in a rendered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub description: String,
    pub action: String,
    pub assignees: Vec<String>,
}

/// The rules attached to a single policy, split by ODRL relation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub permissions: Vec<TableRow>,
    pub obligations: Vec<TableRow>,
    pub prohibitions: Vec<TableRow>,
}

/// Collects permission, obligation and prohibition rows for a policy.
///
/// Each relation is traversed independently, so a rule linked through two
/// relations shows up in both lists. Rows keep graph order unless sorting
/// is enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyExtractor {
    sort_rows: bool,
}

impl PolicyExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// With `sort_rows`, rows are ordered by UID and each row's assignees
    /// lexically
    pub fn with_sort_rows(sort_rows: bool) -> Self {
        Self { sort_rows }
    }

    pub fn extract(&self, graph: &dyn GraphQuery, policy: &Term) -> RuleSet {
        RuleSet {
            permissions: self.rows_for(graph, policy, odrl::PERMISSION),
            obligations: self.rows_for(graph, policy, odrl::OBLIGATION),
            prohibitions: self.rows_for(graph, policy, odrl::PROHIBITION),
        }
    }

    fn rows_for(&self, graph: &dyn GraphQuery, policy: &Term, relation: &str) -> Vec<TableRow> {
        let mut rows: Vec<TableRow> = graph
            .objects_of(policy, relation)
            .into_iter()
            .map(|rule| Self::row(graph, rule))
            .collect();

        if self.sort_rows {
            for row in &mut rows {
                row.assignees.sort();
            }
            rows.sort_by(|a, b| a.id.cmp(&b.id));
        }
        rows
    }

    fn row(graph: &dyn GraphQuery, rule: &Term) -> TableRow {
        TableRow {
            id: rule.lexical().to_string(),
            description: literal_or_empty(graph, rule, dcterms::DESCRIPTION),
            action: literal_or_empty(graph, rule, odrl::ACTION),
            assignees: graph
                .objects_of(rule, odrl::ASSIGNEE)
                .into_iter()
                .map(|a| a.lexical().to_string())
                .collect(),
        }
    }
}

/// Lexical form of `(subject, predicate, ?)`, or an empty string when absent
pub(crate) fn literal_or_empty(graph: &dyn GraphQuery, subject: &Term, predicate: &str) -> String {
    graph
        .value_of(subject, predicate)
        .map(Term::lexical)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use odrldoc_graph::vocab::rdf;
    use odrldoc_graph::Graph;

    fn policy() -> Term {
        Term::iri("http://example.org/policy/open")
    }

    fn base_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_triple(policy(), rdf::TYPE, Term::iri(odrl::POLICY));
        graph
    }

    #[test]
    fn test_extract_full_rule() {
        let mut graph = base_graph();
        let rule = Term::iri("ex:p1");
        graph.add_triple(policy(), odrl::PERMISSION, rule.clone());
        graph.add_triple(rule.clone(), dcterms::DESCRIPTION, Term::literal("Read only"));
        graph.add_triple(rule.clone(), odrl::ACTION, Term::literal("read"));
        graph.add_triple(rule, odrl::ASSIGNEE, Term::literal("Data Provider"));

        let rules = PolicyExtractor::new().extract(&graph, &policy());
        assert_eq!(
            rules.permissions,
            vec![TableRow {
                id: "ex:p1".to_string(),
                description: "Read only".to_string(),
                action: "read".to_string(),
                assignees: vec!["Data Provider".to_string()],
            }]
        );
        assert!(rules.obligations.is_empty());
        assert!(rules.prohibitions.is_empty());
    }

    #[test]
    fn test_missing_literals_become_empty() {
        let mut graph = base_graph();
        graph.add_triple(policy(), odrl::OBLIGATION, Term::iri("ex:o1"));

        let rules = PolicyExtractor::new().extract(&graph, &policy());
        let row = &rules.obligations[0];
        assert_eq!(row.id, "ex:o1");
        assert_eq!(row.description, "");
        assert_eq!(row.action, "");
        assert!(row.assignees.is_empty());
    }

    #[test]
    fn test_action_as_iri() {
        let mut graph = base_graph();
        let rule = Term::iri("ex:p1");
        graph.add_triple(policy(), odrl::PERMISSION, rule.clone());
        graph.add_triple(rule, odrl::ACTION, Term::iri("http://www.w3.org/ns/odrl/2/use"));

        let rules = PolicyExtractor::new().extract(&graph, &policy());
        assert_eq!(rules.permissions[0].action, "http://www.w3.org/ns/odrl/2/use");
    }

    #[test]
    fn test_rule_in_two_relations_is_listed_twice() {
        let mut graph = base_graph();
        let rule = Term::iri("ex:shared");
        graph.add_triple(policy(), odrl::PERMISSION, rule.clone());
        graph.add_triple(policy(), odrl::OBLIGATION, rule);

        let rules = PolicyExtractor::new().extract(&graph, &policy());
        assert_eq!(rules.permissions.len(), 1);
        assert_eq!(rules.obligations.len(), 1);
        assert_eq!(rules.permissions[0], rules.obligations[0]);
    }

    #[test]
    fn test_graph_order_is_kept_by_default() {
        let mut graph = base_graph();
        graph.add_triple(policy(), odrl::PROHIBITION, Term::iri("ex:z"));
        graph.add_triple(policy(), odrl::PROHIBITION, Term::iri("ex:a"));
        graph.add_triple(Term::iri("ex:z"), odrl::ASSIGNEE, Term::literal("Zed"));
        graph.add_triple(Term::iri("ex:z"), odrl::ASSIGNEE, Term::literal("Amy"));

        let rules = PolicyExtractor::new().extract(&graph, &policy());
        let ids: Vec<_> = rules.prohibitions.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ex:z", "ex:a"]);
        assert_eq!(rules.prohibitions[0].assignees, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_sorted_extractor() {
        let mut graph = base_graph();
        graph.add_triple(policy(), odrl::PROHIBITION, Term::iri("ex:z"));
        graph.add_triple(policy(), odrl::PROHIBITION, Term::iri("ex:a"));
        graph.add_triple(Term::iri("ex:z"), odrl::ASSIGNEE, Term::literal("Zed"));
        graph.add_triple(Term::iri("ex:z"), odrl::ASSIGNEE, Term::literal("Amy"));

        let rules = PolicyExtractor::with_sort_rows(true).extract(&graph, &policy());
        let ids: Vec<_> = rules.prohibitions.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ex:a", "ex:z"]);
        assert_eq!(rules.prohibitions[1].assignees, vec!["Amy", "Zed"]);
    }

    #[test]
    fn test_policy_without_rules() {
        let graph = base_graph();
        let rules = PolicyExtractor::new().extract(&graph, &policy());
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn test_literal_or_empty() {
        let mut graph = base_graph();
        graph.add_triple(policy(), dcterms::TITLE, Term::literal("Open"));

        assert_eq!(literal_or_empty(&graph, &policy(), dcterms::TITLE), "Open");
        assert_eq!(literal_or_empty(&graph, &policy(), dcterms::DESCRIPTION), "");
    }
}
