//! Vocabulary IRIs used when reading policy graphs.

/// RDF vocabulary
pub mod rdf {
    /// rdf:type
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// Dublin Core Terms
pub mod dcterms {
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    pub const IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
}

/// ODRL 2.2 information model
pub mod odrl {
    /// odrl:Policy class
    pub const POLICY: &str = "http://www.w3.org/ns/odrl/2/Policy";

    pub const PERMISSION: &str = "http://www.w3.org/ns/odrl/2/permission";
    pub const OBLIGATION: &str = "http://www.w3.org/ns/odrl/2/obligation";
    pub const PROHIBITION: &str = "http://www.w3.org/ns/odrl/2/prohibition";

    pub const ACTION: &str = "http://www.w3.org/ns/odrl/2/action";
    pub const ASSIGNEE: &str = "http://www.w3.org/ns/odrl/2/assignee";
}
