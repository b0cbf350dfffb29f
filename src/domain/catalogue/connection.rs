/// A directed, typed edge between two documents. Identity is the full
/// (parent, child, type) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub parent_id: i64,
    pub child_id: i64,
    pub connection_type: String,
}
