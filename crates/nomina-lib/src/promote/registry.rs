//! Name and identity registry for generated types.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};

use crate::parser::SyntaxNode;
use crate::parser::ast::RecordLit;

/// Ordered field list identifying a structural shape: (field name, rendered type).
pub type Signature = Vec<(String, String)>;

/// A synthesized named record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedType {
    pub name: String,
    pub fields: Signature,
    /// Names of other generated types appearing among the field types.
    pub depends_on: IndexSet<String>,
}

pub(crate) const NAME_PREFIX: &str = "Record";

/// Maps structural identity to canonical names for one promotion batch.
///
/// A registry lives for exactly one detect-and-rewrite transaction;
/// concurrent transactions each get their own. Insertion order of the
/// signature map is the creation order every later tie-break uses.
#[derive(Debug, Default)]
pub struct NameRegistry {
    types: IndexMap<Signature, GeneratedType>,
    by_node: HashMap<SyntaxNode, String>,
    counter: u32,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a literal under its finalized signature.
    ///
    /// Structurally identical signatures collapse onto the existing name;
    /// a new shape mints the next counter value. The counter never resets
    /// within a batch, so names stay gap-free and deterministic.
    pub fn register(
        &mut self,
        lit: &RecordLit,
        signature: Signature,
        depends_on: IndexSet<String>,
    ) -> String {
        let name = match self.types.get(&signature) {
            Some(existing) => existing.name.clone(),
            None => {
                self.counter += 1;
                let name = format!("{}{:03}", NAME_PREFIX, self.counter);
                self.types.insert(
                    signature.clone(),
                    GeneratedType {
                        name: name.clone(),
                        fields: signature,
                        depends_on,
                    },
                );
                name
            }
        };
        self.by_node.insert(lit.as_cst().clone(), name.clone());
        name
    }

    /// The generated name assigned to a specific literal node, if any.
    pub fn name_for(&self, node: &SyntaxNode) -> Option<&str> {
        self.by_node.get(node).map(String::as_str)
    }

    /// Generated types in creation order.
    pub fn types(&self) -> impl Iterator<Item = &GeneratedType> + '_ {
        self.types.values()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub(crate) fn node_names(&self) -> &HashMap<SyntaxNode, String> {
        &self.by_node
    }
}
