//! Dependency ordering for generated type declarations.

use std::collections::HashSet;

use super::registry::GeneratedType;

/// Order declarations so every type appears after the generated types it
/// references.
///
/// Round-based: each round emits, in creation order, every type whose
/// dependencies are all emitted. Tree-shaped nesting always drains this way;
/// should a round ever stall on cyclic input, the remainder is emitted in
/// creation order and the result returned normally.
pub fn sort_by_dependency(types: Vec<GeneratedType>) -> Vec<GeneratedType> {
    let mut remaining: Vec<Option<GeneratedType>> = types.into_iter().map(Some).collect();
    let mut emitted: HashSet<String> = HashSet::new();
    let mut ordered = Vec::with_capacity(remaining.len());

    loop {
        let mut progressed = false;
        for slot in remaining.iter_mut() {
            let ready = match slot {
                Some(ty) => ty.depends_on.iter().all(|dep| emitted.contains(dep)),
                None => false,
            };
            if !ready {
                continue;
            }
            if let Some(ty) = slot.take() {
                emitted.insert(ty.name.clone());
                ordered.push(ty);
                progressed = true;
            }
        }

        if remaining.iter().all(Option::is_none) {
            break;
        }
        if !progressed {
            for slot in remaining.iter_mut() {
                if let Some(ty) = slot.take() {
                    ordered.push(ty);
                }
            }
            break;
        }
    }

    ordered
}
