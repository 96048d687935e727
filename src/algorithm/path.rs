use log::warn;

use crate::algorithm::PathRecord;
use crate::graph::NodeId;

/// Walks predecessor links back from `target` and returns the path origin-first.
///
/// Returns None if `target` has no record. A chain longer than the number of
/// records can only come from a cycle (negative weights), which is also None.
pub(crate) fn reconstruct_path<W>(records: &[Option<PathRecord<W>>], target: NodeId) -> Option<Vec<NodeId>> {
    let mut current = records.get(target.index())?.as_ref()?;
    let mut path = vec![target];

    while let Some(pred) = current.predecessor {
        if path.len() > records.len() {
            warn!("Predecessor chain from {} does not reach the origin", target);
            return None;
        }

        path.push(pred);
        current = records.get(pred.index())?.as_ref()?;
    }

    path.reverse();
    Some(path)
}
