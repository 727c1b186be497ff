use std::collections::HashSet;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{HierarchyError, HierarchyResult};

/// A single employee: a name plus the ordered list of direct reports.
///
/// Reports are arena indices rather than owned references, so the hierarchy
/// stays valid even if a caller wires an accidental cycle.
#[derive(Debug, Clone)]
pub struct Employee {
    /// Display name, fixed at hire time
    pub name: String,
    /// Indices of direct reports, in insertion order
    pub reports: Vec<Index>,
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Arena-based employee hierarchy.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Nodes are created unattached via [`OrgArena::hire`] and wired together with
/// [`OrgArena::assign_report`]; there is no removal.
#[derive(Debug)]
pub struct OrgArena {
    arena: Arena<Employee>,
}

impl Default for OrgArena {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Creates a new employee with no reports and returns its index.
    ///
    /// Names are not validated: empty and duplicate names are accepted.
    #[instrument(level = "trace", skip(self))]
    pub fn hire(&mut self, name: &str) -> Index {
        self.arena.insert(Employee {
            name: name.to_string(),
            reports: Vec::new(),
        })
    }

    /// Appends `report` to `manager`'s report list.
    ///
    /// Order is preserved and duplicates are permitted; no cycle check happens
    /// here. A cycle introduced by this call surfaces later, as
    /// [`HierarchyError::CycleDetected`] from [`OrgArena::count_subordinates`].
    #[instrument(level = "trace", skip(self))]
    pub fn assign_report(&mut self, manager: Index, report: Index) -> HierarchyResult<()> {
        if !self.arena.contains(report) {
            return Err(HierarchyError::EmployeeNotFound(report));
        }
        let node = self
            .arena
            .get_mut(manager)
            .ok_or(HierarchyError::EmployeeNotFound(manager))?;
        node.reports.push(report);
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, idx: Index) -> Option<&Employee> {
        self.arena.get(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Counts all subordinates of `start`: every node reachable through report
    /// links, excluding `start` itself. Direct reports contribute 1 each and
    /// indirect reports are counted through their managers, so a node wired in
    /// twice is counted once per occurrence.
    ///
    /// Implemented as an explicit-stack walk, so deep hierarchies cannot blow
    /// the call stack. The stack carries a visited marker per frame and an
    /// on-path set; a report that is already on the current management chain
    /// is a back edge and fails with [`HierarchyError::CycleDetected`] instead
    /// of looping forever.
    #[instrument(level = "debug", skip(self))]
    pub fn count_subordinates(&self, start: Index) -> HierarchyResult<usize> {
        if !self.arena.contains(start) {
            return Err(HierarchyError::EmployeeNotFound(start));
        }

        let mut count = 0;
        let mut on_path: HashSet<Index> = HashSet::new();
        let mut stack: Vec<(Index, bool)> = vec![(start, false)];

        while let Some((current_idx, visited)) = stack.pop() {
            if visited {
                on_path.remove(&current_idx);
                continue;
            }
            if !on_path.insert(current_idx) {
                return Err(HierarchyError::CycleDetected(self.name_of(current_idx)));
            }

            let node = self
                .arena
                .get(current_idx)
                .ok_or(HierarchyError::EmployeeNotFound(current_idx))?;

            stack.push((current_idx, true));
            for &report in node.reports.iter().rev() {
                stack.push((report, false));
            }

            if current_idx != start {
                count += 1;
            }
        }

        Ok(count)
    }

    /// Maximum depth of the subtree rooted at `start`, counting `start` as 1.
    ///
    /// Stack-based like `count_subordinates`, but without a cycle guard;
    /// callers holding untrusted wiring should count first.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self, start: Index) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(start, 1)];

        while let Some((current_idx, depth)) = stack.pop() {
            if let Some(node) = self.arena.get(current_idx) {
                if depth > max_depth {
                    max_depth = depth;
                }
                for &report in &node.reports {
                    stack.push((report, depth + 1));
                }
            }
        }

        max_depth
    }

    /// Collects the names of all leaf employees (no reports) reachable from
    /// `start`, in preorder.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_names(&self, start: Index) -> Vec<String> {
        self.iter(start)
            .filter(|(_, node)| node.reports.is_empty())
            .map(|(_, node)| node.name.clone())
            .collect()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self, start: Index) -> TreeIterator {
        TreeIterator::new(self, start)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self, start: Index) -> PostOrderIterator {
        PostOrderIterator::new(self, start)
    }

    fn name_of(&self, idx: Index) -> String {
        self.arena
            .get(idx)
            .map(|node| node.name.clone())
            .unwrap_or_default()
    }
}

pub struct TreeIterator<'a> {
    arena: &'a OrgArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a OrgArena, start: Index) -> Self {
        let mut stack = Vec::new();
        if arena.arena.contains(start) {
            stack.push(start);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a Employee);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get(current_idx) {
                // Push reports in reverse order for left-to-right traversal
                for &report in node.reports.iter().rev() {
                    self.stack.push(report);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    arena: &'a OrgArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(arena: &'a OrgArena, start: Index) -> Self {
        let mut stack = Vec::new();
        if arena.arena.contains(start) {
            stack.push((start, false));
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a Employee);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &report in node.reports.iter().rev() {
                        self.stack.push((report, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }

    #[test]
    fn test_hire_starts_without_reports() {
        let mut org = OrgArena::new();
        assert!(org.is_empty());

        let idx = org.hire("Sasu");

        assert_eq!(org.len(), 1);
        let employee = org.get(idx).unwrap();
        assert_eq!(employee.name, "Sasu");
        assert!(employee.reports.is_empty());
    }

    #[test]
    fn test_assign_report_appends_in_order() {
        let mut org = OrgArena::new();
        let manager = org.hire("Sasu");
        let first = org.hire("Emilia");
        let second = org.hire("Kjell");

        org.assign_report(manager, first).unwrap();
        org.assign_report(manager, second).unwrap();

        assert_eq!(org.get(manager).unwrap().reports, vec![first, second]);
    }

    #[test]
    fn test_count_of_leaf_is_zero() {
        let mut org = OrgArena::new();
        let idx = org.hire("Antti");

        assert_eq!(org.count_subordinates(idx).unwrap(), 0);
    }

    #[test]
    fn test_count_spans_all_levels() {
        // Sasu -> Emilia -> Erkki
        let mut org = OrgArena::new();
        let sasu = org.hire("Sasu");
        let emilia = org.hire("Emilia");
        let erkki = org.hire("Erkki");
        org.assign_report(sasu, emilia).unwrap();
        org.assign_report(emilia, erkki).unwrap();

        assert_eq!(org.count_subordinates(sasu).unwrap(), 2);
        assert_eq!(org.count_subordinates(emilia).unwrap(), 1);
        assert_eq!(org.count_subordinates(erkki).unwrap(), 0);
    }

    #[test]
    fn test_self_report_is_detected_as_cycle() {
        let mut org = OrgArena::new();
        let idx = org.hire("Sasu");
        org.assign_report(idx, idx).unwrap();

        let err = org.count_subordinates(idx).unwrap_err();
        assert!(matches!(err, HierarchyError::CycleDetected(name) if name == "Sasu"));
    }

    #[test]
    fn test_stale_index_is_rejected() {
        let mut org = OrgArena::new();
        let idx = org.hire("Sasu");

        let other = OrgArena::new();
        assert!(matches!(
            other.count_subordinates(idx),
            Err(HierarchyError::EmployeeNotFound(_))
        ));
        assert!(org.get(idx).is_some());
    }
}
