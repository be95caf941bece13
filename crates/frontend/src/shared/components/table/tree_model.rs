use contracts::shared::approval::ApprovalStatus;
use std::collections::{HashMap, HashSet};

/// Default depth ceiling: rows deeper than this render as leaves.
pub const DEFAULT_MAX_LEVEL: usize = 4;

/// Minimal interface a caller's row type must expose to be shown in a
/// nested table. Domain fields stay on the concrete type, the model never
/// looks at them.
pub trait TreeRow: Clone {
    fn id(&self) -> &str;
    fn children(&self) -> &[Self];
    fn status(&self) -> Option<ApprovalStatus> {
        None
    }
}

/// One line of the flattened, render-ready projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    /// Index into the model's arena
    pub index: usize,
    /// Depth from the root (root = 0)
    pub depth: usize,
}

#[derive(Clone)]
struct TreeEntry<R> {
    row: R,
    depth: usize,
    children: Vec<usize>,
    status: Option<ApprovalStatus>,
}

/// Arena-backed tree of rows.
///
/// Built once from the caller's nested rows; depth is computed during the
/// build rather than trusted from input. Expansion state lives OUTSIDE the
/// model, in a caller-held `HashMap<String, bool>` (view-state, not
/// model-state), so the same model can be projected under different
/// expansion maps. Status is an in-place overlay: `set_status` is O(1) and
/// never touches the input rows.
#[derive(Clone)]
pub struct TreeModel<R: TreeRow> {
    entries: Vec<TreeEntry<R>>,
    roots: Vec<usize>,
    index_by_id: HashMap<String, usize>,
    max_level: usize,
}

impl<R: TreeRow> TreeModel<R> {
    /// Builds the arena from nested root rows.
    ///
    /// A repeated id (including a node reachable from itself) would make the
    /// flatten loop unbounded, so the subtree under the duplicate is dropped
    /// with a warning and the rest of the table still renders.
    pub fn build(rows: &[R], max_level: usize) -> Self {
        let mut model = Self {
            entries: Vec::new(),
            roots: Vec::new(),
            index_by_id: HashMap::new(),
            max_level,
        };
        let mut seen = HashSet::new();
        for row in rows {
            if let Some(index) = model.insert(row, 0, &mut seen) {
                model.roots.push(index);
            }
        }
        model
    }

    fn insert(&mut self, row: &R, depth: usize, seen: &mut HashSet<String>) -> Option<usize> {
        let id = row.id().to_string();
        if !seen.insert(id.clone()) {
            log::warn!("duplicate row id '{}', dropping subtree", id);
            return None;
        }

        let index = self.entries.len();
        self.entries.push(TreeEntry {
            row: row.clone(),
            depth,
            children: Vec::new(),
            status: row.status(),
        });
        self.index_by_id.insert(id, index);

        let mut children = Vec::new();
        for child in row.children() {
            if let Some(child_index) = self.insert(child, depth + 1, seen) {
                children.push(child_index);
            }
        }
        self.entries[index].children = children;
        Some(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn row(&self, index: usize) -> &R {
        &self.entries[index].row
    }

    pub fn depth(&self, index: usize) -> usize {
        self.entries[index].depth
    }

    pub fn has_children(&self, index: usize) -> bool {
        !self.entries[index].children.is_empty()
    }

    /// A row past the depth ceiling renders as a leaf even when it has
    /// children, and must not get an expand affordance.
    pub fn is_expandable(&self, index: usize) -> bool {
        self.has_children(index) && self.entries[index].depth < self.max_level
    }

    fn is_expanded(&self, expanded: &HashMap<String, bool>, index: usize) -> bool {
        self.is_expandable(index)
            && expanded
                .get(self.entries[index].row.id())
                .copied()
                .unwrap_or(false)
    }

    /// Flips the expansion flag for `id` in the caller-held map.
    ///
    /// No-op for unknown ids and for rows that are not expandable.
    pub fn toggle_expanded(&self, expanded: &mut HashMap<String, bool>, id: &str) {
        if let Some(&index) = self.index_by_id.get(id) {
            if self.is_expandable(index) {
                let flag = expanded.entry(id.to_string()).or_insert(false);
                *flag = !*flag;
            }
        }
    }

    /// Depth-first pre-order flatten honoring the expansion map.
    ///
    /// Children follow their parent only while the parent is expandable and
    /// marked expanded. Collapsed subtrees keep their descendants' flags, so
    /// re-expanding a parent restores the previous picture.
    pub fn visible_rows(&self, expanded: &HashMap<String, bool>) -> Vec<VisibleRow> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            out.push(VisibleRow {
                index,
                depth: self.entries[index].depth,
            });
            if self.is_expanded(expanded, index) {
                for &child in self.entries[index].children.iter().rev() {
                    stack.push(child);
                }
            }
        }
        out
    }

    /// Display status for the approval column; a row without one is pending.
    pub fn display_status(&self, index: usize) -> ApprovalStatus {
        self.entries[index].status.unwrap_or_default()
    }

    /// Overlays a new status for `id` in place. Returns false for unknown
    /// ids. The input rows are never mutated.
    pub fn set_status(&mut self, id: &str, status: ApprovalStatus) -> bool {
        match self.index_by_id.get(id) {
            Some(&index) => {
                self.entries[index].status = Some(status);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        id: String,
        status: Option<ApprovalStatus>,
        children: Vec<Row>,
    }

    impl Row {
        fn new(id: &str, children: Vec<Row>) -> Self {
            Self {
                id: id.to_string(),
                status: None,
                children,
            }
        }
    }

    impl TreeRow for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn children(&self) -> &[Self] {
            &self.children
        }

        fn status(&self) -> Option<ApprovalStatus> {
            self.status
        }
    }

    fn ids(model: &TreeModel<Row>, visible: &[VisibleRow]) -> Vec<(String, usize)> {
        visible
            .iter()
            .map(|v| (model.row(v.index).id.clone(), v.depth))
            .collect()
    }

    #[test]
    fn test_collapsed_tree_shows_roots_only() {
        let rows = vec![
            Row::new("1", vec![Row::new("1-1", vec![])]),
            Row::new("2", vec![]),
        ];
        let model = TreeModel::build(&rows, DEFAULT_MAX_LEVEL);
        let expanded = HashMap::new();
        assert_eq!(
            ids(&model, &model.visible_rows(&expanded)),
            vec![("1".to_string(), 0), ("2".to_string(), 0)]
        );
    }

    #[test]
    fn test_expand_reveals_children_in_preorder() {
        let rows = vec![Row::new("1", vec![Row::new("1-1", vec![])])];
        let model = TreeModel::build(&rows, DEFAULT_MAX_LEVEL);
        let mut expanded = HashMap::new();

        model.toggle_expanded(&mut expanded, "1");
        assert_eq!(
            ids(&model, &model.visible_rows(&expanded)),
            vec![("1".to_string(), 0), ("1-1".to_string(), 1)]
        );
    }

    #[test]
    fn test_toggle_roundtrip_restores_output() {
        let rows = vec![Row::new(
            "1",
            vec![Row::new("1-1", vec![]), Row::new("1-2", vec![])],
        )];
        let model = TreeModel::build(&rows, DEFAULT_MAX_LEVEL);
        let mut expanded = HashMap::new();

        let before = model.visible_rows(&expanded);
        model.toggle_expanded(&mut expanded, "1");
        model.toggle_expanded(&mut expanded, "1");
        assert_eq!(model.visible_rows(&expanded), before);
    }

    #[test]
    fn test_leaf_is_not_expandable() {
        let rows = vec![Row::new("1", vec![])];
        let model = TreeModel::build(&rows, DEFAULT_MAX_LEVEL);
        let mut expanded = HashMap::new();

        assert!(!model.is_expandable(0));
        model.toggle_expanded(&mut expanded, "1");
        assert!(expanded.is_empty());
    }

    #[test]
    fn test_unknown_id_toggle_is_noop() {
        let rows = vec![Row::new("1", vec![Row::new("1-1", vec![])])];
        let model = TreeModel::build(&rows, DEFAULT_MAX_LEVEL);
        let mut expanded = HashMap::new();

        model.toggle_expanded(&mut expanded, "missing");
        assert!(expanded.is_empty());
    }

    #[test]
    fn test_depth_ceiling_stops_expansion() {
        let rows = vec![Row::new(
            "1",
            vec![Row::new("1-1", vec![Row::new("1-1-1", vec![])])],
        )];
        let model = TreeModel::build(&rows, 1);
        let mut expanded = HashMap::new();

        model.toggle_expanded(&mut expanded, "1");
        // "1-1" сидит на потолке глубины: разворот запрещён даже с детьми
        model.toggle_expanded(&mut expanded, "1-1");
        assert_eq!(
            ids(&model, &model.visible_rows(&expanded)),
            vec![("1".to_string(), 0), ("1-1".to_string(), 1)]
        );
    }

    #[test]
    fn test_expansion_memory_survives_parent_collapse() {
        let rows = vec![Row::new(
            "p",
            vec![Row::new("c", vec![Row::new("g", vec![])])],
        )];
        let model = TreeModel::build(&rows, DEFAULT_MAX_LEVEL);
        let mut expanded = HashMap::new();

        model.toggle_expanded(&mut expanded, "p");
        model.toggle_expanded(&mut expanded, "c");
        let full = ids(&model, &model.visible_rows(&expanded));
        assert_eq!(
            full,
            vec![
                ("p".to_string(), 0),
                ("c".to_string(), 1),
                ("g".to_string(), 2)
            ]
        );

        model.toggle_expanded(&mut expanded, "p");
        assert_eq!(
            ids(&model, &model.visible_rows(&expanded)),
            vec![("p".to_string(), 0)]
        );

        // Повторный разворот родителя возвращает и развёрнутого ребёнка
        model.toggle_expanded(&mut expanded, "p");
        assert_eq!(ids(&model, &model.visible_rows(&expanded)), full);
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let rows = vec![Row::new("1", vec![])];
        let model = TreeModel::build(&rows, DEFAULT_MAX_LEVEL);
        assert_eq!(model.display_status(0), ApprovalStatus::Pending);
    }

    #[test]
    fn test_set_status_overlays_without_touching_rows() {
        let rows = vec![Row::new("1", vec![Row::new("1-1", vec![])])];
        let mut model = TreeModel::build(&rows, DEFAULT_MAX_LEVEL);

        assert!(model.set_status("1-1", ApprovalStatus::Approved));
        assert!(!model.set_status("missing", ApprovalStatus::Rejected));

        let child = model.index_by_id["1-1"];
        assert_eq!(model.display_status(child), ApprovalStatus::Approved);
        // Исходные строки не тронуты
        assert!(rows[0].children[0].status.is_none());
    }

    #[test]
    fn test_duplicate_id_drops_subtree() {
        let rows = vec![
            Row::new("1", vec![Row::new("dup", vec![Row::new("x", vec![])])]),
            Row::new("dup", vec![Row::new("y", vec![])]),
        ];
        let model = TreeModel::build(&rows, DEFAULT_MAX_LEVEL);

        // Второй "dup" вместе с "y" отброшен, остальное уцелело
        assert_eq!(model.len(), 3);
        let expanded = HashMap::new();
        assert_eq!(
            ids(&model, &model.visible_rows(&expanded)),
            vec![("1".to_string(), 0)]
        );
    }

    #[test]
    fn test_end_to_end_scenario() {
        let rows = vec![Row::new("1", vec![Row::new("1-1", vec![])])];
        let model = TreeModel::build(&rows, DEFAULT_MAX_LEVEL);
        let mut expanded = HashMap::new();

        let visible = model.visible_rows(&expanded);
        assert_eq!(ids(&model, &visible), vec![("1".to_string(), 0)]);

        model.toggle_expanded(&mut expanded, "1");
        let visible = model.visible_rows(&expanded);
        assert_eq!(
            ids(&model, &visible),
            vec![("1".to_string(), 0), ("1-1".to_string(), 1)]
        );
    }

    #[test]
    fn test_empty_input() {
        let model = TreeModel::<Row>::build(&[], DEFAULT_MAX_LEVEL);
        assert!(model.is_empty());
        assert!(model.visible_rows(&HashMap::new()).is_empty());
    }
}
