use crate::model::todo::Todo;

/// The user-selected subset of the collection shown in the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether `todo` belongs to this filter's subset.
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    /// Next filter in tab order: all → active → completed → all.
    pub fn cycled(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Lowercase label used in tabs and the empty placeholder.
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

/// Project a store snapshot through a filter. Pure: no side effects,
/// identical output for identical input, original order preserved.
pub fn project(todos: &[Todo], filter: Filter) -> Vec<&Todo> {
    todos.iter().filter(|t| filter.matches(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::todo::TodoId;

    fn sample() -> Vec<Todo> {
        let mut todos = vec![
            Todo::new(TodoId(1), "A".into()),
            Todo::new(TodoId(2), "B".into()),
            Todo::new(TodoId(3), "C".into()),
        ];
        todos[1].completed = true;
        todos
    }

    #[test]
    fn all_is_identity() {
        let todos = sample();
        let visible = project(&todos, Filter::All);
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().zip(&todos).all(|(a, b)| *a == b));
    }

    #[test]
    fn active_and_completed_partition_all() {
        let todos = sample();
        let active = project(&todos, Filter::Active);
        let completed = project(&todos, Filter::Completed);

        assert_eq!(active.len() + completed.len(), todos.len());
        for todo in &active {
            assert!(!completed.iter().any(|c| c.id == todo.id));
        }
        assert_eq!(
            active.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![TodoId(1), TodoId(3)]
        );
        assert_eq!(
            completed.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![TodoId(2)]
        );
    }

    #[test]
    fn projection_is_idempotent() {
        let todos = sample();
        assert_eq!(
            project(&todos, Filter::Active),
            project(&todos, Filter::Active)
        );
    }

    #[test]
    fn empty_collection_projects_empty_everywhere() {
        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            assert!(project(&[], filter).is_empty());
        }
    }

    #[test]
    fn cycle_visits_every_filter() {
        assert_eq!(Filter::All.cycled(), Filter::Active);
        assert_eq!(Filter::Active.cycled(), Filter::Completed);
        assert_eq!(Filter::Completed.cycled(), Filter::All);
    }
}
