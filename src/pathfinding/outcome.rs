/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<N, C> {
    /// `path` runs from the node after the start up to and including the
    /// goal. It is empty when start and goal are the same node.
    Found { path: Vec<N>, cost: C },
    /// The start or the goal is impassable; nothing was explored.
    EndpointBlocked,
    /// The cost budget ran out before the goal was reached.
    BudgetExhausted,
    /// Every reachable node was explored without reaching the goal.
    Unreachable,
}

impl<N, C> SearchOutcome<N, C> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn cost(&self) -> Option<&C> {
        match self {
            SearchOutcome::Found { cost, .. } => Some(cost),
            _ => None,
        }
    }

    /// The found path, or an empty one for every kind of failure.
    pub fn into_path(self) -> Vec<N> {
        match self {
            SearchOutcome::Found { path, .. } => path,
            _ => Vec::new(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOutcome::Found { .. } => "found",
            SearchOutcome::EndpointBlocked => "endpoint blocked",
            SearchOutcome::BudgetExhausted => "budget exhausted",
            SearchOutcome::Unreachable => "unreachable",
        }
    }
}
