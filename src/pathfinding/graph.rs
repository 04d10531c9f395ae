use super::cost::Cost;

/// The caller side of a search: node prices, edge prices, the distance
/// estimate and neighbor enumeration.
///
/// All methods are queries. A search calls them many times per node and
/// expects the same answers each time.
pub trait SearchGraph<N> {
    type Cost: Cost;

    /// Cost of occupying `node`. `None` marks the node as permanently
    /// impassable.
    fn state_cost(&self, node: &N) -> Option<Self::Cost>;

    /// Cost of the edge `from -> to`. `None` blocks this edge only; `to` may
    /// still be reached through another neighbor.
    fn transition_cost(&self, from: &N, to: &N) -> Option<Self::Cost>;

    /// Estimated remaining cost from `from` to `to`. Must not overestimate
    /// for the returned paths to be optimal.
    fn heuristic(&self, from: &N, to: &N) -> Self::Cost;

    /// Calls `emit` once for every node adjacent to `current`. `parent` is
    /// the node `current` was reached from (equal to `current` for the start
    /// node), so direction-aware graphs can forbid doubling back.
    fn neighbors(&self, parent: &N, current: &N, emit: &mut dyn FnMut(N));
}

/// A `SearchGraph` assembled from four closures.
pub struct FnGraph<S, T, H, E> {
    state_cost: S,
    transition_cost: T,
    heuristic: H,
    neighbors: E,
}

impl<S, T, H, E> FnGraph<S, T, H, E> {
    pub fn new<N, C>(state_cost: S, transition_cost: T, heuristic: H, neighbors: E) -> Self
    where
        C: Cost,
        S: Fn(&N) -> Option<C>,
        T: Fn(&N, &N) -> Option<C>,
        H: Fn(&N, &N) -> C,
        E: Fn(&N, &N, &mut dyn FnMut(N)),
    {
        Self {
            state_cost,
            transition_cost,
            heuristic,
            neighbors,
        }
    }
}

impl<N, C, S, T, H, E> SearchGraph<N> for FnGraph<S, T, H, E>
where
    C: Cost,
    S: Fn(&N) -> Option<C>,
    T: Fn(&N, &N) -> Option<C>,
    H: Fn(&N, &N) -> C,
    E: Fn(&N, &N, &mut dyn FnMut(N)),
{
    type Cost = C;

    fn state_cost(&self, node: &N) -> Option<C> {
        (self.state_cost)(node)
    }

    fn transition_cost(&self, from: &N, to: &N) -> Option<C> {
        (self.transition_cost)(from, to)
    }

    fn heuristic(&self, from: &N, to: &N) -> C {
        (self.heuristic)(from, to)
    }

    fn neighbors(&self, parent: &N, current: &N, emit: &mut dyn FnMut(N)) {
        (self.neighbors)(parent, current, emit)
    }
}

/// View of a graph for a search running from the goal back to the start.
///
/// Transitions are priced with their arguments swapped, so relaxing
/// `current -> neighbor` in the backward search pays for the forward edge
/// `neighbor -> current`.
pub struct Reversed<'a, G> {
    inner: &'a G,
}

impl<'a, G> Reversed<'a, G> {
    pub fn new(inner: &'a G) -> Self {
        Self { inner }
    }
}

impl<N, G: SearchGraph<N>> SearchGraph<N> for Reversed<'_, G> {
    type Cost = G::Cost;

    fn state_cost(&self, node: &N) -> Option<G::Cost> {
        self.inner.state_cost(node)
    }

    fn transition_cost(&self, from: &N, to: &N) -> Option<G::Cost> {
        self.inner.transition_cost(to, from)
    }

    fn heuristic(&self, from: &N, to: &N) -> G::Cost {
        self.inner.heuristic(from, to)
    }

    fn neighbors(&self, parent: &N, current: &N, emit: &mut dyn FnMut(N)) {
        self.inner.neighbors(parent, current, emit)
    }
}

/// Prices `path` (which excludes `from`) the way the search does: every
/// entered node pays its state cost plus the cost of the edge into it.
///
/// Returns `None` if any node or edge along the path is blocked.
pub fn walk_cost<N, G: SearchGraph<N>>(graph: &G, from: &N, path: &[N]) -> Option<G::Cost> {
    let mut total = G::Cost::ZERO;
    let mut previous = from;

    for node in path {
        total = total + graph.state_cost(node)? + graph.transition_cost(previous, node)?;
        previous = node;
    }

    Some(total)
}
