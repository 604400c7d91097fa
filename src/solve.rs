use crate::{Maze, Pos, Route};

/// Visited resting positions, each mapped to the position it was slid from.
///
/// The start maps to `None`. Insertion order doubles as the BFS queue.
pub type Parents = indexmap::IndexMap<Pos, Option<Pos>, fxhash::FxBuildHasher>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Route),
    NotFound,
    /// More than `limit` positions were expanded without reaching the finish.
    LimitExceeded,
}

/// Shortest route by number of slides, or `None` if the finish is unreachable.
pub fn find_path(maze: &Maze) -> Option<Route> {
    match bfs(maze, None, || {}) {
        Outcome::Found(route) => Some(route),
        Outcome::NotFound | Outcome::LimitExceeded => None,
    }
}

pub fn bfs(maze: &Maze, limit: Option<usize>, mut on_step: impl FnMut()) -> Outcome {
    let mut parents = Parents::default();
    parents.insert(maze.start(), None);

    let mut cursor = 0;
    while let Some((&pos, _)) = parents.get_index(cursor) {
        #[cfg(feature = "coz")]
        coz::scope!("Expand");

        if pos == maze.finish() {
            let route = Route::reconstruct(&parents, maze.start(), pos);
            log::debug!(
                "Found a route of {} slides after expanding {cursor} of {} positions",
                route.slide_count(),
                parents.len(),
            );
            return Outcome::Found(route);
        }

        if limit.map_or(false, |limit| cursor >= limit) {
            log::debug!("Gave up after expanding {cursor} positions");
            return Outcome::LimitExceeded;
        }

        on_step();

        #[cfg(feature = "coz")]
        coz::progress!("Step");

        for (dir, next) in maze.slides(pos) {
            // Self-loops and revisits are already keys.
            if !parents.contains_key(&next) {
                log::trace!("{pos:?} --{dir}--> {next:?}");
                parents.insert(next, Some(pos));
            }
        }
        cursor += 1;
    }

    log::debug!("No route after expanding {} positions", parents.len());
    Outcome::NotFound
}
