use super::grid::Position;
use std::collections::HashSet;

/// The fixed layout of the playing field for a session
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct LevelMap {
    obstacles: HashSet<Position>,
}

impl LevelMap {
    /// Create a level with the given obstacles.  Positions outside the field
    /// are discarded.
    pub(crate) fn new<I: IntoIterator<Item = Position>>(obstacles: I) -> LevelMap {
        LevelMap {
            obstacles: obstacles.into_iter().filter(|p| p.in_bounds()).collect(),
        }
    }

    pub(crate) fn obstacles(&self) -> &HashSet<Position> {
        &self.obstacles
    }

    pub(crate) fn is_obstacle(&self, pos: Position) -> bool {
        self.obstacles.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_obstacles_dropped() {
        let level = LevelMap::new([
            Position::new(1, 1),
            Position::new(-1, 0),
            Position::new(30, 3),
            Position::new(1, 1),
            Position::new(29, 19),
        ]);
        assert_eq!(
            level.obstacles(),
            &HashSet::from([Position::new(1, 1), Position::new(29, 19)])
        );
        assert!(level.is_obstacle(Position::new(29, 19)));
        assert!(!level.is_obstacle(Position::new(0, 0)));
    }
}
