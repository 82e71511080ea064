use std::collections::HashSet;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::motion::{Direction, Motion};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Position {
        Position { x, y }
    }

    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn chebyshev(self, other: Position) -> i64 {
        i64::max((other.x - self.x).abs(), (other.y - self.y).abs())
    }

    /// Where this knot ends up once `leader` has moved.
    ///
    /// A knot still touching its leader stays put. Otherwise it closes in by at most one unit on
    /// each axis, which is a diagonal step whenever the two are in neither the same row nor the
    /// same column.
    pub fn follow(self, leader: Position) -> Position {
        let dx = leader.x - self.x;
        let dy = leader.y - self.y;

        if dx.abs() > 1 || dy.abs() > 1 {
            Position {
                x: self.x + dx.signum(),
                y: self.y + dy.signum(),
            }
        } else {
            self
        }
    }
}

/// A chain of knots, knot 0 being the head.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Rope {
    knots: Vec<Position>,
}

impl Rope {
    /// Every knot starts on the origin.
    ///
    /// # Panics
    ///
    /// If `knots` is below 2, a rope needs a head and a tail.
    pub fn new(knots: usize) -> Rope {
        assert!(knots >= 2, "a rope needs at least 2 knots, got {}", knots);
        Rope {
            knots: vec![Position::default(); knots],
        }
    }

    /// Moves the head one unit, then lets every other knot catch up, in chain order.
    pub fn advance(&mut self, direction: Direction) {
        let Some((head, rest)) = self.knots.split_first_mut() else {
            return;
        };

        *head = head.step(direction);
        let mut leader = *head;

        // Each knot has to see its leader's position from this same step.
        for knot in rest {
            *knot = knot.follow(leader);
            leader = *knot;
        }
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn head(&self) -> Position {
        self.knots[0]
    }

    pub fn tail(&self) -> Position {
        self.knots[self.knots.len() - 1]
    }

    pub fn knot(&self, index: usize) -> Option<Position> {
        self.knots.get(index).copied()
    }

    /// True when every knot touches the next one.
    pub fn is_settled(&self) -> bool {
        self.knots
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.chebyshev(*b) <= 1)
    }
}

/// Distinct cells visited by a rope's tail.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Visits {
    seen: HashSet<Position>,
}

impl Visits {
    pub fn record(&mut self, position: Position) {
        self.seen.insert(position);
    }

    pub fn count(&self) -> usize {
        self.seen.len()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.seen.contains(&position)
    }
}

#[derive(Clone, Debug)]
pub struct Simulation {
    rope: Rope,
    visits: Visits,
}

impl Simulation {
    pub fn new(knots: usize) -> Simulation {
        let rope = Rope::new(knots);
        let mut visits = Visits::default();
        visits.record(rope.tail());
        Simulation { rope, visits }
    }

    pub fn apply(&mut self, motion: Motion) {
        for direction in motion.steps() {
            self.rope.advance(direction);
            trace!(head = ?self.rope.head(), tail = ?self.rope.tail(), "advanced");
            self.visits.record(self.rope.tail());
        }

        debug!(
            ?motion,
            head = ?self.rope.head(),
            tail = ?self.rope.tail(),
            visited = self.visits.count(),
            "applied motion"
        );
    }

    pub fn run<I>(&mut self, motions: I)
    where
        I: IntoIterator<Item = Motion>,
    {
        for motion in motions {
            self.apply(motion);
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn visits(&self) -> &Visits {
        &self.visits
    }
}

/// Number of distinct cells the last of `knots` knots visits while the head follows `motions`.
pub fn count_tail_visits(motions: &[Motion], knots: usize) -> usize {
    let mut simulation = Simulation::new(knots);
    simulation.run(motions.iter().copied());
    simulation.visits().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::motion::parse_motions;

    const SHORT_EXAMPLE: &str = "\
        R 4\n\
        U 4\n\
        L 3\n\
        D 1\n\
        R 4\n\
        D 1\n\
        L 5\n\
        R 2\n";

    const LONG_EXAMPLE: &str = "\
        R 5\n\
        U 8\n\
        L 8\n\
        D 3\n\
        R 17\n\
        D 10\n\
        L 25\n\
        U 20\n";

    fn motions(input: &str) -> Vec<Motion> {
        parse_motions(input).unwrap()
    }

    #[test]
    fn test_follow() {
        let origin = Position::new(0, 0);

        // Touching, including diagonally and overlapping.
        assert_eq!(origin.follow(Position::new(0, 0)), origin);
        assert_eq!(origin.follow(Position::new(1, 1)), origin);
        assert_eq!(origin.follow(Position::new(-1, 0)), origin);

        // Same row or column.
        assert_eq!(origin.follow(Position::new(2, 0)), Position::new(1, 0));
        assert_eq!(origin.follow(Position::new(0, -2)), Position::new(0, -1));

        // Off by one on the other axis still means a diagonal step.
        assert_eq!(origin.follow(Position::new(2, 1)), Position::new(1, 1));
        assert_eq!(origin.follow(Position::new(-1, -2)), Position::new(-1, -1));

        // Only happens in ropes longer than 2.
        assert_eq!(origin.follow(Position::new(2, -2)), Position::new(1, -1));
    }

    #[test]
    fn test_short_rope_example() {
        assert_eq!(count_tail_visits(&motions(SHORT_EXAMPLE), 2), 13);
    }

    #[test]
    fn test_long_rope_examples() {
        assert_eq!(count_tail_visits(&motions(SHORT_EXAMPLE), 10), 1);
        assert_eq!(count_tail_visits(&motions(LONG_EXAMPLE), 10), 36);
    }

    #[test]
    fn test_short_rope_tail_path() {
        let mut simulation = Simulation::new(2);
        simulation.run(motions("R 4\nU 4\n"));

        assert_eq!(simulation.rope().head(), Position::new(4, 4));
        assert_eq!(simulation.rope().tail(), Position::new(4, 3));
        for x in 0..=3 {
            assert!(simulation.visits().contains(Position::new(x, 0)));
        }
        assert!(simulation.visits().contains(Position::new(4, 1)));
        assert!(!simulation.visits().contains(Position::new(4, 0)));
    }

    #[test]
    fn test_invariants_hold_after_every_advance() {
        for knots in [2, 3, 10] {
            let mut rope = Rope::new(knots);
            let mut expected_head = Position::default();

            for motion in motions(LONG_EXAMPLE).into_iter().chain(motions(SHORT_EXAMPLE)) {
                for direction in motion.steps() {
                    rope.advance(direction);
                    expected_head = expected_head.step(direction);

                    assert!(rope.is_settled(), "{:?}", rope);
                    assert_eq!(rope.head(), expected_head);
                }
            }

            assert_eq!(rope.len(), knots);
            assert_eq!(rope.knot(0), Some(rope.head()));
            assert_eq!(rope.knot(knots - 1), Some(rope.tail()));
            assert_eq!(rope.knot(knots), None);
        }
    }

    #[test]
    fn test_replay_is_deterministic() {
        let moves = motions(LONG_EXAMPLE);

        let mut first = Simulation::new(10);
        first.run(moves.iter().copied());
        let mut second = Simulation::new(10);
        second.run(moves.iter().copied());

        assert_eq!(first.visits(), second.visits());
        assert_eq!(first.rope(), second.rope());
    }

    #[test]
    fn test_visits_are_a_set() {
        let mut visits = Visits::default();
        visits.record(Position::new(1, 2));
        visits.record(Position::new(1, 2));
        visits.record(Position::new(-1, 2));
        assert_eq!(visits.count(), 2);
    }

    #[test]
    fn test_origin_counts_without_motions() {
        assert_eq!(count_tail_visits(&[], 2), 1);
    }

    #[test]
    #[should_panic]
    fn test_rope_needs_a_tail() {
        Rope::new(1);
    }
}
