use rand::Rng;

use crate::Coord;

/// Picks the next apple cell uniformly in `[0, width)` on both axes.
///
/// There is no re-roll against occupied cells, so the apple may land on the
/// snake; documented behavior carried over from the original game.
pub fn generate<R: Rng>(rng: &mut R, width: i32) -> Coord {
    (rng.gen_range(0..width), rng.gen_range(0..width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_apples_stay_on_the_board() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let (x, y) = generate(&mut rng, 7);
            assert!((0..7).contains(&x));
            assert!((0..7).contains(&y));
        }
    }
}
