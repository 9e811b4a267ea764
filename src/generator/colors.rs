use rand::Rng;
use rand::seq::SliceRandom;

use super::error::GenerateError;
use crate::model::Color;

/// Colors `node_count` nodes from `palette[..color_count]`.
///
/// Every color gets `node_count / color_count` nodes and a random subset of
/// `node_count % color_count` colors gets one more, so class sizes differ by at
/// most one. The result is shuffled.
pub fn assign<R: Rng + ?Sized>(
	node_count: usize,
	color_count: usize,
	palette: &[Color],
	rng: &mut R,
) -> Result<Vec<Color>, GenerateError> {
	if color_count == 0 || color_count > palette.len() {
		return Err(GenerateError::InvalidColorCount {
			requested: color_count,
			available: palette.len(),
		});
	}
	let colors = &palette[..color_count];

	let mut extra = colors.to_vec();
	extra.shuffle(rng);
	extra.truncate(node_count % color_count);

	let mut pool: Vec<Color> = colors
		.iter()
		.flat_map(|&c| std::iter::repeat_n(c, node_count / color_count))
		.chain(extra)
		.collect();
	pool.shuffle(rng);
	Ok(pool)
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	use super::*;

	const RED: Color = Color::rgba(200, 50, 50, 255);
	const BLUE: Color = Color::rgba(50, 50, 200, 255);
	const GRAY: Color = Color::rgba(50, 50, 50, 255);

	fn counts(colors: &[Color]) -> HashMap<Color, usize> {
		let mut counts = HashMap::new();
		for &c in colors {
			*counts.entry(c).or_insert(0) += 1;
		}
		counts
	}

	#[test]
	fn ten_nodes_three_colors_split_four_three_three() {
		let mut rng = ChaCha8Rng::seed_from_u64(42);
		for _ in 0..50 {
			let colors = assign(10, 3, &[RED, BLUE, GRAY], &mut rng).unwrap();
			let mut sizes: Vec<_> = counts(&colors).into_values().collect();
			sizes.sort_unstable();
			assert_eq!(sizes, vec![3, 3, 4]);
		}
	}

	#[test]
	fn bad_color_counts_are_rejected() {
		let mut rng = ChaCha8Rng::seed_from_u64(0);
		assert!(assign(5, 0, &[RED], &mut rng).is_err());
		assert_eq!(
			assign(5, 4, &[RED, BLUE, GRAY], &mut rng),
			Err(GenerateError::InvalidColorCount {
				requested: 4,
				available: 3
			})
		);
		assert_eq!(assign(0, 2, &[RED, BLUE], &mut rng), Ok(vec![]));
	}

	proptest! {
		#[test]
		fn class_sizes_differ_by_at_most_one(n in 0usize..200, k in 1usize..=3, seed: u64) {
			let mut rng = ChaCha8Rng::seed_from_u64(seed);
			let palette = [RED, BLUE, GRAY];
			let colors = assign(n, k, &palette, &mut rng).unwrap();
			prop_assert_eq!(colors.len(), n);
			prop_assert!(colors.iter().all(|c| palette[..k].contains(c)));
			let counts = counts(&colors);
			let sizes: Vec<usize> = palette[..k]
				.iter()
				.map(|c| counts.get(c).copied().unwrap_or(0))
				.collect();
			let min = sizes.iter().min().copied().unwrap_or(0);
			let max = sizes.iter().max().copied().unwrap_or(0);
			prop_assert!(max - min <= 1);
		}
	}
}
