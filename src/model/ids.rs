use super::types::TokenId;

/// Monotonic token id source. Each [`Graph`](super::Graph) owns one, so independent
/// sessions never share a counter.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
	next: u64,
}

impl IdAllocator {
	/// A fresh allocator starting at id 0.
	pub fn new() -> Self {
		Self::default()
	}

	/// Hands out the next unused token id.
	pub fn next_token(&mut self) -> TokenId {
		let id = TokenId(self.next);
		self.next += 1;
		id
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_are_monotonic_and_per_allocator() {
		let mut a = IdAllocator::new();
		let mut b = IdAllocator::new();
		assert_eq!(a.next_token(), TokenId(0));
		assert_eq!(a.next_token(), TokenId(1));
		assert_eq!(b.next_token(), TokenId(0));
	}
}
