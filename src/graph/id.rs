use std::borrow::Borrow;
use std::fmt;

const ALPHABET_LEN: usize = 26;

/// Label of a vertex. Ordered lexicographically by its text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(String);

impl VertexId {
	/// Id for the `n`-th vertex ever created (zero based).
	pub fn nth(n: usize) -> Self {
		Self(label_for(n))
	}

	/// Label text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for VertexId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for VertexId {
	fn from(s: &str) -> Self {
		Self(s.to_owned())
	}
}

impl From<String> for VertexId {
	fn from(s: String) -> Self {
		Self(s)
	}
}

impl AsRef<str> for VertexId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for VertexId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

/// Bijective base-26 label: A..Z, then AA..AZ, BA..ZZ, AAA, and so on.
pub fn label_for(n: usize) -> String {
	let mut k = n + 1;
	let mut digits = Vec::new();
	while k > 0 {
		k -= 1;
		digits.push(char::from(b'A' + (k % ALPHABET_LEN) as u8));
		k /= ALPHABET_LEN;
	}
	digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn single_letters() {
		assert_eq!(label_for(0), "A");
		assert_eq!(label_for(1), "B");
		assert_eq!(label_for(25), "Z");
	}

	#[test]
	fn continues_past_z() {
		assert_eq!(label_for(26), "AA");
		assert_eq!(label_for(27), "AB");
		assert_eq!(label_for(51), "AZ");
		assert_eq!(label_for(52), "BA");
		assert_eq!(label_for(701), "ZZ");
		assert_eq!(label_for(702), "AAA");
	}

	#[test]
	fn labels_are_unique() {
		let labels: std::collections::HashSet<_> = (0..2000).map(label_for).collect();
		assert_eq!(labels.len(), 2000);
	}

	#[test]
	fn orders_by_text() {
		assert!(VertexId::from("AA") < VertexId::from("B"));
		assert_eq!(VertexId::nth(2).to_string(), "C");
	}
}
