use std::borrow::Cow;

macro_rules! impl_accessor {
	($($name:ident => $key:literal;)+) => {
		paste::paste! {
			$(
				#[doc = "Returns the `" $key "` field, if it exists"]
				pub fn $name(&self) -> Option<Cow<'_, str>> {
					self.get($key).map(Cow::Borrowed)
				}

				#[doc = "Sets the `" $key "` field, see [`VorbisComments::insert`]"]
				pub fn [<set_ $name>](&mut self, value: String) {
					let _ = self.insert(String::from($key), value);
				}

				#[doc = "Removes the `" $key "` field"]
				pub fn [<remove_ $name>](&mut self) {
					let _ = self.remove($key);
				}
			)+
		}
	}
}

/// The decoded contents of a Vorbis comment header
///
/// ## Duplicate keys
///
/// Comments are kept in the order they were decoded. A comment table holds at most one value per key:
/// when a key is inserted again (compared exactly, case-sensitive), the new value replaces the old one
/// **in place**. The key keeps the position of its first occurrence, and the last value wins.
#[derive(Default, PartialEq, Eq, Debug, Clone)]
pub struct VorbisComments {
	/// An identifier for the encoding software
	pub(crate) vendor: String,
	/// A collection of key-value pairs
	pub(crate) items: Vec<(String, String)>,
}

impl VorbisComments {
	/// Create a new empty `VorbisComments`
	///
	/// # Examples
	///
	/// ```rust
	/// use vorbis_info::VorbisComments;
	///
	/// let vorbis_comments = VorbisComments::new();
	/// assert!(vorbis_comments.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the vendor string
	///
	/// ```rust
	/// use vorbis_info::VorbisComments;
	///
	/// let mut vorbis_comments = VorbisComments::default();
	/// assert!(vorbis_comments.vendor().is_empty());
	///
	/// vorbis_comments.set_vendor(String::from("FooBar"));
	/// assert_eq!(vorbis_comments.vendor(), "FooBar");
	/// ```
	pub fn vendor(&self) -> &str {
		&self.vendor
	}

	/// Sets the vendor string
	pub fn set_vendor(&mut self, vendor: String) {
		self.vendor = vendor
	}

	/// Gets an item by key
	///
	/// NOTE: The key is compared exactly (case-sensitive)
	///
	/// # Examples
	///
	/// ```rust
	/// use vorbis_info::VorbisComments;
	///
	/// let mut vorbis_comments = VorbisComments::default();
	///
	/// vorbis_comments.insert(String::from("TITLE"), String::from("Foo title"));
	///
	/// assert_eq!(vorbis_comments.get("TITLE"), Some("Foo title"));
	/// assert_eq!(vorbis_comments.get("title"), None);
	/// ```
	pub fn get(&self, key: &str) -> Option<&str> {
		self.items
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Inserts an item, returning the value it replaced
	///
	/// If an item with the same key already exists, its value is replaced in place. The item keeps its
	/// original position, and the last inserted value wins.
	///
	/// # Examples
	///
	/// ```rust
	/// use vorbis_info::VorbisComments;
	///
	/// let mut vorbis_comments = VorbisComments::default();
	///
	/// vorbis_comments.insert(String::from("ARTIST"), String::from("Foo artist"));
	/// vorbis_comments.insert(String::from("TITLE"), String::from("Foo title"));
	///
	/// let previous = vorbis_comments.insert(String::from("ARTIST"), String::from("Bar artist"));
	/// assert_eq!(previous.as_deref(), Some("Foo artist"));
	///
	/// let items = vorbis_comments.items().collect::<Vec<_>>();
	/// assert_eq!(items, vec![("ARTIST", "Bar artist"), ("TITLE", "Foo title")]);
	/// ```
	pub fn insert(&mut self, key: String, value: String) -> Option<String> {
		if let Some((_, existing)) = self.items.iter_mut().find(|(k, _)| *k == key) {
			return Some(std::mem::replace(existing, value));
		}

		self.items.push((key, value));
		None
	}

	/// Removes an item by key, returning its value
	pub fn remove(&mut self, key: &str) -> Option<String> {
		let idx = self.items.iter().position(|(k, _)| k == key)?;
		Some(self.items.remove(idx).1)
	}

	/// Returns an iterator over the `(key, value)` pairs, in decode order
	pub fn items(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + Clone {
		self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Returns the number of items
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether there are no items
	///
	/// NOTE: The vendor string is not an item
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	impl_accessor!(
		title        => "TITLE";
		artist       => "ARTIST";
		album        => "ALBUM";
		genre        => "GENRE";
		date         => "DATE";
		track_number => "TRACKNUMBER";
	);
}

impl IntoIterator for VorbisComments {
	type Item = (String, String);
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}
