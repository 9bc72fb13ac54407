use crate::Page;
use crate::error::{PageError, Result};

use std::fmt::{Debug, Formatter};

/// A container for packets in an OGG file
///
/// Packets are reassembled from the laces of a sequence of pages. A lace left open at the end
/// of one page is joined with the first lace of the next page, so long as that page is marked as
/// continued.
pub struct Packets {
	content: Vec<u8>,
	packet_sizes: Vec<u64>,
}

impl Packets {
	/// Reassemble as many packets as possible from a sequence of pages
	///
	/// The pages are expected to belong to a single logical bitstream, in order. The first page is always
	/// treated as starting a new packet.
	///
	/// A packet left open at the end of a page is discarded if the next page with laces doesn't continue it.
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use ogg_pages::{Packets, read_pages};
	///
	/// # fn main() -> Result<(), ogg_pages::PageError> {
	/// let mut file = std::fs::File::open("foo.ogg")?;
	///
	/// let pages = read_pages(&mut file)?;
	/// let packets = Packets::from_pages(&pages);
	///
	/// for packet in &packets {
	/// 	println!("Packet size: {}", packet.len());
	/// }
	/// # Ok(()) }
	/// ```
	pub fn from_pages<'a, I>(pages: I) -> Self
	where
		I: IntoIterator<Item = &'a Page>,
	{
		let mut packets = Self::empty();
		packets.extend_from_pages(pages, None);
		packets
	}

	/// Reassemble a specific number of packets from a sequence of pages
	///
	/// This stops reading pages as soon as `count` packets are complete.
	///
	/// NOTE: A `count` of 0 will return an empty [`Packets`]
	///
	/// # Errors
	///
	/// The pages end before `count` packets could be completed ([`PageError::NotEnoughData`])
	pub fn from_pages_count<'a, I>(pages: I, count: usize) -> Result<Self>
	where
		I: IntoIterator<Item = &'a Page>,
	{
		let mut packets = Self::empty();
		if count == 0 {
			return Ok(packets);
		}

		if !packets.extend_from_pages(pages, Some(count)) {
			return Err(PageError::NotEnoughData);
		}

		Ok(packets)
	}

	fn empty() -> Self {
		Self {
			content: Vec::new(),
			packet_sizes: Vec::new(),
		}
	}

	// Returns `true` if `count` packets were completed
	fn extend_from_pages<'a, I>(&mut self, pages: I, count: Option<usize>) -> bool
	where
		I: IntoIterator<Item = &'a Page>,
	{
		let mut completed = 0;
		let mut packet_open = false;

		for page in pages {
			let joins_previous = packet_open && page.is_continued() && !page.is_first();
			let lace_count = page.laces().len();

			for (idx, lace) in page.packets().enumerate() {
				if idx == 0 && joins_previous {
					if let Some(size) = self.packet_sizes.last_mut() {
						*size += lace.len() as u64;
					}
				} else {
					// An open packet that isn't continued can never be completed
					if idx == 0 && packet_open {
						self.discard_last_packet();
					}

					self.packet_sizes.push(lace.len() as u64);
				}

				self.content.extend_from_slice(lace);

				// The final lace is only complete if it was terminated within this page
				let is_final_lace = idx + 1 == lace_count;
				if is_final_lace && page.ends_with_open_lace() {
					continue;
				}

				completed += 1;
				if Some(completed) == count {
					return true;
				}
			}

			// A page with no laces leaves any open packet as is
			if lace_count > 0 {
				packet_open = page.ends_with_open_lace();
			}
		}

		// A packet still open at the end of the pages is kept as is
		count.is_none_or(|count| {
			packet_open && completed + 1 == count && !self.packet_sizes.is_empty()
		})
	}

	fn discard_last_packet(&mut self) {
		if let Some(size) = self.packet_sizes.pop() {
			let len = self.content.len() - size as usize;
			self.content.truncate(len);
		}
	}

	/// Returns the number of packets
	pub fn len(&self) -> usize {
		self.packet_sizes.len()
	}

	/// Returns true if there are no packets
	pub fn is_empty(&self) -> bool {
		self.packet_sizes.is_empty()
	}

	/// Gets the packet at a specified index, returning its contents
	///
	/// NOTES:
	///
	/// * This is zero-indexed
	/// * If the index is out of bounds, it will return [`None`]
	pub fn get(&self, idx: usize) -> Option<&[u8]> {
		let packet_size = *self.packet_sizes.get(idx)?;
		let start_pos = self.packet_sizes[..idx].iter().sum::<u64>() as usize;

		Some(&self.content[start_pos..start_pos + packet_size as usize])
	}

	/// Returns an iterator over the packets
	pub fn iter(&self) -> PacketsIter<'_> {
		<&Self as IntoIterator>::into_iter(self)
	}
}

/// An iterator over packets
///
/// This is created by calling `into_iter` on [`Packets`]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PacketsIter<'a> {
	content: &'a [u8],
	packet_sizes: &'a [u64],
}

impl<'a> Iterator for PacketsIter<'a> {
	type Item = &'a [u8];

	fn next(&mut self) -> Option<Self::Item> {
		let (&packet_size, remaining_sizes) = self.packet_sizes.split_first()?;
		self.packet_sizes = remaining_sizes;

		let (ret, remaining) = self.content.split_at(packet_size as usize);
		self.content = remaining;

		Some(ret)
	}
}

impl<'a> IntoIterator for &'a Packets {
	type Item = &'a [u8];
	type IntoIter = PacketsIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		PacketsIter {
			content: &self.content,
			packet_sizes: &self.packet_sizes,
		}
	}
}

impl Debug for Packets {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Packets")
			.field("total_bytes", &self.content.len())
			.field("count", &self.packet_sizes.len())
			.finish()
	}
}
