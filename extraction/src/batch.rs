use std::{num::NonZeroU32, ops::RangeInclusive};

/// Number of pages handed to table detection in a single call, unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: NonZeroU32 = NonZeroU32::new(50).unwrap();

/// Contiguous inclusive range of 1-based page numbers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PageRange {
    pub first: u32,
    pub last: u32,
}

impl PageRange {
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }

    pub fn page_count(&self) -> u32 {
        self.last - self.first + 1
    }
}

impl std::fmt::Display for PageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

/// Partitions pages `1..=total_pages` into ascending batches of `batch_size` pages. The final
/// batch holds whatever pages remain.
pub fn page_batches(total_pages: u32, batch_size: NonZeroU32) -> Vec<PageRange> {
    let step = batch_size.get() - 1;
    let mut batches = Vec::with_capacity(total_pages.div_ceil(batch_size.get()) as usize);

    let mut first = 1;
    while first <= total_pages {
        let last = first.saturating_add(step).min(total_pages);
        batches.push(PageRange { first, last });
        match last.checked_add(1) {
            Some(next) => first = next,
            None => break,
        }
    }

    batches
}
