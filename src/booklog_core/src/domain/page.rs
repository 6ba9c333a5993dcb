use serde::Serialize;

use super::book_query::PageRequest;

/// One page of a listing plus the totals a client needs to paginate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.size());
        let total_pages = total_elements.div_ceil(size);
        let number = request.number();

        Self {
            content,
            number,
            size: request.size(),
            total_elements,
            total_pages,
            first: number == 0,
            last: u64::from(number) + 1 >= total_pages,
        }
    }

    /// Swaps the content for a projection of it, keeping the paging totals.
    pub fn with_content<U>(self, content: Vec<U>) -> Page<U> {
        Page {
            content,
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
        }
    }
}
