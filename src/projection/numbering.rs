/// A row paired with its 1-based display position
#[derive(Debug, Clone, PartialEq)]
pub struct Numbered<T> {
    pub position: usize,
    pub item: T,
}

pub fn numbered<T>(items: impl IntoIterator<Item = T>) -> Vec<Numbered<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| Numbered { position: i + 1, item })
        .collect()
}
