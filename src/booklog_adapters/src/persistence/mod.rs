pub mod hashmap_book_store;
pub mod hashmap_user_store;
pub mod postgres_book_store;
pub mod postgres_user_store;

/// Turns a search term into an `ILIKE` pattern matching it as a literal
/// substring: `%`, `_` and the escape character itself are escaped.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
