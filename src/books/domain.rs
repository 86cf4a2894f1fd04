use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn is_read(&self) -> bool;
    fn matches(&self, folded_query: &str) -> bool;
}

// Case-folds text for lookups and matching; display keeps the original
// casing, comparisons ignore case and surrounding whitespace.
pub(crate) fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use crate::books::domain::fold;

    #[tokio::test]
    async fn test_should_fold_text() {
        assert_eq!("dune", fold("  Dune "));
        assert_eq!("frank herbert", fold("Frank Herbert"));
    }
}
