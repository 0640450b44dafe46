//! Named field extractors.

use std::fmt;
use std::sync::Arc;

type Extractor<T> = dyn Fn(&T) -> String + Send + Sync;

/// A field id paired with a pure function that reads that field's text from
/// an item.
///
/// Cloning shares the extractor, so one resolver can serve every item and
/// every query of a session.
pub struct FieldResolver<T> {
    field_id: String,
    resolve: Arc<Extractor<T>>,
}

impl<T> FieldResolver<T> {
    /// Resolver for `field_id` extracting text with `resolve`.
    pub fn new<F>(field_id: impl Into<String>, resolve: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            field_id: field_id.into(),
            resolve: Arc::new(resolve),
        }
    }

    #[must_use]
    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    /// Field text for `item`.
    #[must_use]
    pub fn resolve(&self, item: &T) -> String {
        (self.resolve)(item)
    }
}

impl<T> Clone for FieldResolver<T> {
    fn clone(&self) -> Self {
        Self {
            field_id: self.field_id.clone(),
            resolve: Arc::clone(&self.resolve),
        }
    }
}

impl<T> fmt::Debug for FieldResolver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldResolver")
            .field("field_id", &self.field_id)
            .finish_non_exhaustive()
    }
}
